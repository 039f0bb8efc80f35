use crate::visual::noise::scale8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(code: u32) -> Self {
        Self {
            r: (code >> 16) as u8,
            g: (code >> 8) as u8,
            b: code as u8,
        }
    }

    /// Packs into 5-6-5 bits, the format 16-bit LED panels take.
    pub fn to_565(self) -> u16 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | (self.b as u16 >> 3)
    }

    /// Expands 5-6-5 back to 8 bits per channel, replicating the high bits.
    pub fn from_565(packed: u16) -> Self {
        let r5 = ((packed >> 11) & 0x1F) as u8;
        let g6 = ((packed >> 5) & 0x3F) as u8;
        let b5 = (packed & 0x1F) as u8;
        Self {
            r: (r5 << 3) | (r5 >> 2),
            g: (g6 << 2) | (g6 >> 4),
            b: (b5 << 3) | (b5 >> 2),
        }
    }

    /// Hue/saturation/value on a 0..=255 scale for every component.
    pub fn from_hsv(h: u8, s: u8, v: u8) -> Self {
        let [r, g, b] = hsv_to_rgb(h as f32 / 256.0, s as f32 / 255.0, v as f32 / 255.0);
        Self { r, g, b }
    }
}

pub const HUE_GREEN: u8 = 85;
pub const HUE_PURPLE: u8 = 192;

/// Sixteen evenly spaced color stops; lookups interpolate between neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub entries: [Rgb; 16],
}

impl Palette {
    pub const fn from_hex(codes: [u32; 16]) -> Self {
        let mut entries = [Rgb::BLACK; 16];
        let mut i = 0;
        while i < 16 {
            entries[i] = Rgb::from_hex(codes[i]);
            i += 1;
        }
        Self { entries }
    }

    pub fn solid(color: Rgb) -> Self {
        Self { entries: [color; 16] }
    }
}

/// Color at `index` (high nibble selects the stop, low nibble blends toward
/// the next one, wrapping 15 -> 0), scaled by `brightness`.
pub fn color_from_palette(palette: &Palette, index: u8, brightness: u8) -> Rgb {
    let hi4 = (index >> 4) as usize;
    let lo4 = index & 0x0F;
    let a = palette.entries[hi4];

    let mut c = a;
    if lo4 != 0 {
        let b = palette.entries[(hi4 + 1) & 15];
        let f2 = lo4 << 4;
        let f1 = 255 - f2;
        let mix = |x: u8, y: u8| (scale8(x, f1) as u16 + scale8(y, f2) as u16).min(255) as u8;
        c = Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b));
    }

    match brightness {
        255 => c,
        0 => Rgb::BLACK,
        bri => {
            let bri = bri + 1;
            Rgb::new(scale8(c.r, bri), scale8(c.g, bri), scale8(c.b, bri))
        }
    }
}

pub const RAINBOW: Palette = Palette::from_hex([
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
]);

pub const RAINBOW_STRIPE: Palette = Palette::from_hex([
    0xFF0000, 0x000000, 0xAB5500, 0x000000, 0xABAB00, 0x000000, 0x00FF00, 0x000000,
    0x00AB55, 0x000000, 0x0000FF, 0x000000, 0x5500AB, 0x000000, 0xAB0055, 0x000000,
]);

pub const PARTY: Palette = Palette::from_hex([
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
    0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
]);

pub const CLOUD: Palette = Palette::from_hex([
    0x0000FF, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B,
    0x0000FF, 0x00008B, 0x87CEEB, 0x87CEEB, 0xADD8E6, 0xFFFFFF, 0xADD8E6, 0x87CEEB,
]);

pub const LAVA: Palette = Palette::from_hex([
    0x000000, 0x800000, 0x000000, 0x800000, 0x8B0000, 0x8B0000, 0x800000, 0x8B0000,
    0x8B0000, 0x8B0000, 0xFF0000, 0xFFA500, 0xFFFFFF, 0xFFA500, 0xFF0000, 0x8B0000,
]);

pub const OCEAN: Palette = Palette::from_hex([
    0x191970, 0x00008B, 0x191970, 0x000080, 0x00008B, 0x0000CD, 0x2E8B57, 0x008080,
    0x5F9EA0, 0x0000FF, 0x008B8B, 0x6495ED, 0x7FFFD4, 0x2E8B57, 0x00FFFF, 0x87CEFA,
]);

pub const FOREST: Palette = Palette::from_hex([
    0x006400, 0x006400, 0x556B2F, 0x006400, 0x008000, 0x228B22, 0x6B8E23, 0x008000,
    0x2E8B57, 0x66CDAA, 0x32CD32, 0x9ACD32, 0x90EE90, 0x7CFC00, 0x66CDAA, 0x228B22,
]);

/// White on every fourth stop, black elsewhere.
pub fn black_and_white_stripes() -> Palette {
    let mut p = Palette::solid(Rgb::BLACK);
    for i in [0, 4, 8, 12] {
        p.entries[i] = Rgb::WHITE;
    }
    p
}

pub fn purple_and_green_stripes() -> Palette {
    let purple = Rgb::from_hsv(HUE_PURPLE, 255, 255);
    let green = Rgb::from_hsv(HUE_GREEN, 255, 255);
    let black = Rgb::BLACK;
    Palette {
        entries: [
            green, green, black, black, purple, purple, black, black, green, green, black, black,
            purple, purple, black, black,
        ],
    }
}

/// An HSV color as (hue, saturation, value).
pub type Hsv = (u8, u8, u8);

/// Stretches four HSV anchors across the 16 stops at positions 0, 5, 10 and
/// 15, taking the shorter way around the hue circle between anchors.
pub fn four_stop_gradient(stops: [Hsv; 4]) -> Palette {
    let mut p = Palette::solid(Rgb::BLACK);
    let anchors = [0usize, 5, 10, 15];
    for seg in 0..3 {
        let (start, end) = (anchors[seg], anchors[seg + 1]);
        let (h0, s0, v0) = stops[seg];
        let (h1, s1, v1) = stops[seg + 1];
        let dh = h1.wrapping_sub(h0) as i8 as i32;
        let span = (end - start) as i32;
        for i in start..=end {
            let k = (i - start) as i32;
            let h = (h0 as i32 + dh * k / span).rem_euclid(256) as u8;
            let s = (s0 as i32 + (s1 as i32 - s0 as i32) * k / span) as u8;
            let v = (v0 as i32 + (v1 as i32 - v0 as i32) * k / span) as u8;
            p.entries[i] = Rgb::from_hsv(h, s, v);
        }
    }
    p
}

/// Dim anchor, bright anchor, pastel, bright anchor; every hue drawn fresh.
pub fn random_palette(rng: &mut fastrand::Rng) -> Palette {
    four_stop_gradient([
        (rng.u8(..), 255, 32),
        (rng.u8(..), 255, 255),
        (rng.u8(..), 128, 255),
        (rng.u8(..), 255, 255),
    ])
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let h = fract01(h) * 6.0;
    let i = h.floor() as i32;
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

fn fract01(x: f32) -> f32 {
    let f = x - x.floor();
    if f < 0.0 { f + 1.0 } else { f }
}
