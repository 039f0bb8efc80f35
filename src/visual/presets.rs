use crate::input::InputEvent;
use crate::visual::palette::{self, Palette};

pub const PRESET_COUNT: usize = 12;

#[derive(Clone, Copy, Debug)]
pub enum PaletteSource {
    Fixed(Palette),
    Built(fn() -> Palette),
    /// Fresh four-stop gradient on every selection.
    Random,
}

#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub palette: PaletteSource,
    pub speed: u16,
    pub scale: u16,
    pub hue_loop: bool,
}

const fn preset(
    name: &'static str,
    palette: PaletteSource,
    speed: u16,
    scale: u16,
    hue_loop: bool,
) -> Preset {
    Preset {
        name,
        palette,
        speed,
        scale,
        hue_loop,
    }
}

pub const PRESETS: [Preset; PRESET_COUNT] = {
    use PaletteSource::*;
    [
        preset("Rainbow", Fixed(palette::RAINBOW), 20, 30, true),
        preset("Purple & Green", Built(palette::purple_and_green_stripes), 10, 50, true),
        preset("Zebra", Built(palette::black_and_white_stripes), 20, 30, true),
        preset("Forest", Fixed(palette::FOREST), 8, 120, false),
        preset("Clouds", Fixed(palette::CLOUD), 4, 30, false),
        preset("Lava", Fixed(palette::LAVA), 8, 50, false),
        preset("Ocean", Fixed(palette::OCEAN), 20, 90, false),
        preset("Party", Fixed(palette::PARTY), 20, 30, true),
        preset("Random Drift", Random, 20, 20, true),
        preset("Random Flow", Random, 50, 50, true),
        preset("Random Rapids", Random, 90, 90, true),
        preset("Rainbow Stripes", Fixed(palette::RAINBOW_STRIPE), 30, 20, true),
    ]
};

/// Parameters the field and compositor read for the current frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePreset {
    pub index: usize,
    pub name: &'static str,
    pub palette: Palette,
    pub speed: u16,
    pub scale: u16,
    pub hue_loop: bool,
}

impl ActivePreset {
    pub fn materialize(index: usize, rng: &mut fastrand::Rng) -> Self {
        let p = &PRESETS[index % PRESET_COUNT];
        let palette = match p.palette {
            PaletteSource::Fixed(pal) => pal,
            PaletteSource::Built(build) => build(),
            PaletteSource::Random => palette::random_palette(rng),
        };
        Self {
            index: index % PRESET_COUNT,
            name: p.name,
            palette,
            speed: p.speed,
            scale: p.scale,
            hue_loop: p.hue_loop,
        }
    }
}

/// Cyclic preset index plus the preset materialized for it.
pub struct PresetSelector {
    index: usize,
    active: ActivePreset,
    rng: fastrand::Rng,
}

impl PresetSelector {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    /// Starts at preset 0, applied exactly as an explicit selection would be.
    pub fn with_rng(mut rng: fastrand::Rng) -> Self {
        let active = ActivePreset::materialize(0, &mut rng);
        let selector = Self { index: 0, active, rng };
        selector.log_applied();
        selector
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> &ActivePreset {
        &self.active
    }

    pub fn advance(&mut self) {
        self.select((self.index + 1) % PRESET_COUNT);
    }

    pub fn retreat(&mut self) {
        self.select((self.index + PRESET_COUNT - 1) % PRESET_COUNT);
    }

    pub fn handle(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Advance => self.advance(),
            InputEvent::Retreat => self.retreat(),
        }
    }

    /// Re-materializes even when `index` is already active, so random
    /// presets draw a new palette.
    pub fn select(&mut self, index: usize) {
        self.index = index % PRESET_COUNT;
        self.active = ActivePreset::materialize(self.index, &mut self.rng);
        self.log_applied();
    }

    fn log_applied(&self) {
        tracing::debug!(
            index = self.index,
            name = self.active.name,
            speed = self.active.speed,
            scale = self.active.scale,
            hue_loop = self.active.hue_loop,
            "preset applied"
        );
    }
}

impl Default for PresetSelector {
    fn default() -> Self {
        Self::new()
    }
}
