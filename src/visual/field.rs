use crate::visual::noise::noise3;
use crate::visual::presets::ActivePreset;

/// Speeds at or above this sample the noise directly with no temporal blend.
pub const SMOOTHING_CUTOFF: u16 = 50;

/// Square grid of 0..=255 noise values, addressed as `[x][y]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseGrid {
    size: usize,
    cells: Vec<u8>,
}

impl NoiseGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[x * self.size + y]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.cells[x * self.size + y] = v;
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Sampling origin into the noise domain. Wraps silently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseState {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl PhaseState {
    pub fn step(&mut self, speed: u16) {
        let speed = speed as u32;
        self.z = self.z.wrapping_add(speed);
        self.x = self.x.wrapping_add(speed / 8);
        self.y = self.y.wrapping_sub(speed / 16);
    }
}

/// Inertia given to the previous value, out of 256. Zero means no smoothing.
pub fn smoothing_weight(speed: u16) -> u8 {
    if speed < SMOOTHING_CUTOFF {
        (200 - speed * 4) as u8
    } else {
        0
    }
}

/// `(old * w + raw * (256 - w)) / 256`; always lands between `old` and `raw`.
#[inline]
pub fn blend(old: u8, raw: u8, w: u8) -> u8 {
    let w = w as u32;
    ((old as u32 * w + raw as u32 * (256 - w)) >> 8) as u8
}

pub struct NoiseField {
    grid: NoiseGrid,
    phase: PhaseState,
}

impl NoiseField {
    pub fn new(size: usize) -> Self {
        Self {
            grid: NoiseGrid::new(size),
            phase: PhaseState::default(),
        }
    }

    pub fn with_phase(size: usize, phase: PhaseState) -> Self {
        Self {
            grid: NoiseGrid::new(size),
            phase,
        }
    }

    pub fn grid(&self) -> &NoiseGrid {
        &self.grid
    }

    pub fn phase(&self) -> PhaseState {
        self.phase
    }

    /// Resamples every cell and steps the phase. Call once per rendered frame.
    pub fn advance(&mut self, preset: &ActivePreset) {
        let scale = preset.scale as u32;
        let w = smoothing_weight(preset.speed);
        let n = self.grid.size();

        for x in 0..n {
            let sx = self.phase.x.wrapping_add(scale.wrapping_mul(x as u32));
            for y in 0..n {
                let sy = self.phase.y.wrapping_add(scale.wrapping_mul(y as u32));
                let raw = noise3(sx, sy, self.phase.z);
                let v = if w != 0 { blend(self.grid.get(x, y), raw, w) } else { raw };
                self.grid.set(x, y, v);
            }
        }

        self.phase.step(preset.speed);
    }
}
