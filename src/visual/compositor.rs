use crate::render::DisplaySink;
use crate::visual::field::NoiseGrid;
use crate::visual::palette::{color_from_palette, Rgb};
use crate::visual::presets::ActivePreset;

/// Maps the noise grid through the active palette, one full repaint per frame.
#[derive(Debug, Default)]
pub struct Compositor {
    hue_phase: u8,
}

impl Compositor {
    pub fn new() -> Self {
        Self { hue_phase: 0 }
    }

    pub fn with_hue_phase(hue_phase: u8) -> Self {
        Self { hue_phase }
    }

    pub fn hue_phase(&self) -> u8 {
        self.hue_phase
    }

    /// Color for cell `(x, y)`. Brightness comes from the transposed cell
    /// `(y, x)`, which gives the diagonal shimmer.
    pub fn cell_color(&self, grid: &NoiseGrid, preset: &ActivePreset, x: usize, y: usize) -> Rgb {
        let mut index = grid.get(x, y);
        if preset.hue_loop {
            index = index.wrapping_add(self.hue_phase);
        }
        let brightness = grid.get(y, x);
        color_from_palette(&preset.palette, index, brightness)
    }

    /// Paints every pixel, then steps the hue phase whether or not the
    /// preset loops hue.
    pub fn render(&mut self, grid: &NoiseGrid, preset: &ActivePreset, sink: &mut dyn DisplaySink) {
        let n = grid.size();
        for x in 0..n {
            for y in 0..n {
                sink.set_pixel(x, y, self.cell_color(grid, preset, x, y));
            }
        }
        self.hue_phase = self.hue_phase.wrapping_add(1);
    }
}
