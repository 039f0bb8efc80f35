mod compositor;
mod field;
pub mod noise;
pub mod palette;
mod presets;

use crate::input::InputEvent;
use crate::render::DisplaySink;

pub use compositor::Compositor;
pub use field::{blend, smoothing_weight, NoiseField, NoiseGrid, PhaseState, SMOOTHING_CUTOFF};
pub use palette::{color_from_palette, Palette, Rgb};
pub use presets::{ActivePreset, PaletteSource, Preset, PresetSelector, PRESETS, PRESET_COUNT};

/// Selection, noise field and compositor driven as one frame pipeline.
pub struct PatternEngine {
    selector: PresetSelector,
    field: NoiseField,
    compositor: Compositor,
    frames: u64,
}

impl PatternEngine {
    pub fn new(size: usize, selector: PresetSelector) -> Self {
        Self {
            selector,
            field: NoiseField::new(size),
            compositor: Compositor::new(),
            frames: 0,
        }
    }

    pub fn selector(&self) -> &PresetSelector {
        &self.selector
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies at most one selection change, then advances and paints a frame.
    /// The caller presents the sink.
    pub fn frame(&mut self, event: Option<InputEvent>, sink: &mut dyn DisplaySink) {
        if let Some(ev) = event {
            self.selector.handle(ev);
        }
        let active = self.selector.active();
        self.field.advance(active);
        self.compositor.render(self.field.grid(), active, sink);
        self.frames += 1;
    }
}
