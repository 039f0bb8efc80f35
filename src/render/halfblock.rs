use crate::render::{frame_begin, frame_end, Frame, Renderer};
use std::io::Write;

/// Two grid rows per terminal row: `▀` in the top color over the bottom color.
pub struct HalfBlockRenderer {
    last_fg: Option<(u8, u8, u8)>,
    last_bg: Option<(u8, u8, u8)>,
}

impl HalfBlockRenderer {
    pub fn new() -> Self {
        Self {
            last_fg: None,
            last_bg: None,
        }
    }
}

impl Default for HalfBlockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HalfBlockRenderer {
    fn name(&self) -> &'static str {
        "halfblock"
    }

    fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        let cols = (frame.term_cols as usize).min(frame.pixel_width);
        let rows = (frame.visual_rows() as usize).min(frame.pixel_height.div_ceil(2));

        frame_begin(frame, out)?;
        self.last_fg = None;
        self.last_bg = None;

        const HALF_BLOCK: char = '\u{2580}';

        for row in 0..rows {
            for x in 0..cols {
                let top = frame.rgb_at(x, row * 2);
                let bot = frame.rgb_at(x, row * 2 + 1);

                if self.last_fg != Some(top) {
                    write!(out, "\x1b[38;2;{};{};{}m", top.0, top.1, top.2)?;
                    self.last_fg = Some(top);
                }
                if self.last_bg != Some(bot) {
                    write!(out, "\x1b[48;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    self.last_bg = Some(bot);
                }
                write!(out, "{HALF_BLOCK}")?;
            }
            // Reset before erasing so the background doesn't bleed past the grid.
            out.write_all(b"\x1b[0m\x1b[K")?;
            if row + 1 < rows {
                out.write_all(b"\r\n")?;
            }
            self.last_fg = None;
            self.last_bg = None;
        }

        frame_end(frame, rows, out)
    }
}
