use crate::render::{frame_begin, frame_end, luma_u8, write_fg_rgb, Frame, Renderer};
use std::io::Write;

pub struct AsciiRenderer {
    last_fg: Option<(u8, u8, u8)>,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self { last_fg: None }
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for AsciiRenderer {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        let cols = (frame.term_cols as usize).min(frame.pixel_width);
        // Cells are about twice as tall as wide; sample every other grid row.
        let rows = (frame.visual_rows() as usize).min(frame.pixel_height.div_ceil(2));

        frame_begin(frame, out)?;
        self.last_fg = None;

        // Dark -> bright ramp.
        const RAMP: &[u8] = b" .,:;irsXA253hMHGS#9B&@";

        for row in 0..rows {
            for x in 0..cols {
                let (r, g, b) = frame.rgb_at(x, row * 2);
                let l = luma_u8(r, g, b) as usize;
                let ch = RAMP[l * (RAMP.len() - 1) / 255];

                if self.last_fg != Some((r, g, b)) {
                    write_fg_rgb(out, r, g, b)?;
                    self.last_fg = Some((r, g, b));
                }
                out.write_all(&[ch])?;
            }
            out.write_all(b"\x1b[0m\x1b[K")?;
            self.last_fg = None;
            if row + 1 < rows {
                out.write_all(b"\r\n")?;
            }
        }

        frame_end(frame, rows, out)
    }
}
