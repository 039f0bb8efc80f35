use crate::render::{Frame, Renderer};
use crate::visual::Rgb;
use std::io::Write;

/// Where finished frames go. Every pixel is set each frame before `present`.
pub trait DisplaySink {
    fn size(&self) -> (usize, usize);
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb);
    fn present(&mut self) -> anyhow::Result<()>;
}

/// RGBA pixels in memory.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    panel_color: bool,
    presented: u64,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
            panel_color: false,
            presented: 0,
        }
    }

    /// Stores every color as it would look after packing to RGB565.
    pub fn with_panel_color(mut self, on: bool) -> Self {
        self.panel_color = on;
        self
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * 4;
        Rgb::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2])
    }

    pub fn pixels_rgba(&self) -> &[u8] {
        &self.pixels
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl DisplaySink for FrameBuffer {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let c = if self.panel_color {
            Rgb::from_565(color.to_565())
        } else {
            color
        };
        let i = (y * self.width + x) * 4;
        self.pixels[i..i + 4].copy_from_slice(&[c.r, c.g, c.b, 255]);
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.presented += 1;
        Ok(())
    }
}

/// Paints the frame buffer into a terminal through a `Renderer`.
pub struct TerminalSink<W: Write> {
    buffer: FrameBuffer,
    renderer: Box<dyn Renderer>,
    out: W,
    term_size: (u16, u16),
    hud: String,
    overlay: Option<String>,
    sync_updates: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(
        buffer: FrameBuffer,
        renderer: Box<dyn Renderer>,
        out: W,
        term_size: (u16, u16),
        sync_updates: bool,
    ) -> Self {
        Self {
            buffer,
            renderer,
            out,
            term_size,
            hud: String::new(),
            overlay: None,
            sync_updates,
        }
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn set_term_size(&mut self, size: (u16, u16)) {
        self.term_size = size;
    }

    pub fn set_hud(&mut self, hud: String) {
        self.hud = hud;
    }

    pub fn set_overlay(&mut self, overlay: Option<String>) {
        self.overlay = overlay;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn size(&self) -> (usize, usize) {
        self.buffer.size()
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        self.buffer.set_pixel(x, y, color);
    }

    fn present(&mut self) -> anyhow::Result<()> {
        let (w, h) = self.buffer.size();
        let frame = Frame {
            term_cols: self.term_size.0,
            term_rows: self.term_size.1,
            pixel_width: w,
            pixel_height: h,
            pixels_rgba: self.buffer.pixels_rgba(),
            hud: &self.hud,
            overlay: self.overlay.as_deref(),
            sync_updates: self.sync_updates,
        };
        self.renderer.render(&frame, &mut self.out)?;
        self.buffer.present()
    }
}
