use noise_matrix::app::hud_line;
use noise_matrix::config::{Config, RendererMode};
use noise_matrix::render::{
    AsciiRenderer, DisplaySink, Frame, FrameBuffer, HalfBlockRenderer, Renderer, TerminalSink,
};
use noise_matrix::visual::{ActivePreset, PatternEngine, PresetSelector, Rgb};
use clap::Parser;

fn solid_pixels(w: usize, h: usize, r: u8, g: u8, b: u8) -> Vec<u8> {
    let mut buf = vec![0u8; w * h * 4];
    for px in buf.chunks_exact_mut(4) {
        px.copy_from_slice(&[r, g, b, 255]);
    }
    buf
}

fn make_frame<'a>(cols: u16, rows: u16, w: usize, h: usize, pixels: &'a [u8], hud: &'a str) -> Frame<'a> {
    Frame {
        term_cols: cols,
        term_rows: rows,
        pixel_width: w,
        pixel_height: h,
        pixels_rgba: pixels,
        hud,
        overlay: None,
        sync_updates: true,
    }
}

#[test]
fn halfblock_paints_two_rows_per_cell() {
    let pixels = solid_pixels(8, 8, 10, 20, 30);
    let frame = make_frame(20, 10, 8, 8, &pixels, "");
    let mut out = Vec::new();
    HalfBlockRenderer::new().render(&frame, &mut out).unwrap();
    let s = String::from_utf8_lossy(&out);
    assert_eq!(s.matches('\u{2580}').count(), 8 * 4);
    assert!(s.contains("38;2;10;20;30"));
    assert!(s.contains("48;2;10;20;30"));
    assert!(s.starts_with("\x1b[?2026h"));
    assert!(s.ends_with("\x1b[?2026l"));
}

#[test]
fn halfblock_clips_to_the_terminal() {
    let pixels = solid_pixels(64, 64, 200, 0, 0);
    let frame = make_frame(10, 6, 64, 64, &pixels, "status");
    let mut out = Vec::new();
    HalfBlockRenderer::new().render(&frame, &mut out).unwrap();
    let s = String::from_utf8_lossy(&out);
    // One row goes to the status line.
    assert_eq!(s.matches('\u{2580}').count(), 10 * 5);
    assert!(s.contains("status"));
}

#[test]
fn ascii_uses_the_luma_ramp() {
    let pixels = solid_pixels(4, 4, 255, 255, 255);
    let frame = make_frame(10, 10, 4, 4, &pixels, "");
    let mut out = Vec::new();
    let mut r = AsciiRenderer::new();
    assert_eq!(r.name(), "ascii");
    r.render(&frame, &mut out).unwrap();
    let s = String::from_utf8_lossy(&out);
    assert_eq!(s.matches('@').count(), 4 * 2);
}

#[test]
fn panel_color_quantizes_stored_pixels() {
    let mut fb = FrameBuffer::new(2, 2).with_panel_color(true);
    let c = Rgb::new(0x12, 0x34, 0x56);
    fb.set_pixel(1, 1, c);
    assert_eq!(fb.pixel(1, 1), Rgb::from_565(c.to_565()));

    let mut plain = FrameBuffer::new(2, 2);
    plain.set_pixel(1, 1, c);
    assert_eq!(plain.pixel(1, 1), c);
}

#[test]
fn terminal_sink_presents_engine_frames() {
    let buffer = FrameBuffer::new(16, 16);
    let mut sink = TerminalSink::new(buffer, Box::new(HalfBlockRenderer::new()), Vec::new(), (40, 12), false);
    let mut engine = PatternEngine::new(16, PresetSelector::with_seed(8));
    engine.frame(None, &mut sink);
    sink.set_hud(hud_line(engine.selector().active(), 119.6));
    sink.present().unwrap();
    assert_eq!(sink.buffer().presented(), 1);
    assert_eq!(sink.renderer_name(), "halfblock");

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out.matches('\u{2580}').count(), 16 * 8);
    assert!(out.contains("Rainbow"));
}

#[test]
fn hud_line_names_the_preset() {
    let mut rng = fastrand::Rng::with_seed(0);
    let p = ActivePreset::materialize(3, &mut rng);
    let line = hud_line(&p, 120.0);
    assert!(line.starts_with("3/11 Forest"));
    assert!(line.contains("speed 8"));
    assert!(line.contains("scale 120"));
    assert!(line.contains("hue loop off"));
}

#[test]
fn config_defaults_and_validation() {
    let cfg = Config::parse_from(["noise-matrix"]);
    assert_eq!(cfg.size, 64);
    assert_eq!(cfg.fps, 120);
    assert_eq!(cfg.renderer, RendererMode::HalfBlock);
    assert_eq!(cfg.debounce_ms, 20);
    assert!(cfg.validate().is_ok());

    let bad = Config::parse_from(["noise-matrix", "--fps", "0"]);
    assert!(bad.validate().is_err());
    let bad = Config::parse_from(["noise-matrix", "--size", "0"]);
    assert!(bad.validate().is_err());
    let ascii = Config::parse_from(["noise-matrix", "--renderer", "ascii", "--seed", "4"]);
    assert_eq!(ascii.renderer, RendererMode::Ascii);
    assert_eq!(ascii.seed, Some(4));
}
