use crate::config::{Config, RendererMode};
use crate::input::{map_key, InputMonitor, KeyAction};
use crate::pacing::{FpsCounter, FrameLimiter, SystemClock};
use crate::render::{AsciiRenderer, DisplaySink, FrameBuffer, HalfBlockRenderer, Renderer, TerminalSink};
use crate::terminal::TerminalGuard;
use crate::visual::{ActivePreset, PatternEngine, PresetSelector, PRESET_COUNT};
use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use std::io::BufWriter;
use std::time::{Duration, Instant};

pub fn run(cfg: Config) -> anyhow::Result<()> {
    cfg.validate()?;

    // Nothing renders without a display; fail fast instead of running blind.
    let _term = TerminalGuard::new().context("initialize display")?;
    let out = BufWriter::new(TerminalGuard::stdout());
    let term_size = TerminalGuard::size()?;

    let renderer: Box<dyn Renderer> = match cfg.renderer {
        RendererMode::HalfBlock => Box::new(HalfBlockRenderer::new()),
        RendererMode::Ascii => Box::new(AsciiRenderer::new()),
    };
    let buffer = FrameBuffer::new(cfg.size, cfg.size).with_panel_color(cfg.panel_color);
    let mut sink = TerminalSink::new(buffer, renderer, out, term_size, cfg.sync_updates);

    let selector = match cfg.seed {
        Some(seed) => PresetSelector::with_seed(seed),
        None => PresetSelector::new(),
    };
    let mut engine = PatternEngine::new(cfg.size, selector);
    let mut input = InputMonitor::new(Duration::from_millis(cfg.debounce_ms));
    let mut limiter = FrameLimiter::new(cfg.fps);
    let mut clock = SystemClock;
    let mut fps = FpsCounter::new(Instant::now());

    let mut show_hud = true;
    let mut show_help = false;

    tracing::info!(
        size = cfg.size,
        fps = cfg.fps,
        renderer = sink.renderer_name(),
        panel_color = cfg.panel_color,
        "starting"
    );

    'frames: loop {
        if cfg.frames.is_some_and(|limit| engine.frames() >= limit) {
            break;
        }

        // Drain terminal events (non-blocking). Presses are latched on the
        // buttons and only take effect at the next frame boundary.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => match map_key(k.code, k.modifiers) {
                    Some(KeyAction::Next) => input.next.press(),
                    Some(KeyAction::Previous) => input.previous.press(),
                    Some(KeyAction::ToggleHud) => show_hud = !show_hud,
                    Some(KeyAction::ToggleHelp) => show_help = !show_help,
                    Some(KeyAction::Quit) => break 'frames,
                    None => {}
                },
                Event::Resize(c, r) => sink.set_term_size((c, r)),
                _ => {}
            }
        }

        let now = limiter.wait(&mut clock);
        let ev = input.update(now);

        engine.frame(ev, &mut sink);

        sink.set_hud(if show_hud {
            hud_line(engine.selector().active(), fps.fps())
        } else {
            String::new()
        });
        sink.set_overlay(show_help.then(|| help_popup_text().to_string()));
        sink.present()?;

        fps.tick(now);
        let spent = now.elapsed();
        if spent > limiter.min_interval() {
            tracing::trace!(frame = engine.frames(), spent_us = spent.as_micros() as u64, "slow frame");
        }
    }

    tracing::info!(frames = engine.frames(), "stopped");
    Ok(())
}

pub fn hud_line(preset: &ActivePreset, fps: f32) -> String {
    format!(
        "{}/{} {} | speed {} | scale {} | hue loop {} | {:.0} fps | ? help",
        preset.index,
        PRESET_COUNT - 1,
        preset.name,
        preset.speed,
        preset.scale,
        if preset.hue_loop { "on" } else { "off" },
        fps
    )
}

fn help_popup_text() -> &'static str {
    "noise-matrix\n\
     right / n / space   next theme\n\
     left / p / bksp     previous theme\n\
     h                   toggle status line\n\
     ?                   toggle this help\n\
     q / esc             quit"
}
