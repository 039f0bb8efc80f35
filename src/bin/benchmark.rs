use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use noise_matrix::render::{DisplaySink, FrameBuffer};
use noise_matrix::visual::{PatternEngine, PresetSelector, PRESET_COUNT};

/// Headless per-preset frame cost of the advance + render pipeline.
#[derive(Parser, Debug)]
#[command(name = "benchmark")]
struct Args {
    #[arg(long, default_value_t = 240)]
    frames: usize,

    #[arg(long, default_value_t = 64)]
    size: usize,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Fail when any preset averages above this many ms per frame.
    #[arg(long)]
    max_ms: Option<f64>,

    #[arg(long, default_value_t = false)]
    quick: bool,
}

fn lit_pixels(fb: &FrameBuffer) -> usize {
    fb.pixels_rgba()
        .chunks_exact(4)
        .filter(|p| p[0] != 0 || p[1] != 0 || p[2] != 0)
        .count()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let frames = if args.quick { args.frames.min(60) } else { args.frames.max(1) };

    let mut engine = PatternEngine::new(args.size, PresetSelector::with_seed(args.seed));
    let mut fb = FrameBuffer::new(args.size, args.size);

    println!(
        "pipeline benchmark: presets={} frames/preset={} size={}x{}",
        PRESET_COUNT, frames, args.size, args.size
    );

    let mut worst = 0.0f64;
    for i in 0..PRESET_COUNT {
        if i > 0 {
            engine.frame(Some(noise_matrix::input::InputEvent::Advance), &mut fb);
            fb.present()?;
        }
        let start = Instant::now();
        for _ in 0..frames {
            engine.frame(None, &mut fb);
            fb.present()?;
        }
        let ms = start.elapsed().as_secs_f64() * 1000.0 / frames as f64;
        worst = worst.max(ms);
        let active = engine.selector().active();
        println!(
            "{:>2} {:<16} {:>8.3} ms/frame  speed={:>3} scale={:>3}  lit={:>5}/{}",
            i,
            active.name,
            ms,
            active.speed,
            active.scale,
            lit_pixels(&fb),
            args.size * args.size
        );
    }

    if let Some(max_ms) = args.max_ms {
        if worst > max_ms {
            anyhow::bail!("slowest preset took {worst:.3} ms/frame (limit {max_ms:.3})");
        }
    }
    Ok(())
}
