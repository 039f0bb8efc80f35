use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const MAX_GRID_SIZE: usize = 256;

#[derive(Parser, Debug, Clone)]
#[command(name = "noise-matrix", version, about = "Animated noise-field color themes for a square pixel grid")]
pub struct Config {
    /// Grid edge length in pixels.
    #[arg(long, default_value_t = 64)]
    pub size: usize,

    #[arg(long, default_value_t = 120)]
    pub fps: u32,

    #[arg(long, value_enum, default_value_t = RendererMode::HalfBlock)]
    pub renderer: RendererMode,

    /// Show colors as a 16-bit RGB565 panel would.
    #[arg(long, default_value_t = false)]
    pub panel_color: bool,

    /// Seed for randomized palettes.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    #[arg(long, default_value_t = 20)]
    pub debounce_ms: u64,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub sync_updates: bool,

    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererMode {
    #[value(alias = "ansi", alias = "text")]
    Ascii,
    #[value(name = "half-block", alias = "halfblock", alias = "half_block", alias = "hb")]
    HalfBlock,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fps == 0 {
            anyhow::bail!("--fps must be at least 1");
        }
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            anyhow::bail!("--size must be in 1..={MAX_GRID_SIZE} (got {})", self.size);
        }
        Ok(())
    }
}
