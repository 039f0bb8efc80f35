use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cfg = noise_matrix::config::Config::parse();
    noise_matrix::logging::init(cfg.log_file.as_deref())?;

    let res = noise_matrix::app::run(cfg);
    if let Err(err) = &res {
        tracing::error!("{err:#}");
    }
    res
}
