//! letterbox-detect - letterbox/pillarbox crop inference for video
//!
//! CLI entry point

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use letterbox_detect::{exit_codes, Cli, Config, ConfigError, CropPipeline};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    std::process::exit(match run(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if err.is::<ConfigError>() {
                exit_codes::INVALID_CONFIG
            } else {
                exit_codes::GENERAL_ERROR
            }
        }
    });
}

/// Log to stderr; stdout carries only the filter descriptors.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file_config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let config = file_config.merge_with_cli(&cli.overrides())?;

    let pipeline = CropPipeline::new(&config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for video in &cli.videos {
        pipeline
            .process(video, &mut out)
            .with_context(|| format!("processing {}", video.display()))?;
    }
    Ok(())
}
