//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CliOverrides;

/// Infer the visible picture region of letterboxed/pillarboxed video.
///
/// Samples per-frame bounding boxes with ffmpeg's bbox filter, locates
/// the active region statistically, and prints a crop/drawbox filter
/// descriptor per video.
#[derive(Debug, Parser)]
#[command(name = "letterbox-detect", version, about)]
pub struct Cli {
    /// Videos to analyze, processed strictly in order
    #[arg(value_name = "VIDEO")]
    pub videos: Vec<PathBuf>,

    /// Darkness threshold passed to the bbox detector
    #[arg(short = 'l', long, value_name = "N")]
    pub max_luminance: Option<u32>,

    /// Fraction of peak incidence defining an active slot (0..=1)
    #[arg(short = 'i', long, value_name = "FRACTION")]
    pub min_incidence: Option<f64>,

    /// Shrink the crop width to a multiple of this factor
    #[arg(short = 'w', long, value_name = "N")]
    pub width_factor: Option<u32>,

    /// Shrink the crop height to a multiple of this factor
    #[arg(long, value_name = "N")]
    pub height_factor: Option<u32>,

    /// Declared maximum frame width
    #[arg(long, value_name = "PIXELS")]
    pub max_width: Option<u32>,

    /// Declared maximum frame height
    #[arg(long, value_name = "PIXELS")]
    pub max_height: Option<u32>,

    /// Write per-axis histogram bar charts next to each video
    #[arg(short = 's', long)]
    pub save_histogram: bool,

    /// Emit the crop= filter descriptor
    #[arg(short = 'c', long)]
    pub crop: bool,

    /// Emit the drawbox= filter descriptor
    #[arg(short = 'd', long)]
    pub drawbox: bool,

    /// Explicit config file, replacing the layered lookup
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Collect the explicitly set values for the config merge.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_luminance: self.max_luminance,
            min_incidence: self.min_incidence,
            width_factor: self.width_factor,
            height_factor: self.height_factor,
            max_width: self.max_width,
            max_height: self.max_height,
            save_histogram: self.save_histogram,
            crop: self.crop,
            drawbox: self.drawbox,
        }
    }
}
