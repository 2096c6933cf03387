//! letterbox-detect - infer the visible picture region of padded video
//!
//! A video stored with static letterbox/pillarbox bars carries its real
//! picture inside a smaller rectangle. This crate accumulates per-frame
//! bounding-box edge coordinates (sampled by ffmpeg's `bbox` filter)
//! into per-axis histograms, thresholds them to find the inner edges of
//! the boundary clusters, rounds the result to alignment constraints,
//! and renders a `crop=`/`drawbox=` filter descriptor.

pub mod cli;
pub mod config;
pub mod histogram;
pub mod output;
pub mod pipeline;
pub mod sampler;

// Re-export the public API surface
pub use cli::Cli;
pub use config::{CliOverrides, Config, ConfigError};
pub use histogram::{
    find_bounds, round_bounds, Axis, BoundingBoxSample, Bounds, FrameHistograms, Histogram,
    HistogramError,
};
pub use output::filter_descriptor;
pub use pipeline::{CropPipeline, PipelineError};
pub use sampler::{probe_duration, SampleStream, SampleWindow, SamplerError};

/// Process exit codes
pub mod exit_codes {
    /// All videos processed
    pub const SUCCESS: i32 = 0;
    /// Fatal error during processing
    pub const GENERAL_ERROR: i32 = 1;
    /// Malformed configuration value
    pub const INVALID_CONFIG: i32 = 2;
}
