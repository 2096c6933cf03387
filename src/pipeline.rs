//! Per-video processing pipeline.
//!
//! Runs one video end to end: duration probe, frame sampling into fresh
//! histograms, finalization, optional artifact writes, bounds inference
//! and rounding, descriptor output. Videos in a run are processed
//! strictly sequentially; each completes (including file writes) before
//! the next begins, and the first fatal error aborts the run.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::histogram::{
    find_bounds, render, round_bounds, Axis, FrameHistograms, Histogram, HistogramError,
};
use crate::output::filter_descriptor;
use crate::sampler::{probe_duration, SampleStream, SampleWindow, SamplerError};

// ============================================================
// Error Types
// ============================================================

/// Per-video pipeline error types
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Histogram(#[from] HistogramError),

    #[error(transparent)]
    Sampler(#[from] SamplerError),

    #[error("cannot write histogram file {}: {source}", .path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write filter descriptor: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

// ============================================================
// Pipeline
// ============================================================

/// Crop inference pipeline bound to one run configuration.
#[derive(Debug)]
pub struct CropPipeline<'a> {
    config: &'a Config,
}

impl<'a> CropPipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Process one video and write its filter descriptor to `out`.
    pub fn process<W: Write>(&self, video: &Path, out: &mut W) -> Result<()> {
        let config = self.config;

        let duration = probe_duration(video)?;
        let window = SampleWindow::for_duration(duration);
        info!(
            video = %video.display(),
            duration,
            start = window.start,
            stop = window.stop,
            "sampling bounding boxes"
        );

        let mut hists = FrameHistograms::new(config.max_width, config.max_height);
        for sample in SampleStream::open(video, config.max_luminance, window)? {
            hists.ingest(&sample?)?;
        }
        hists.finalize()?;

        if config.save_histogram {
            save_axis_chart(video, &hists.x)?;
            save_axis_chart(video, &hists.y)?;
        }

        let mut x = find_bounds(&hists.x, config.min_incidence);
        let mut y = find_bounds(&hists.y, config.min_incidence);
        if config.width_factor > 0 {
            x = round_bounds(x, config.width_factor);
        }
        if config.height_factor > 0 {
            y = round_bounds(y, config.height_factor);
        }
        info!(
            x_first = x.first,
            x_last = x.last,
            y_first = y.first,
            y_last = y.last,
            "inferred active region"
        );

        out.write_all(filter_descriptor(&x, &y, config.crop, config.drawbox).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn save_axis_chart(video: &Path, hist: &Histogram) -> Result<()> {
    let path = artifact_path(video, hist.axis());
    render::save_chart(&path, hist).map_err(|source| PipelineError::Artifact { path, source })
}

/// Artifact path for one axis: the video operand with `.x_hist` /
/// `.y_hist` appended.
fn artifact_path(video: &Path, axis: Axis) -> PathBuf {
    let mut name = video.as_os_str().to_os_string();
    name.push(axis.artifact_suffix());
    PathBuf::from(name)
}
