//! Edge-position histogram analysis.
//!
//! The statistical core of the tool: per-axis incidence histograms over
//! bounding-box edge coordinates, threshold scanning to locate the
//! active picture region, alignment rounding, and the diagnostic
//! bar-chart renderer.
//!
//! # Pipeline position
//!
//! samples -> [`FrameHistograms::ingest`] -> [`Histogram::finalize`] ->
//! [`find_bounds`] -> (optional) [`round_bounds`] -> output formatting.
//! [`render`] hangs off the finalized histogram for diagnostics only.

mod accumulate;
mod bounds;
mod types;

pub mod render;

pub use accumulate::{FrameHistograms, Histogram};
pub use bounds::{find_bounds, round_bounds};
pub use types::{Axis, BoundingBoxSample, Bounds, HistogramError, Result};
