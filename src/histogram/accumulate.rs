//! Edge-position histogram accumulation.
//!
//! Converts the stream of per-frame bounding-box samples into one
//! frequency table per axis. Each sample contributes two increments per
//! axis (the near and far edge). Counters saturate rather than wrap:
//! once any slot on an axis reaches the counter maximum, accumulation
//! for that axis halts with a warning and the partial table is used.

use tracing::warn;

use super::types::{Axis, BoundingBoxSample, HistogramError, Result};

// ============================================================
// Histogram
// ============================================================

/// Frequency table over one axis's coordinate domain.
///
/// Slots are indexed by coordinate, `0..domain`. The peak is computed by
/// [`Histogram::finalize`] and is zero until then.
#[derive(Debug, Clone)]
pub struct Histogram {
    axis: Axis,
    counts: Vec<u32>,
    peak: u32,
    saturated: bool,
}

impl Histogram {
    /// Create a zeroed histogram covering coordinates `0..domain`.
    pub fn new(axis: Axis, domain: u32) -> Self {
        Self {
            axis,
            counts: vec![0; domain as usize],
            peak: 0,
            saturated: false,
        }
    }

    /// The axis this histogram covers.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of coordinate slots (the declared maximum dimension).
    pub fn domain(&self) -> u32 {
        self.counts.len() as u32
    }

    /// Per-coordinate incidence counts.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Peak incidence; meaningful only after [`Histogram::finalize`].
    pub fn peak(&self) -> u32 {
        self.peak
    }

    /// Whether accumulation halted early on counter saturation.
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Record both edge coordinates of one sample.
    ///
    /// A coordinate at or beyond the domain is fatal for the run: it
    /// means the declared resolution is too small for the actual frames.
    /// After saturation the increments are skipped but coordinates are
    /// still validated.
    pub fn record_edges(&mut self, near: u32, far: u32) -> Result<()> {
        self.record(near)?;
        self.record(far)
    }

    fn record(&mut self, coord: u32) -> Result<()> {
        if coord >= self.domain() {
            return Err(HistogramError::CoordinateOutOfRange {
                axis: self.axis,
                value: coord,
                max: self.domain(),
            });
        }
        if self.saturated {
            return Ok(());
        }
        let slot = &mut self.counts[coord as usize];
        *slot += 1;
        if *slot == u32::MAX {
            self.saturated = true;
            warn!(
                axis = %self.axis,
                coord,
                "incidence counter saturated; continuing with the samples collected so far"
            );
        }
        Ok(())
    }

    /// Compute and store the peak incidence.
    ///
    /// Fails when every slot is zero: the sampler produced no usable
    /// data for this axis.
    pub fn finalize(&mut self) -> Result<()> {
        let peak = self.counts.iter().copied().max().unwrap_or(0);
        if peak == 0 {
            return Err(HistogramError::NoSamples(self.axis));
        }
        self.peak = peak;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_counts(axis: Axis, counts: Vec<u32>) -> Self {
        Self {
            axis,
            counts,
            peak: 0,
            saturated: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_count(&mut self, coord: u32, count: u32) {
        self.counts[coord as usize] = count;
    }
}

// ============================================================
// Per-frame accumulator
// ============================================================

/// The X/Y histogram pair for one video.
///
/// Created zeroed per video; no state survives across videos.
#[derive(Debug)]
pub struct FrameHistograms {
    pub x: Histogram,
    pub y: Histogram,
}

impl FrameHistograms {
    /// Create zeroed histograms for the declared resolution.
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            x: Histogram::new(Axis::X, max_width),
            y: Histogram::new(Axis::Y, max_height),
        }
    }

    /// Record one bounding-box sample on both axes.
    pub fn ingest(&mut self, sample: &BoundingBoxSample) -> Result<()> {
        self.x.record_edges(sample.x1, sample.x2)?;
        self.y.record_edges(sample.y1, sample.y2)
    }

    /// Finalize both axes, computing their peaks.
    pub fn finalize(&mut self) -> Result<()> {
        self.x.finalize()?;
        self.y.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x1: u32, x2: u32, y1: u32, y2: u32) -> BoundingBoxSample {
        BoundingBoxSample { x1, x2, y1, y2 }
    }

    #[test]
    fn test_ingest_increments_edge_slots() {
        let mut hists = FrameHistograms::new(16, 8);
        hists.ingest(&sample(2, 13, 1, 6)).unwrap();
        hists.ingest(&sample(2, 13, 1, 6)).unwrap();
        hists.ingest(&sample(3, 12, 1, 6)).unwrap();

        assert_eq!(hists.x.counts()[2], 2);
        assert_eq!(hists.x.counts()[13], 2);
        assert_eq!(hists.x.counts()[3], 1);
        assert_eq!(hists.y.counts()[1], 3);
        assert_eq!(hists.y.counts()[6], 3);
        assert_eq!(hists.y.counts()[0], 0);
    }

    #[test]
    fn test_coordinate_at_domain_is_fatal() {
        let mut hists = FrameHistograms::new(16, 8);
        let err = hists.ingest(&sample(0, 16, 0, 7)).unwrap_err();
        assert!(matches!(
            err,
            HistogramError::CoordinateOutOfRange {
                axis: Axis::X,
                value: 16,
                max: 16
            }
        ));

        let err = hists.ingest(&sample(0, 15, 0, 8)).unwrap_err();
        assert!(matches!(
            err,
            HistogramError::CoordinateOutOfRange { axis: Axis::Y, .. }
        ));
    }

    #[test]
    fn test_finalize_computes_peak() {
        let mut hist = Histogram::from_counts(Axis::X, vec![1, 8, 9, 8, 1]);
        hist.finalize().unwrap();
        assert_eq!(hist.peak(), 9);
        assert_eq!(hist.peak(), hist.counts().iter().copied().max().unwrap());
    }

    #[test]
    fn test_finalize_empty_histogram_fails() {
        let mut hist = Histogram::new(Axis::Y, 8);
        let err = hist.finalize().unwrap_err();
        assert!(matches!(err, HistogramError::NoSamples(Axis::Y)));
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut hist = Histogram::from_counts(Axis::X, vec![3, 5, 2]);
        hist.finalize().unwrap();
        hist.finalize().unwrap();
        assert_eq!(hist.peak(), 5);
    }

    #[test]
    fn test_saturation_halts_one_axis_only() {
        let mut hists = FrameHistograms::new(16, 8);
        hists.x.set_count(2, u32::MAX - 1);

        // The increment that reaches the maximum is kept and trips the
        // saturation latch for the x axis.
        hists.ingest(&sample(2, 13, 1, 6)).unwrap();
        assert!(hists.x.is_saturated());
        assert!(!hists.y.is_saturated());
        assert_eq!(hists.x.counts()[2], u32::MAX);

        // Further samples keep counting on y but leave x untouched.
        hists.ingest(&sample(2, 13, 1, 6)).unwrap();
        assert_eq!(hists.x.counts()[2], u32::MAX);
        assert_eq!(hists.x.counts()[13], 0);
        assert_eq!(hists.y.counts()[1], 2);
        assert_eq!(hists.y.counts()[6], 2);
    }

    #[test]
    fn test_saturated_axis_still_validates_coordinates() {
        let mut hists = FrameHistograms::new(16, 8);
        hists.x.set_count(0, u32::MAX - 1);
        hists.ingest(&sample(0, 1, 0, 1)).unwrap();
        assert!(hists.x.is_saturated());

        let err = hists.ingest(&sample(99, 1, 0, 1)).unwrap_err();
        assert!(matches!(
            err,
            HistogramError::CoordinateOutOfRange { axis: Axis::X, .. }
        ));
    }

    #[test]
    fn test_saturation_mid_sample_skips_far_edge() {
        let mut hist = Histogram::new(Axis::X, 16);
        hist.set_count(4, u32::MAX - 1);
        hist.record_edges(4, 11).unwrap();
        // Near edge saturated the axis; the far edge of the same sample
        // is not recorded.
        assert_eq!(hist.counts()[11], 0);
    }

    #[test]
    fn test_partial_histogram_still_finalizes() {
        let mut hist = Histogram::new(Axis::X, 16);
        hist.set_count(3, u32::MAX - 1);
        hist.record_edges(3, 12).unwrap();
        assert!(hist.is_saturated());

        hist.finalize().unwrap();
        assert_eq!(hist.peak(), u32::MAX);
    }
}
