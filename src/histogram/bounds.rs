//! Active-region inference over a finalized histogram.
//!
//! A letterboxed video yields two incidence clusters per axis, one per
//! boundary. The finder thresholds the histogram at a fraction of the
//! peak and scans inward from each end of the domain: the lower bound is
//! the last index of the first qualifying run scanning up, the upper
//! bound is the last index of the first qualifying run scanning down.
//! Bound parity is then normalized so the region length is even, as
//! chroma-subsampled dimensions require.
//!
//! On degenerate input (a single high-incidence span instead of two
//! separated clusters) the two scans can cross. The crossed pair is
//! returned unchanged; downstream consumers observe the inverted or
//! zero-length region.

use super::accumulate::Histogram;
use super::types::Bounds;

/// Locate the inner edges of the two boundary clusters.
///
/// `min_incidence` is the fraction of the peak incidence a slot must
/// reach to qualify; the comparison is real-valued. Expects a finalized
/// histogram. Deterministic: equal inputs yield equal bounds.
pub fn find_bounds(hist: &Histogram, min_incidence: f64) -> Bounds {
    let counts = hist.counts();
    let domain = counts.len();
    let threshold = f64::from(hist.peak()) * min_incidence;
    let qualifies = |i: usize| f64::from(counts[i]) >= threshold;

    // Forward scan: last index of the first qualifying run, default 0.
    let mut first: u32 = 0;
    let mut i = 0;
    while i < domain {
        if qualifies(i) {
            i += 1;
            while i < domain && qualifies(i) {
                i += 1;
            }
            first = (i - 1) as u32;
            break;
        }
        i += 1;
    }
    if first % 2 == 1 {
        first += 1;
    }

    // Backward scan, mirrored from the top of the domain.
    let mut last: u32 = (domain - 1) as u32;
    let mut i = domain;
    while i > 0 {
        i -= 1;
        if qualifies(i) {
            loop {
                if i == 0 {
                    last = 0;
                    break;
                }
                i -= 1;
                if !qualifies(i) {
                    last = (i + 1) as u32;
                    break;
                }
            }
            break;
        }
    }
    if last % 2 == 0 {
        // Wraps when the run reached index 0; propagated, not corrected.
        last = last.wrapping_sub(1);
    }

    Bounds { first, last }
}

/// Shrink a bound pair so its length is a multiple of `factor`.
///
/// The excess is split between both ends, the odd unit going to the
/// trailing edge. Callers skip this entirely when the factor is 0.
/// When `length < factor` the whole length is excess and the result
/// inverts; the inverted pair is surfaced unchanged.
pub fn round_bounds(bounds: Bounds, factor: u32) -> Bounds {
    let excess = bounds.length() % factor;
    let offset = excess / 2;
    Bounds {
        first: bounds.first + offset,
        last: bounds.last.wrapping_sub(excess - offset),
    }
}
