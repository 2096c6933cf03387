//! Histogram module core types
//!
//! Contains the coordinate sample, axis, and bound-pair types shared by
//! accumulation, bounds finding, and rendering.

use std::fmt;
use thiserror::Error;

// ============================================================
// Error Types
// ============================================================

/// Histogram accumulation and finalization error types
#[derive(Debug, Error)]
pub enum HistogramError {
    #[error("{axis} edge coordinate {value} exceeds the declared maximum dimension {max}; raise --max-{}", .axis.dimension_flag())]
    CoordinateOutOfRange { axis: Axis, value: u32, max: u32 },

    #[error("no usable bounding-box samples on the {0} axis")]
    NoSamples(Axis),
}

pub type Result<T> = std::result::Result<T, HistogramError>;

// ============================================================
// Core Data Structures
// ============================================================

/// Coordinate axis of a video frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal extent (columns)
    X,
    /// Vertical extent (rows)
    Y,
}

impl Axis {
    /// Suffix used for saved histogram artifacts (`<video>.x_hist`)
    pub fn artifact_suffix(&self) -> &'static str {
        match self {
            Axis::X => ".x_hist",
            Axis::Y => ".y_hist",
        }
    }

    /// The CLI flag naming this axis's maximum dimension
    pub fn dimension_flag(&self) -> &'static str {
        match self {
            Axis::X => "width",
            Axis::Y => "height",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Per-frame bounding-box edge coordinates reported by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBoxSample {
    /// Leftmost content column
    pub x1: u32,
    /// Rightmost content column
    pub x2: u32,
    /// Topmost content row
    pub y1: u32,
    /// Bottommost content row
    pub y2: u32,
}

/// Inclusive index pair delimiting the active region on one axis.
///
/// Degenerate inputs can produce `first > last`; such pairs are
/// propagated unchanged and `length` wraps rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub first: u32,
    pub last: u32,
}

impl Bounds {
    /// Inclusive length of the region (`last - first + 1`, wrapping)
    pub fn length(&self) -> u32 {
        self.last.wrapping_sub(self.first).wrapping_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Y.to_string(), "y");
    }

    #[test]
    fn test_axis_artifact_suffix() {
        assert_eq!(Axis::X.artifact_suffix(), ".x_hist");
        assert_eq!(Axis::Y.artifact_suffix(), ".y_hist");
    }

    #[test]
    fn test_bounds_length() {
        let b = Bounds { first: 4, last: 9 };
        assert_eq!(b.length(), 6);

        let single = Bounds { first: 7, last: 7 };
        assert_eq!(single.length(), 1);
    }

    #[test]
    fn test_bounds_length_inverted_wraps() {
        // Inverted pairs are legal output of the finder/rounder on
        // degenerate data; length wraps instead of panicking.
        let b = Bounds { first: 3, last: 2 };
        assert_eq!(b.length(), 0);

        let b = Bounds { first: 8, last: 1 };
        assert_eq!(b.length(), 0u32.wrapping_sub(6));
    }

    #[test]
    fn test_error_display_messages() {
        let err = HistogramError::CoordinateOutOfRange {
            axis: Axis::X,
            value: 2000,
            max: 1920,
        };
        assert!(err.to_string().contains("2000"));
        assert!(err.to_string().contains("--max-width"));

        let err = HistogramError::NoSamples(Axis::Y);
        assert!(err.to_string().contains("y axis"));
    }
}
