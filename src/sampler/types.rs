//! Sampler module core types
//!
//! Error surface and sampling-window types shared by the duration probe
//! and the frame sampler.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================
// Error Types
// ============================================================

/// External-collaborator error types
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("{tool} not found in PATH")]
    ToolNotFound { tool: &'static str },

    #[error("failed to start {tool}: {source}")]
    SpawnFailed {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("I/O error reading {tool} output: {source}")]
    StreamFailed {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine duration of {}", .path.display())]
    DurationUnavailable { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, SamplerError>;

// ============================================================
// Sampling window
// ============================================================

/// Time window handed to the frame sampler, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    /// Seek position before decoding starts
    pub start: u32,
    /// Position at which decoding stops
    pub stop: u32,
}

impl SampleWindow {
    /// Window for a video of `duration` seconds: skip the first twelfth
    /// (titles, logos) and the last sixth (credits).
    pub fn for_duration(duration: u32) -> Self {
        Self {
            start: duration / 12,
            stop: duration - duration / 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_for_duration() {
        let window = SampleWindow::for_duration(3600);
        assert_eq!(window.start, 300);
        assert_eq!(window.stop, 3000);
    }

    #[test]
    fn test_window_truncates_integer_division() {
        let window = SampleWindow::for_duration(100);
        assert_eq!(window.start, 8);
        assert_eq!(window.stop, 84);
    }

    #[test]
    fn test_window_short_video() {
        // Durations below 6s collapse toward a zero-length window but
        // never invert.
        let window = SampleWindow::for_duration(1);
        assert_eq!(window.start, 0);
        assert_eq!(window.stop, 1);
    }

    #[test]
    fn test_error_display() {
        let err = SamplerError::ToolNotFound { tool: "ffprobe" };
        assert!(err.to_string().contains("ffprobe"));

        let err = SamplerError::DurationUnavailable {
            path: PathBuf::from("/media/clip.mkv"),
        };
        assert!(err.to_string().contains("clip.mkv"));
    }
}
