//! Line grammar for the external collaborators' output.
//!
//! The frame sampler and duration probe both speak line-oriented text.
//! Each line parses to `Some(value)` or `None` (unrecognized, skipped);
//! end-of-stream is the end of the line iterator. The grammar knows
//! nothing about how the underlying processes are spawned or read.

use regex::Regex;

use crate::histogram::BoundingBoxSample;

/// A bbox filter log line, e.g.
/// `[Parsed_bbox_0 @ 0x5598] n:42 pts:10752 pts_time:0.42 x1:0 x2:1919 y1:140 y2:939 w:1920 ...`
const BBOX_LINE: &str = r"^\[Parsed_bbox_\d+ @ [^\]]+\] n:\d+ pts:\d+ pts_time:[0-9.]+ x1:(\d+) x2:(\d+) y1:(\d+) y2:(\d+)";

/// Parser for frame-sampler output lines.
#[derive(Debug)]
pub struct LineParser {
    bbox: Regex,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant.
            bbox: Regex::new(BBOX_LINE).expect("bbox line pattern"),
        }
    }

    /// Parse one sampler line into a bounding-box sample, or `None` for
    /// any line outside the grammar (progress lines, stream info, bbox
    /// lines with malformed coordinates).
    pub fn parse_line(&self, line: &str) -> Option<BoundingBoxSample> {
        let captures = self.bbox.captures(line)?;
        let coord = |i: usize| captures[i].parse::<u32>().ok();
        Some(BoundingBoxSample {
            x1: coord(1)?,
            x2: coord(2)?,
            y1: coord(3)?,
            y2: coord(4)?,
        })
    }
}

/// Parse one duration-probe line.
///
/// Matches `duration=<seconds>`, taking the whole seconds before any
/// decimal point. `duration=N/A` and unrelated lines yield `None`.
pub fn parse_duration_line(line: &str) -> Option<u32> {
    let value = line.strip_prefix("duration=")?;
    let digits: &str = &value[..value.bytes().take_while(u8::is_ascii_digit).count()];
    digits.parse().ok()
}
