//! Frame sampler: bounding-box detection over a time window.
//!
//! Runs `ffmpeg` with the `bbox` filter against the null muxer and
//! consumes the filter's log lines incrementally from stderr. Memory
//! stays bounded by the histogram arrays regardless of stream length;
//! nothing is buffered wholesale.

use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::process::{Child, ChildStderr, Command, Stdio};
use tracing::debug;

use super::parse::LineParser;
use super::shell::render_command;
use super::types::{Result, SampleWindow, SamplerError};
use crate::histogram::BoundingBoxSample;

const FFMPEG: &str = "ffmpeg";

/// Incremental stream of bounding-box samples from one video.
///
/// Iterates `Result<BoundingBoxSample>`: unrecognized lines are skipped
/// inside the iterator, read errors surface as items, and the child is
/// reaped on exhaustion or drop.
#[derive(Debug)]
pub struct SampleStream {
    child: Child,
    lines: Lines<BufReader<ChildStderr>>,
    parser: LineParser,
    finished: bool,
}

impl SampleStream {
    /// Spawn the sampler for `video`, detecting content brighter than
    /// `max_luminance` within `window`.
    pub fn open(video: &Path, max_luminance: u32, window: SampleWindow) -> Result<Self> {
        let ffmpeg = which::which(FFMPEG)
            .map_err(|_| SamplerError::ToolNotFound { tool: FFMPEG })?;

        let start = window.start.to_string();
        let stop = window.stop.to_string();
        let input = video.to_string_lossy();
        let filter = format!("bbox=min_val={max_luminance}");
        let args = [
            "-v", "info", "-hide_banner", "-nostdin",
            "-ss", &start,
            "-to", &stop,
            "-i", input.as_ref(),
            "-map", "0:v:0",
            "-vf", &filter,
            "-f", "null", "-",
        ];
        debug!(command = %render_command(FFMPEG, args), "sampling frames");

        let mut child = Command::new(ffmpeg)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SamplerError::SpawnFailed {
                tool: FFMPEG,
                source,
            })?;

        let stderr = child.stderr.take().expect("stderr was piped");
        Ok(Self {
            child,
            lines: BufReader::new(stderr).lines(),
            parser: LineParser::new(),
            finished: false,
        })
    }

    fn reap(&mut self) {
        self.finished = true;
        match self.child.wait() {
            Ok(status) if !status.success() => {
                // An empty histogram already makes this fatal downstream.
                debug!(%status, "ffmpeg exited abnormally");
            }
            Ok(_) => {}
            Err(err) => debug!(%err, "failed to reap ffmpeg"),
        }
    }
}

impl Iterator for SampleStream {
    type Item = Result<BoundingBoxSample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if let Some(sample) = self.parser.parse_line(&line) {
                        return Some(Ok(sample));
                    }
                }
                Some(Err(source)) => {
                    let _ = self.child.kill();
                    self.reap();
                    return Some(Err(SamplerError::StreamFailed {
                        tool: FFMPEG,
                        source,
                    }));
                }
                None => {
                    self.reap();
                    return None;
                }
            }
        }
    }
}

impl Drop for SampleStream {
    fn drop(&mut self) {
        // Abandoned mid-stream (fatal error elsewhere): stop the child
        // before reaping so the run aborts promptly.
        if !self.finished {
            let _ = self.child.kill();
            self.reap();
        }
    }
}
