//! Video duration probe.
//!
//! Asks `ffprobe` for the container duration and reads its stdout
//! line-by-line for the first `duration=` entry. A missing tool, an
//! unreadable stream, or a zero/absent duration is fatal for the run.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use super::parse::parse_duration_line;
use super::shell::render_command;
use super::types::{Result, SamplerError};

const FFPROBE: &str = "ffprobe";

/// Probe the duration of `video` in whole seconds.
pub fn probe_duration(video: &Path) -> Result<u32> {
    let ffprobe = which::which(FFPROBE)
        .map_err(|_| SamplerError::ToolNotFound { tool: FFPROBE })?;

    let input = video.to_string_lossy();
    let args = [
        "-v",
        "error",
        "-hide_banner",
        "-show_entries",
        "format=duration",
        input.as_ref(),
    ];
    debug!(command = %render_command(FFPROBE, args), "probing duration");

    let mut child = Command::new(ffprobe)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| SamplerError::SpawnFailed {
            tool: FFPROBE,
            source,
        })?;

    let stdout = child.stdout.take().expect("stdout was piped");
    let mut duration = None;
    for line in BufReader::new(stdout).lines() {
        let line = line.map_err(|source| {
            let _ = child.kill();
            let _ = child.wait();
            SamplerError::StreamFailed {
                tool: FFPROBE,
                source,
            }
        })?;
        if duration.is_none() {
            duration = parse_duration_line(&line);
        }
    }

    let status = child.wait().map_err(|source| SamplerError::StreamFailed {
        tool: FFPROBE,
        source,
    })?;
    if !status.success() {
        debug!(%status, "ffprobe exited abnormally");
    }

    match duration {
        Some(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(SamplerError::DurationUnavailable {
            path: video.to_path_buf(),
        }),
    }
}
