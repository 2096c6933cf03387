//! External collaborators: frame sampler and duration probe.
//!
//! Both collaborators are line-oriented child processes (`ffmpeg` with
//! the `bbox` filter, `ffprobe`). The line grammar lives in [`parse`]
//! and is independent of process plumbing; the inference core depends
//! only on the parsed sample stream, not on how it is produced.

mod frames;
mod parse;
mod probe;
mod shell;
mod types;

pub use frames::SampleStream;
pub use parse::{parse_duration_line, LineParser};
pub use probe::probe_duration;
pub use shell::{render_command, shell_quote};
pub use types::{Result, SampleWindow, SamplerError};
