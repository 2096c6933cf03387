//! Bar-chart rendering of a finalized histogram.
//!
//! Diagnostic output only; bounds inference never reads it. One row per
//! coordinate index, bar length scaled to percent of peak, every tenth
//! marker distinguished so column positions can be read off the chart.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::accumulate::Histogram;

/// Marker for positions 0, 10, 20, ...
const TICK_MARKER: char = '+';

/// Marker for all other bar positions
const BAR_MARKER: char = '-';

/// Render one bar row: `count * 100 / peak` markers, truncating.
pub fn render_row(count: u32, peak: u32) -> String {
    let len = (u64::from(count) * 100 / u64::from(peak)) as usize;
    (0..len)
        .map(|j| if j % 10 == 0 { TICK_MARKER } else { BAR_MARKER })
        .collect()
}

/// Write the bar chart for a finalized histogram, one row per index.
pub fn write_chart<W: Write>(writer: &mut W, hist: &Histogram) -> io::Result<()> {
    for &count in hist.counts() {
        writeln!(writer, "{}", render_row(count, hist.peak()))?;
    }
    Ok(())
}

/// Save the bar chart to `path`, overwriting any existing file.
pub fn save_chart(path: &Path, hist: &Histogram) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_chart(&mut writer, hist)?;
    writer.flush()
}
