//! Filter descriptor formatting.
//!
//! Renders final per-axis bounds as the textual `crop=`/`drawbox=`
//! descriptor a video filter pipeline consumes. A histogram-only run
//! requests neither form and produces nothing, not even a newline.

use std::fmt::Write;

use crate::histogram::Bounds;

/// Render the filter descriptor for the final bounds.
///
/// `crop=<width>:<height>:<x>:<y>`, then a single separating space and
/// `drawbox=<x>:<y>:<width>:<height>:invert` when both are requested.
/// The trailing newline is emitted only if at least one form was.
pub fn filter_descriptor(x: &Bounds, y: &Bounds, crop: bool, drawbox: bool) -> String {
    let mut out = String::new();
    if crop {
        let _ = write!(
            out,
            "crop={}:{}:{}:{}",
            x.length(),
            y.length(),
            x.first,
            y.first
        );
    }
    if crop && drawbox {
        out.push(' ');
    }
    if drawbox {
        let _ = write!(
            out,
            "drawbox={}:{}:{}:{}:invert",
            x.first,
            y.first,
            x.length(),
            y.length()
        );
    }
    if crop || drawbox {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Bounds = Bounds { first: 5, last: 8 };
    const Y: Bounds = Bounds { first: 2, last: 11 };

    #[test]
    fn test_crop_only() {
        assert_eq!(filter_descriptor(&X, &Y, true, false), "crop=4:10:5:2\n");
    }

    #[test]
    fn test_drawbox_only() {
        assert_eq!(
            filter_descriptor(&X, &Y, false, true),
            "drawbox=5:2:4:10:invert\n"
        );
    }

    #[test]
    fn test_both_forms_space_separated() {
        assert_eq!(
            filter_descriptor(&X, &Y, true, true),
            "crop=4:10:5:2 drawbox=5:2:4:10:invert\n"
        );
    }

    #[test]
    fn test_histogram_only_run_emits_nothing() {
        assert_eq!(filter_descriptor(&X, &Y, false, false), "");
    }
}
