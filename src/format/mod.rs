//! The tab-delimited keyframe text format.
//!
//! ```text
//! Adobe After Effects 9.0 Keyframe Data
//!
//! 	Units Per Second	24
//! 	Source Width	1920
//! 	...
//!
//! Layer
//! Transform	Opacity
//! 	Frame	percent
//! 	208	0
//! 	405	100
//!
//! End of Keyframe Data
//! ```
//!
//! Block headers and the `Layer`/terminator lines start at column 0; label and data rows are
//! indented with tabs.

pub(crate) mod cursor;
pub(crate) mod decode;
pub(crate) mod encode;

pub(crate) const SIGNATURE: &str = "Adobe After Effects 9.0 Keyframe Data";
pub(crate) const TERMINATOR: &str = "End of Keyframe Data";
pub(crate) const LAYER: &str = "Layer";
pub(crate) const FRAME_LABEL: &str = "Frame";

pub(crate) const UNITS_PER_SECOND: &str = "Units Per Second";
pub(crate) const SOURCE_WIDTH: &str = "Source Width";
pub(crate) const SOURCE_HEIGHT: &str = "Source Height";
pub(crate) const SOURCE_PIXEL_ASPECT_RATIO: &str = "Source Pixel Aspect Ratio";
pub(crate) const COMP_PIXEL_ASPECT_RATIO: &str = "Comp Pixel Aspect Ratio";

pub(crate) const TIME_REMAP: &str = "Time Remap";
pub(crate) const TRANSFORM: &str = "Transform";
pub(crate) const EFFECTS: &str = "Effects";

/// `[a, r, g, b]` as written to `[r, g, b, a]` as stored.
pub(crate) fn argb_to_rgba([a, r, g, b]: [f64; 4]) -> [f64; 4] {
    [r, g, b, a]
}

/// `[r, g, b, a]` as stored to `[a, r, g, b]` as written.
pub(crate) fn rgba_to_argb([r, g, b, a]: [f64; 4]) -> [f64; 4] {
    [a, r, g, b]
}
