//! Codec for After Effects keyframe clipboard text.
//!
//! After Effects copies keyframes to the clipboard as a tab-delimited, indentation-significant
//! text block (`Adobe After Effects 9.0 Keyframe Data`). This crate turns that text into a
//! [`Document`] and back.
//!
//! - [`decode`]: `&str -> Document` (fails on a property outside a layer or a missing
//!   terminator)
//! - [`encode`] / [`encode_with`]: `KeyframeSource -> String`, filling an omitted comp size
//!   and aspect ratios from [`EncodeConfig`]
//!
//! Colors are stored as `[r, g, b, a]`; the text format writes them `alpha, red, green, blue`.
//! No IO happens here: callers own reading and writing the text.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod format;
mod foundation;
mod model;

pub use format::cursor::LineCursor;
pub use format::decode::decode;
pub use format::encode::{EncodeConfig, KeyframeSource, encode, encode_with};
pub use foundation::error::{KeyframeError, KeyframeResult};
pub use model::document::{Document, Effects, Layer, Transform, TransformProperty};
pub use model::keyframe::{Keyframe, KeyframeValue, Track, TrackValue, Vec3};
