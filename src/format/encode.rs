use std::fmt;

use crate::{
    format::{
        COMP_PIXEL_ASPECT_RATIO, EFFECTS, FRAME_LABEL, LAYER, SIGNATURE, SOURCE_HEIGHT,
        SOURCE_PIXEL_ASPECT_RATIO, SOURCE_WIDTH, TERMINATOR, TIME_REMAP, TRANSFORM,
        UNITS_PER_SECOND, rgba_to_argb,
    },
    foundation::error::KeyframeResult,
    model::{
        document::{Document, Layer, Transform, TransformProperty},
        keyframe::{Keyframe, Track, TrackValue},
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Encoder input: a [`Document`] whose size and aspect ratios may be left out.
///
/// Missing fields are filled from [`EncodeConfig`].
pub struct KeyframeSource {
    /// Frames per second.
    pub frame_rate: u32,
    /// Composition `[width, height]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comp_size: Option<[u32; 2]>,
    /// Source pixel aspect ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_pixel_aspect_ratio: Option<f64>,
    /// Composition pixel aspect ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comp_pixel_aspect_ratio: Option<f64>,
    /// Layers in output order.
    pub layers: Vec<Layer>,
}

impl KeyframeSource {
    /// Source with only the required fields set.
    pub fn new(frame_rate: u32, layers: Vec<Layer>) -> Self {
        Self {
            frame_rate,
            comp_size: None,
            source_pixel_aspect_ratio: None,
            comp_pixel_aspect_ratio: None,
            layers,
        }
    }

    /// Parse the camelCase JSON form (`frameRate` and `layers` required).
    pub fn from_json(s: &str) -> KeyframeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl From<Document> for KeyframeSource {
    fn from(doc: Document) -> Self {
        Self {
            frame_rate: doc.frame_rate,
            comp_size: Some(doc.comp_size),
            source_pixel_aspect_ratio: Some(doc.source_pixel_aspect_ratio),
            comp_pixel_aspect_ratio: Some(doc.comp_pixel_aspect_ratio),
            layers: doc.layers,
        }
    }
}

/// Header values used when a [`KeyframeSource`] leaves them out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodeConfig {
    /// Composition `[width, height]`.
    pub comp_size: [u32; 2],
    /// Used for both the source and composition pixel aspect ratio.
    pub pixel_aspect_ratio: f64,
}

impl Default for EncodeConfig {
    /// 1920×1080 square pixels, so partial input still yields a usable file.
    fn default() -> Self {
        Self {
            comp_size: [1920, 1080],
            pixel_aspect_ratio: 1.0,
        }
    }
}

/// Encode with the default [`EncodeConfig`].
pub fn encode(source: &KeyframeSource) -> String {
    encode_with(source, &EncodeConfig::default())
}

/// Encode, filling missing header values from `config`.
#[tracing::instrument(skip_all, fields(layers = source.layers.len()))]
pub fn encode_with(source: &KeyframeSource, config: &EncodeConfig) -> String {
    KeyframeText {
        header: Header {
            frame_rate: source.frame_rate,
            comp_size: source.comp_size.unwrap_or(config.comp_size),
            source_pixel_aspect_ratio: source
                .source_pixel_aspect_ratio
                .unwrap_or(config.pixel_aspect_ratio),
            comp_pixel_aspect_ratio: source
                .comp_pixel_aspect_ratio
                .unwrap_or(config.pixel_aspect_ratio),
        },
        layers: &source.layers,
    }
    .to_string()
}

impl Document {
    /// Encode with every header field taken from the document.
    pub fn encode(&self) -> String {
        KeyframeText {
            header: Header {
                frame_rate: self.frame_rate,
                comp_size: self.comp_size,
                source_pixel_aspect_ratio: self.source_pixel_aspect_ratio,
                comp_pixel_aspect_ratio: self.comp_pixel_aspect_ratio,
            },
            layers: &self.layers,
        }
        .to_string()
    }
}

#[derive(Clone, Copy, Debug)]
struct Header {
    frame_rate: u32,
    comp_size: [u32; 2],
    source_pixel_aspect_ratio: f64,
    comp_pixel_aspect_ratio: f64,
}

struct KeyframeText<'a> {
    header: Header,
    layers: &'a [Layer],
}

impl fmt::Display for KeyframeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.header;
        writeln!(f, "{SIGNATURE}")?;
        writeln!(f)?;
        writeln!(f, "\t{UNITS_PER_SECOND}\t{}", h.frame_rate)?;
        writeln!(f, "\t{SOURCE_WIDTH}\t{}", h.comp_size[0])?;
        writeln!(f, "\t{SOURCE_HEIGHT}\t{}", h.comp_size[1])?;
        writeln!(f, "\t{SOURCE_PIXEL_ASPECT_RATIO}\t{}", h.source_pixel_aspect_ratio)?;
        writeln!(f, "\t{COMP_PIXEL_ASPECT_RATIO}\t{}", h.comp_pixel_aspect_ratio)?;
        writeln!(f)?;

        for layer in self.layers {
            write_layer(f, layer)?;
        }

        writeln!(f, "{TERMINATOR}")
    }
}

fn write_layer(f: &mut fmt::Formatter<'_>, layer: &Layer) -> fmt::Result {
    writeln!(f, "{LAYER}")?;

    if let Some(track) = &layer.time_remap {
        write_block(f, format_args!("{TIME_REMAP}"), track)?;
    }
    if let Some(transform) = layer.transform.as_ref().filter(|t| !t.is_empty()) {
        write_transform(f, transform)?;
    }
    if let Some(effects) = &layer.effects {
        for (effect, properties) in effects {
            for (property, track) in properties {
                write_block(f, format_args!("{EFFECTS}\t{effect}\t{property}"), track)?;
            }
        }
    }
    Ok(())
}

fn write_transform(f: &mut fmt::Formatter<'_>, t: &Transform) -> fmt::Result {
    for prop in TransformProperty::ALL {
        match prop {
            TransformProperty::AnchorPoint => write_transform_track(f, prop, &t.anchor_point)?,
            TransformProperty::Position => write_transform_track(f, prop, &t.position)?,
            TransformProperty::Rotation => write_transform_track(f, prop, &t.rotation)?,
            TransformProperty::Scale => write_transform_track(f, prop, &t.scale)?,
            TransformProperty::Opacity => write_transform_track(f, prop, &t.opacity)?,
        }
    }
    Ok(())
}

fn write_transform_track<T: TrackValue>(
    f: &mut fmt::Formatter<'_>,
    prop: TransformProperty,
    track: &Option<Track<T>>,
) -> fmt::Result {
    match track {
        Some(track) => write_block(f, format_args!("{TRANSFORM}\t{}", prop.label()), track),
        None => Ok(()),
    }
}

/// Block header, bare label row, one row per keyframe, blank separator.
fn write_block<T: TrackValue>(
    f: &mut fmt::Formatter<'_>,
    header: fmt::Arguments<'_>,
    track: &[Keyframe<T>],
) -> fmt::Result {
    writeln!(f, "{header}")?;
    writeln!(f, "\t{FRAME_LABEL}")?;
    for k in track {
        write!(f, "\t{}\t", k.frame)?;
        write_channels(f, k.value.components())?;
        writeln!(f, "\t")?;
    }
    writeln!(f)
}

/// Tab-joined channels; 4-channel values go back to `a, r, g, b`.
fn write_channels(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    let argb;
    let channels = match <[f64; 4]>::try_from(components) {
        Ok(rgba) => {
            argb = rgba_to_argb(rgba);
            &argb[..]
        }
        Err(_) => components,
    };
    for (i, v) in channels.iter().enumerate() {
        if i > 0 {
            f.write_str("\t")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/format/encode.rs"]
mod tests;
