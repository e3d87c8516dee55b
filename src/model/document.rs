use std::str::FromStr;

use indexmap::IndexMap;

use crate::{
    foundation::error::{KeyframeError, KeyframeResult},
    model::keyframe::{KeyframeValue, Track, Vec3},
};

/// Effect tracks keyed by effect name, then property name, in the order they were read.
pub type Effects = IndexMap<String, IndexMap<String, Track<KeyframeValue>>>;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A decoded keyframe export.
///
/// `Default` yields the decoder's starting point: all header fields zero, no layers.
pub struct Document {
    /// Frames per second (`Units Per Second`).
    pub frame_rate: u32,
    /// Composition `[width, height]` in pixels.
    pub comp_size: [u32; 2],
    /// `Source Pixel Aspect Ratio`.
    pub source_pixel_aspect_ratio: f64,
    /// `Comp Pixel Aspect Ratio`.
    pub comp_pixel_aspect_ratio: f64,
    /// Layers in input order.
    pub layers: Vec<Layer>,
}

impl Document {
    /// Check invariants the codec itself does not enforce.
    ///
    /// The frame rate must be positive and every effect track must hold values of one shape.
    /// Typed tracks (time remap, transform) already guarantee their shape.
    pub fn validate(&self) -> KeyframeResult<()> {
        if self.frame_rate == 0 {
            return Err(KeyframeError::validation("frame rate must be > 0"));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            let Some(effects) = &layer.effects else {
                continue;
            };
            for (effect, properties) in effects {
                for (property, track) in properties {
                    let mut shapes = track.iter().map(|k| k.value.arity());
                    if let Some(first) = shapes.next() {
                        if shapes.any(|s| s != first) {
                            return Err(KeyframeError::validation(format!(
                                "layer {i}: `{effect}` / `{property}` mixes value shapes"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Parse the JSON form produced by [`Document::to_json_pretty`].
    pub fn from_json(s: &str) -> KeyframeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty-printed JSON with camelCase keys; absent tracks are omitted.
    pub fn to_json_pretty(&self) -> KeyframeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromStr for Document {
    type Err = KeyframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::format::decode::decode(s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Tracks belonging to one layer. Every group is independently optional.
pub struct Layer {
    /// `Time Remap` track, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_remap: Option<Track<f64>>,
    /// `Transform` tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    /// Effect parameter tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Effects>,
}

impl Layer {
    /// Store an effect track, creating the effect's property map on first use.
    pub fn insert_effect(
        &mut self,
        effect: impl Into<String>,
        property: impl Into<String>,
        track: Track<KeyframeValue>,
    ) {
        self.effects
            .get_or_insert_with(Effects::default)
            .entry(effect.into())
            .or_default()
            .insert(property.into(), track);
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Transform property tracks.
pub struct Transform {
    /// `Anchor Point`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_point: Option<Track<Vec3>>,
    /// `Position`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Track<Vec3>>,
    /// `Scale`, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Track<Vec3>>,
    /// `Rotation`, in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Track<f64>>,
    /// `Opacity`, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Track<f64>>,
}

impl Transform {
    /// True when no transform track is populated.
    pub fn is_empty(&self) -> bool {
        self.anchor_point.is_none()
            && self.position.is_none()
            && self.scale.is_none()
            && self.rotation.is_none()
            && self.opacity.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The transform properties the format knows about.
pub enum TransformProperty {
    /// `Anchor Point` (3-component).
    AnchorPoint,
    /// `Position` (3-component).
    Position,
    /// `Rotation` (scalar).
    Rotation,
    /// `Scale` (3-component).
    Scale,
    /// `Opacity` (scalar).
    Opacity,
}

impl TransformProperty {
    /// Emission order used by the encoder.
    pub const ALL: [Self; 5] = [
        Self::AnchorPoint,
        Self::Position,
        Self::Rotation,
        Self::Scale,
        Self::Opacity,
    ];

    /// Map a block name to a property; unknown names yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Anchor Point" => Some(Self::AnchorPoint),
            "Position" => Some(Self::Position),
            "Rotation" => Some(Self::Rotation),
            "Scale" => Some(Self::Scale),
            "Opacity" => Some(Self::Opacity),
            _ => None,
        }
    }

    /// Block name as written in the text format.
    pub fn label(self) -> &'static str {
        match self {
            Self::AnchorPoint => "Anchor Point",
            Self::Position => "Position",
            Self::Rotation => "Rotation",
            Self::Scale => "Scale",
            Self::Opacity => "Opacity",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/document.rs"]
mod tests;
