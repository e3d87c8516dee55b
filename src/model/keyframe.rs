/// Three-component vector value (anchor point, position, scale).
pub type Vec3 = [f64; 3];

/// An ordered sequence of keyframes for one animatable property.
///
/// Order is the order the rows appeared in; tracks are never sorted.
pub type Track<T = KeyframeValue> = Vec<Keyframe<T>>;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A value sampled at an explicit frame.
pub struct Keyframe<T = KeyframeValue> {
    /// Frame index, as written by the authoring tool.
    pub frame: f64,
    /// Sampled value.
    pub value: T,
}

impl<T> Keyframe<T> {
    /// Build a keyframe.
    pub fn new(frame: f64, value: T) -> Self {
        Self { frame, value }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Value of an effect keyframe: one number or a fixed-length list.
///
/// Four-component vectors are colors stored as `[r, g, b, a]`.
pub enum KeyframeValue {
    /// Single-channel value.
    Scalar(f64),
    /// Multi-channel value.
    Vector(Vec<f64>),
}

impl KeyframeValue {
    /// Collapse parsed channels: exactly one channel becomes a scalar, anything else a vector.
    pub fn from_components(mut values: Vec<f64>) -> Self {
        if values.len() == 1 {
            Self::Scalar(values.remove(0))
        } else {
            Self::Vector(values)
        }
    }

    /// `None` for scalars, the vector length otherwise.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v.len()),
        }
    }
}

/// A value type a track can hold.
///
/// The codec reads every row as a [`KeyframeValue`] and narrows it to the track's type; on
/// the way out it writes [`TrackValue::components`] as the row's channels.
pub trait TrackValue: Sized {
    /// Expected shape, used in error messages.
    const SHAPE: &'static str;

    /// Channels in storage order.
    fn components(&self) -> &[f64];

    /// Narrow a decoded value, `None` if the shape does not fit.
    fn from_value(value: KeyframeValue) -> Option<Self>;
}

impl TrackValue for f64 {
    const SHAPE: &'static str = "scalar";

    fn components(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn from_value(value: KeyframeValue) -> Option<Self> {
        match value {
            KeyframeValue::Scalar(v) => Some(v),
            KeyframeValue::Vector(_) => None,
        }
    }
}

impl TrackValue for Vec3 {
    const SHAPE: &'static str = "3-component";

    fn components(&self) -> &[f64] {
        self.as_slice()
    }

    fn from_value(value: KeyframeValue) -> Option<Self> {
        match value {
            KeyframeValue::Vector(v) => Vec3::try_from(v).ok(),
            KeyframeValue::Scalar(_) => None,
        }
    }
}

impl TrackValue for KeyframeValue {
    const SHAPE: &'static str = "any";

    fn components(&self) -> &[f64] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Vector(v) => v,
        }
    }

    fn from_value(value: KeyframeValue) -> Option<Self> {
        Some(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/keyframe.rs"]
mod tests;
