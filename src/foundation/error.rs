/// Convenience result type used across the codec.
pub type KeyframeResult<T> = Result<T, KeyframeError>;

/// Error taxonomy for decoding, validating and converting keyframe data.
#[derive(thiserror::Error, Debug)]
pub enum KeyframeError {
    /// A property block appeared before any `Layer` line opened a layer.
    #[error("structural error: property block `{header}` outside of layer (line {line})")]
    Structural {
        /// 1-based line of the offending block header.
        line: usize,
        /// The block header as written.
        header: String,
    },

    /// The input ran out while a terminator or continuation line was still expected.
    #[error("unexpected end of input: {0}")]
    UnexpectedEnd(String),

    /// A header value, frame number or channel value that is not a number.
    #[error("invalid number `{text}` (line {line})")]
    InvalidNumber {
        /// 1-based line containing the field.
        line: usize,
        /// The field text.
        text: String,
    },

    /// A typed track received rows of the wrong shape.
    #[error("shape error: `{property}` expects {expected} values (line {line})")]
    Shape {
        /// 1-based line of the offending row.
        line: usize,
        /// Property label, e.g. `Transform Position`.
        property: String,
        /// Human readable description of the expected shape.
        expected: &'static str,
    },

    /// A decoded document failed an opt-in consistency check.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when converting to or from JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeyframeError {
    /// Build a [`KeyframeError::UnexpectedEnd`] value.
    pub fn unexpected_end(msg: impl Into<String>) -> Self {
        Self::UnexpectedEnd(msg.into())
    }

    /// Build a [`KeyframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeyframeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KeyframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
