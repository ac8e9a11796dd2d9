/// Convenience result type used across the crate.
pub type ParallaxResult<T> = Result<T, ParallaxError>;

/// Errors raised while building or loading engine inputs.
///
/// Event handling itself never fails: scroll and pointer inputs are clamped or
/// ignored. Only configuration, scripts and IO surface errors.
#[derive(thiserror::Error, Debug)]
pub enum ParallaxError {
    /// Invalid user-provided configuration or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ParallaxError {
    /// Build a [`ParallaxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ParallaxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ParallaxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}
