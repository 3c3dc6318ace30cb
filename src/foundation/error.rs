/// Convenience result type used across shadowlayout.
pub type ShadowLayoutResult<T> = Result<T, ShadowLayoutError>;

/// Top-level error taxonomy used by the public APIs.
///
/// Degenerate geometry (empty silhouettes, zero-size surfaces, zero blur steps) is never an
/// error; those frames simply draw nothing. Errors are reserved for malformed inputs and
/// backend failures.
#[derive(thiserror::Error, Debug)]
pub enum ShadowLayoutError {
    /// Invalid caller-provided data (style values, buffer shapes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures inside a drawing backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShadowLayoutError {
    /// Build a [`ShadowLayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShadowLayoutError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ShadowLayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
