use crate::manifest::ManifestError;

/// Convenience result type used across the generator.
pub type PlaceholderResult<T> = Result<T, PlaceholderError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlaceholderError {
    /// The manifest could not be loaded. Fatal for the whole run.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Font data could not be registered or shaped.
    #[error("font error: {0}")]
    Font(String),

    /// Drawing onto the canvas failed.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding or writing the PNG failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlaceholderError {
    /// Build a [`PlaceholderError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`PlaceholderError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PlaceholderError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
