/// Convenience result type used across chromewarp.
pub type ChromeResult<T> = Result<T, ChromeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Warp math itself never fails; errors only come from buffer construction, the rasterizer
/// bridge, and configuration parsing.
#[derive(thiserror::Error, Debug)]
pub enum ChromeError {
    /// Invalid caller-provided dimensions, lengths or glyph data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while rasterizing or converting pixel buffers.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when serializing or deserializing configuration records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromeError {
    /// Build a [`ChromeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChromeError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`ChromeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChromeError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
