use thiserror::Error;

/// Errors raised while reading typesetting input or configuration.
///
/// Rendering paths never produce these; lookup misses and unknown numeral
/// styles degrade to placeholder values instead.
#[derive(Error, Debug)]
pub enum ApparatusError {
    #[error("Invalid nominal line height: {0} (must be a positive number of pixels)")]
    InvalidLineHeight(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl ApparatusError {
    pub fn invalid_line_height(height: f64) -> Self {
        Self::InvalidLineHeight(height)
    }
}

impl From<String> for ApparatusError {
    fn from(s: String) -> Self {
        ApparatusError::Generic(s)
    }
}

impl From<&str> for ApparatusError {
    fn from(s: &str) -> Self {
        ApparatusError::Generic(s.to_string())
    }
}
