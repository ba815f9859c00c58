use thiserror::Error;

/// Failures raised by fundamentals providers.
///
/// The scoring core never produces these; they belong to the data boundary
/// and are mapped to distinct HTTP statuses by the API layer.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Ticker not found: {0}")]
    NotFound(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound(_))
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
