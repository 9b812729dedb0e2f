use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::favorites::StorageError),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Config(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a recipe provider lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure, non-success status or an unparseable body
    #[error("network error: {0}")]
    Network(String),

    /// Well-formed response with no matching meal record
    #[error("no recipe found: {0}")]
    NotFound(String),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network(_) => FailureKind::Network,
            FetchError::NotFound(_) => FailureKind::NotFound,
        }
    }
}

/// Failures of a generative remix request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemixError {
    #[error("network error: {0}")]
    Network(String),

    /// Successful status but no usable completion in the body
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("remix is not configured: {0}")]
    Unconfigured(String),
}

impl RemixError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RemixError::Network(_) => FailureKind::Network,
            RemixError::MalformedResponse(_) => FailureKind::MalformedResponse,
            RemixError::Unconfigured(_) => FailureKind::Unconfigured,
        }
    }
}

/// Flat failure taxonomy shared by the remote components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    NotFound,
    MalformedResponse,
    Unconfigured,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FailureKind::Network => "network",
            FailureKind::NotFound => "not-found",
            FailureKind::MalformedResponse => "malformed-response",
            FailureKind::Unconfigured => "unconfigured",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_labels() {
        assert_eq!(FetchError::Network("down".into()).kind().to_string(), "network");
        assert_eq!(
            FetchError::NotFound("x".into()).kind().to_string(),
            "not-found"
        );
        assert_eq!(
            RemixError::MalformedResponse("x".into()).kind().to_string(),
            "malformed-response"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::Config("bad temperature".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad temperature");
    }
}
