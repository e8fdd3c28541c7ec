use std::fmt;

use crate::publisher::PublisherIdError;

/// Error types for deployprobe setup and file operations.
///
/// Per-candidate probe failures are never errors; they are classified into
/// a [`ProbeOutcome`](crate::core::ProbeOutcome) instead.
#[derive(Debug)]
pub enum DeployProbeError {
    /// IO error (config reads, ads.txt writes)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// Publisher identifier failed format validation
    InvalidPublisherId(PublisherIdError),
}

impl fmt::Display for DeployProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployProbeError::Io(err) => write!(f, "IO error: {err}"),
            DeployProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DeployProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            DeployProbeError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            DeployProbeError::InvalidPublisherId(err) => write!(f, "Invalid publisher ID: {err}"),
        }
    }
}

impl std::error::Error for DeployProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeployProbeError::Io(err) => Some(err),
            DeployProbeError::Http(err) => Some(err),
            DeployProbeError::InvalidPublisherId(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeployProbeError {
    fn from(err: std::io::Error) -> Self {
        DeployProbeError::Io(err)
    }
}

impl From<reqwest::Error> for DeployProbeError {
    fn from(err: reqwest::Error) -> Self {
        DeployProbeError::Http(err)
    }
}

impl From<PublisherIdError> for DeployProbeError {
    fn from(err: PublisherIdError) -> Self {
        DeployProbeError::InvalidPublisherId(err)
    }
}

/// Type alias for Results using DeployProbeError
pub type Result<T> = std::result::Result<T, DeployProbeError>;
