// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Manifest(ManifestError),
    /// The render target has no element with the configured container id.
    MissingContainer(String),
    InvalidArgument(String),
}

/// Specific error types for manifest (index.json) handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// The manifest could not be fetched or read.
    Unavailable(String),

    /// The manifest exists but is not valid JSON or has the wrong shape.
    Malformed(String),

    /// The manifest could not be serialized for writing.
    Serialize(String),
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Unavailable(_) => "error-manifest-unavailable",
            ManifestError::Malformed(_) => "error-manifest-malformed",
            ManifestError::Serialize(_) => "error-manifest-serialize",
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Unavailable(msg) => write!(f, "Manifest unavailable: {}", msg),
            ManifestError::Malformed(msg) => write!(f, "Malformed manifest: {}", msg),
            ManifestError::Serialize(msg) => write!(f, "Cannot serialize manifest: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::MissingContainer(id) => write!(f, "Gallery container not found: #{}", id),
            Error::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Io(format!("blocking task failed: {err}"))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Manifest(ManifestError::Malformed(err.to_string()))
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
