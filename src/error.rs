// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
}

/// Specific error types for portfolio manifest problems.
/// Used to decide whether the showcase starts disabled or aborts startup.
#[derive(Debug, Clone)]
pub enum ManifestError {
    /// Manifest file could not be read (missing, permissions, etc.)
    Unreadable(String),

    /// File exists but is not valid TOML or misses required fields
    Invalid(String),

    /// Manifest parsed but describes no projects
    Empty,
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Unreadable(_) => "error-manifest-unreadable",
            ManifestError::Invalid(_) => "error-manifest-invalid",
            ManifestError::Empty => "error-manifest-empty",
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Unreadable(msg) => write!(f, "Manifest unreadable: {}", msg),
            ManifestError::Invalid(msg) => write!(f, "Manifest invalid: {}", msg),
            ManifestError::Empty => write!(f, "Manifest describes no projects"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

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

pub type Result<T> = std::result::Result<T, Error>;
