//! Error types for Bestie-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Remote failures fall into three kinds (`Network`, `Decode`, `Rejected`)
//! and are all treated as recoverable by the state layer.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Transport or connectivity failure
    #[snafu(display("Network error calling {endpoint}: {source}"))]
    Network {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Malformed response body
    #[snafu(display("Could not decode response from {endpoint}: {source}"))]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    /// Non-success status from the remote service
    #[snafu(display("{endpoint} rejected the request (HTTP {status})"))]
    Rejected { endpoint: String, status: u16 },

    /// Login response did not confirm success
    #[snafu(display("Login failed: {message}"))]
    LoginFailed { message: String },

    /// A table operation needed an open edit session
    #[snafu(display("No record is being edited"))]
    NoEditSession,

    /// No record with this identifier in the owned list
    #[snafu(display("Unknown record: {id}"))]
    UnknownRecord { id: String },

    /// Field is not editable for this record type
    #[snafu(display("Field '{field}' is not editable"))]
    UnknownField { field: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Whether this error came from the remote service round trip
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Network { .. } | Error::Decode { .. } | Error::Rejected { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
