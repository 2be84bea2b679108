use std::fmt;
use thiserror::Error;

/// Fixed codes carried by configuration errors.
///
/// Configuration errors are never retryable: the caller has to fix the
/// settings before trying again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A connection entry is absent.
    NoConnection,
    /// Connection protocol resolves to an empty string.
    NoProtocol,
    /// Connection protocol is set but is not `tcp`.
    UnsupportedProtocol,
    /// Connection host is missing and no full URI was given.
    NoHost,
    /// Connection port resolves to zero and no full URI was given.
    NoPort,
    /// Options bundle carries no broker address.
    NoBrokers,
    /// SASL mechanism is not one the client understands.
    UnsupportedMechanism,
}

impl ErrorCode {
    /// Wire form of the code, e.g. `"NO_HOST"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NoConnection => "NO_CONNECTION",
            ErrorCode::NoProtocol => "NO_PROTOCOL",
            ErrorCode::UnsupportedProtocol => "UNSUPPORTED_PROTOCOL",
            ErrorCode::NoHost => "NO_HOST",
            ErrorCode::NoPort => "NO_PORT",
            ErrorCode::NoBrokers => "NO_BROKERS",
            ErrorCode::UnsupportedMechanism => "UNSUPPORTED_MECHANISM",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving connections or creating components
#[derive(Error, Debug)]
pub enum ConnectError {
    /// Invalid or incomplete connection settings
    #[error("[{correlation_id}] {code}: {message}")]
    Config {
        code: ErrorCode,
        correlation_id: String,
        message: String,
    },

    /// A connection needs discovery but no discovery service is wired in
    #[error("[{correlation_id}] discovery service was not found to resolve connections")]
    DiscoveryNotFound { correlation_id: String },

    /// A credential needs a store but no credential store is wired in
    #[error("[{correlation_id}] credential store was not found to resolve credentials")]
    CredentialStoreNotFound { correlation_id: String },

    /// Discovery service failure
    #[error("discovery error: {0}")]
    Discovery(String),

    /// Credential store failure
    #[error("credential store error: {0}")]
    CredentialStore(String),

    /// No factory registration matches the requested descriptor
    #[error("cannot create component {0}")]
    CannotCreate(String),

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConnectError {
    /// Create a configuration error for the given code.
    pub fn config(
        code: ErrorCode,
        correlation_id: impl fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        Self::Config {
            code,
            correlation_id: correlation_id.to_string(),
            message: message.into(),
        }
    }

    /// Configuration code, if this is a configuration error.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Config { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if this error is worth retrying.
    ///
    /// Only collaborator failures may be transient; configuration and
    /// wiring errors need a settings change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Discovery(_) | Self::CredentialStore(_))
    }
}

/// Result type alias for connection resolution
pub type Result<T> = std::result::Result<T, ConnectError>;
