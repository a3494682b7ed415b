//! Error kinds for costar operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to decide whether a failure aborts the run
/// (the focal filmography) or only skips one item (a single cast list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Metadata source errors
    // =========================================================================
    /// Transport failure: connect, DNS, TLS, timeout while reading
    Network,

    /// The API answered with a non-success status
    Http,

    /// Request exceeded the configured timeout
    Timeout,

    /// The API throttled the request
    RateLimited,

    /// The requested person or movie does not exist upstream
    NotFound,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Serialization failed
    SerializationFailed,

    /// Deserialization failed (malformed API payload, bad TOML)
    DeserializationFailed,

    /// A date string did not match YYYY-MM-DD
    InvalidDate,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// An external renderer (Graphviz `dot`) failed
    RenderFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Network | ErrorKind::Timeout | ErrorKind::RateLimited | ErrorKind::IoFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Network.to_string(), "Network");
        assert_eq!(ErrorKind::InvalidDate.to_string(), "InvalidDate");
        assert_eq!(ErrorKind::RenderFailed.as_str(), "RenderFailed");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::Network.is_retryable());
        assert!(ErrorKind::Timeout.is_retryable());
        assert!(ErrorKind::RateLimited.is_retryable());
        assert!(!ErrorKind::Http.is_retryable());
        assert!(!ErrorKind::NotFound.is_retryable());
        assert!(!ErrorKind::DeserializationFailed.is_retryable());
    }
}
