//! Error types for the fetch module.

use thiserror::Error;

/// Boxed error from the underlying transport.
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while requesting an image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (DNS, connection refused, TLS, ...).
    #[error("failed to download image from {url}: {source}")]
    Transport {
        /// The URL that failed.
        url: String,
        /// The underlying transport error.
        #[source]
        source: TransportSource,
    },

    /// The request timed out before a response arrived.
    #[error("timeout downloading image from {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The service answered with something other than `200 OK`.
    #[error("server returned status: {status} {reason} ({url})")]
    ServerStatus {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The status reason phrase.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl FetchError {
    /// Creates a transport error.
    pub fn transport(url: impl Into<String>, source: impl Into<TransportSource>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates a server status error.
    pub fn server_status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self::ServerStatus {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status for [`FetchError::ServerStatus`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
