//! Error types for pagetext.
//!
//! Extraction itself never fails and html5ever recovers from any markup, so
//! every variant here belongs to retrieving the page.

use std::path::PathBuf;

/// Error type for fetch-and-extract operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target is not a URL with a supported scheme.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be configured.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level failure (DNS, connect, TLS, redirect loop, body read).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// The URL being fetched.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus {
        /// The URL being fetched.
        url: String,
        /// Status code the server returned.
        status: reqwest::StatusCode,
    },

    /// Reading a `file://` target failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Local path the URL resolved to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for fetch-and-extract operations.
pub type Result<T> = std::result::Result<T, Error>;
