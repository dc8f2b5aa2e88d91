//! Error types for tg-preview-feed.
//!
//! Extraction itself degrades field by field and almost never fails; these
//! errors cover the page-level and I/O boundaries around it.

/// Error type for page extraction and feed output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document has no channel header title, so it is not a channel page.
    #[error("channel title not found; page is not a channel web preview")]
    MissingTitle,

    /// Fetching the channel page failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Rendering a feed document failed.
    #[error("feed rendering failed: {0}")]
    Feed(String),

    /// Writing feed files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of the HTTP fetch of a channel page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Connection, TLS or body read failure.
    #[error("network error fetching {url}: {source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
