use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by this crate.
///
/// Notes:
/// - Network/transport failures (including timeouts) are returned as [`PastebinError::Http`].
/// - The service reports its own logical failures inside a 200-status body (a string starting
///   with "Bad API request"). Those bodies are returned verbatim as ordinary output, never as
///   an error; the only failure this crate detects itself is a missing developer key.
#[derive(Debug, Error)]
pub enum PastebinError {
    /// No developer key could be resolved from an explicit argument or the environment fallback.
    #[error("no developer key provided; pass one explicitly or set PASTEBIN_API_KEY")]
    MissingDevKey,
    /// An invalid URL was provided or produced while joining an endpoint path.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A value outside an enumerated choice set (visibility or expire date).
    #[error("{0}")]
    InvalidChoice(String),
    /// The provided file path did not yield a valid UTF-8 file name.
    #[error("invalid file name")]
    InvalidFileName,
    /// A request completed but returned a non-success HTTP status.
    #[error("request failed with status {0}")]
    RequestFailed(StatusCode),
    /// An underlying I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// An underlying HTTP client operation failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
