//! Error types for yt-dlp calls, classified by failure kind.

use std::fmt;
use thiserror::Error;

/// Failure of a yt-dlp call.
///
/// Library errors keep yt-dlp's own message; the variant records what kind of
/// failure the message describes.
#[derive(Debug, Error)]
pub enum Error {
    /// The `yt_dlp` Python package could not be imported
    #[error("yt-dlp is not installed for the embedded Python interpreter ({0})")]
    MissingLibrary(String),

    /// The input is not a URL yt-dlp can parse
    #[error("{0}")]
    InvalidUrl(String),

    /// No extractor claims the URL
    #[error("{0}")]
    UnsupportedUrl(String),

    /// The video or playlist is unavailable, private, or removed
    #[error("{0}")]
    NotFound(String),

    /// Connection, DNS, or timeout failure while talking to the site
    #[error("{0}")]
    Network(String),

    /// Any other error reported by yt-dlp
    #[error("{0}")]
    Extraction(String),

    /// Unexpected Python error outside yt-dlp's own error hierarchy
    #[error(transparent)]
    Python(#[from] pyo3::PyErr),
}

/// Coarse classification of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MissingLibrary,
    InvalidUrl,
    UnsupportedUrl,
    NotFound,
    Network,
    Extraction,
    Python,
}

const INVALID_URL: &[&str] = &["is not a valid url", "invalid url"];

const UNSUPPORTED_URL: &[&str] = &["unsupported url"];

const NOT_FOUND: &[&str] = &[
    "video unavailable",
    "private video",
    "has been removed",
    "does not exist",
    "no longer available",
    "http error 404",
    "http error 410",
];

const NETWORK: &[&str] = &[
    "unable to download webpage",
    "unable to download api page",
    "urlopen error",
    "timed out",
    "connection",
    "name resolution",
    "network is unreachable",
    "ssl",
];

impl ErrorKind {
    /// Classify a yt-dlp error message by substring.
    ///
    /// Not-found markers are checked before network markers since yt-dlp
    /// reports a 404 as "Unable to download webpage: HTTP Error 404".
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        let has_any = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

        if has_any(INVALID_URL) {
            Self::InvalidUrl
        } else if has_any(UNSUPPORTED_URL) {
            Self::UnsupportedUrl
        } else if has_any(NOT_FOUND) {
            Self::NotFound
        } else if has_any(NETWORK) {
            Self::Network
        } else {
            Self::Extraction
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingLibrary => "missing-library",
            Self::InvalidUrl => "invalid-url",
            Self::UnsupportedUrl => "unsupported-url",
            Self::NotFound => "not-found",
            Self::Network => "network",
            Self::Extraction => "extraction",
            Self::Python => "python",
        };
        f.write_str(s)
    }
}

impl Error {
    /// Build an error from a yt-dlp message, choosing the variant by [`ErrorKind::classify`].
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        match ErrorKind::classify(&message) {
            ErrorKind::InvalidUrl => Self::InvalidUrl(message),
            ErrorKind::UnsupportedUrl => Self::UnsupportedUrl(message),
            ErrorKind::NotFound => Self::NotFound(message),
            ErrorKind::Network => Self::Network(message),
            _ => Self::Extraction(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingLibrary(_) => ErrorKind::MissingLibrary,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Self::UnsupportedUrl(_) => ErrorKind::UnsupportedUrl,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Network(_) => ErrorKind::Network,
            Self::Extraction(_) => ErrorKind::Extraction,
            Self::Python(_) => ErrorKind::Python,
        }
    }
}

/// Result type alias for vidl-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
