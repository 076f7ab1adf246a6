//! Error handling for streampick

use thiserror::Error;

/// Main error type for streampick
///
/// Every variant is terminal: the run aborts with a one-line message and
/// exit status 1, and nothing is retried.
#[derive(Debug, Error)]
pub enum StreampickError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to fetch video metadata: {0}")]
    Retrieval(String),

    #[error("No {0} formats found")]
    NoFormats(&'static str),

    #[error("{0}")]
    Selection(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
