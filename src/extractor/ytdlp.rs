//! yt-dlp wrapper for metadata retrieval
//!
//! Locates the yt-dlp binary and asks it for the single-line JSON
//! description of a video URL. All site negotiation happens inside yt-dlp;
//! this module only shells out and deserializes what comes back.

use crate::error::StreampickError;
use crate::extractor::models::VideoMetadata;
use crate::runner::CommandRunner;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Metadata fetcher backed by the yt-dlp executable.
pub struct YtDlpExtractor {
    binary: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl YtDlpExtractor {
    /// Initialize the extractor, verifying yt-dlp availability first.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Result<Self, StreampickError> {
        let binary = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere");
                return Err(StreampickError::YtDlpNotFound);
            }
        };

        Ok(Self { binary, runner })
    }

    /// Build an extractor around an already-resolved binary path.
    pub fn with_binary(binary: impl Into<PathBuf>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }

    /// Fetch the metadata document for `url` without downloading anything.
    /// Uses: yt-dlp --dump-json --no-download
    pub async fn fetch(&self, url: &str) -> Result<VideoMetadata, StreampickError> {
        debug!("Fetching metadata for URL: {}", url);

        let args = vec![
            "--dump-json".to_string(),
            "--no-download".to_string(),
            "--no-warnings".to_string(),
            url.to_string(),
        ];
        let output = self.runner.run(&self.binary, &args).await?;

        if !output.success {
            error!("yt-dlp metadata fetch failed: {}", output.stderr.trim());
            return Err(StreampickError::Retrieval(output.stderr.trim().to_string()));
        }

        let metadata: VideoMetadata = serde_json::from_str(&output.stdout)
            .map_err(|e| StreampickError::Retrieval(format!("invalid metadata JSON: {e}")))?;

        Ok(metadata)
    }

    /// Path of the yt-dlp binary this extractor resolved.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

/// Find the yt-dlp binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Ok(path) = which::which("yt-dlp") {
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(path) = find_in_common_paths() {
        return Some(path);
    }

    warn!("yt-dlp not found in PATH or common locations");
    None
}

/// Check the places package managers and pip installs usually put yt-dlp.
fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel) / manual installs
        "/usr/local/bin/yt-dlp",
        // System
        "/usr/bin/yt-dlp",
        // pip user install
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            dirs::home_dir()?.join(rest)
        } else {
            PathBuf::from(path_str)
        };

        if expanded.is_file() {
            return Some(expanded);
        }
    }

    None
}
