//! Download invocation
//!
//! Hands the validated format pair back to yt-dlp, which fetches both
//! streams and muxes them into one file under the destination directory.

use crate::error::StreampickError;
use crate::runner::CommandRunner;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Download driver backed by the yt-dlp executable.
pub struct Downloader {
    binary: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl Downloader {
    pub fn new(binary: impl Into<PathBuf>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }

    /// Download `video_id`+`audio_id` from `url` into `dest_dir`, named after
    /// the video title with the extension yt-dlp decides on.
    ///
    /// The combined selector tells yt-dlp to fetch both streams and mux them.
    /// Uses: yt-dlp -f <video>+<audio> -o <dest>/%(title)s.%(ext)s
    pub async fn download(
        &self,
        url: &str,
        video_id: &str,
        audio_id: &str,
        dest_dir: &Path,
    ) -> Result<(), StreampickError> {
        std::fs::create_dir_all(dest_dir)?;

        let selector = format!("{video_id}+{audio_id}");
        let template = format!("{}/%(title)s.%(ext)s", dest_dir.display());
        debug!("Downloading {} with format selector {}", url, selector);

        let args = vec![
            "-f".to_string(),
            selector,
            "-o".to_string(),
            template,
            url.to_string(),
        ];
        let output = self.runner.run(&self.binary, &args).await?;

        if !output.success {
            error!("yt-dlp download failed: {}", output.stderr.trim());
            return Err(StreampickError::Download(output.stderr.trim().to_string()));
        }

        info!("Download finished into {}", dest_dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandOutput;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::tempdir;

    struct RecordingRunner {
        calls: Mutex<Vec<Vec<String>>>,
        success: bool,
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, _program: &Path, args: &[String]) -> std::io::Result<CommandOutput> {
            self.calls.lock().unwrap().push(args.to_vec());
            Ok(CommandOutput {
                stdout: String::new(),
                stderr: if self.success {
                    String::new()
                } else {
                    "ERROR: Requested format is not available".to_string()
                },
                success: self.success,
            })
        }
    }

    #[tokio::test]
    async fn test_download_creates_dest_dir_and_combines_formats() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("downloads");
        let runner = Arc::new(RecordingRunner {
            calls: Mutex::new(Vec::new()),
            success: true,
        });

        let downloader = Downloader::new("yt-dlp", runner.clone());
        downloader
            .download("https://example.com/v", "299", "140", &dest)
            .await
            .unwrap();

        assert!(dest.is_dir());
        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0], "-f");
        assert_eq!(calls[0][1], "299+140");
        assert!(calls[0][3].ends_with("%(title)s.%(ext)s"));
    }

    #[tokio::test]
    async fn test_download_existing_dir_is_fine() {
        let temp = tempdir().unwrap();
        let runner = Arc::new(RecordingRunner {
            calls: Mutex::new(Vec::new()),
            success: true,
        });

        let downloader = Downloader::new("yt-dlp", runner);
        downloader
            .download("https://example.com/v", "299", "140", temp.path())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_download_failure_carries_stderr() {
        let temp = tempdir().unwrap();
        let runner = Arc::new(RecordingRunner {
            calls: Mutex::new(Vec::new()),
            success: false,
        });

        let downloader = Downloader::new("yt-dlp", runner);
        let err = downloader
            .download("https://example.com/v", "299", "140", temp.path())
            .await
            .unwrap_err();
        match err {
            StreampickError::Download(msg) => assert!(msg.contains("not available")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
