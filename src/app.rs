//! Main application flow
//!
//! fetch metadata -> classify -> pick one audio and one video stream
//! (automatically or by hand) -> hand the pair back to yt-dlp for download.
//! Strictly sequential; the first failure aborts the whole run.

use crate::downloader::Downloader;
use crate::error::StreampickError;
use crate::extractor::{self, YtDlpExtractor};
use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use crate::selector;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_LANGUAGE: &str = "pt-BR";
pub const DEFAULT_MAX_HEIGHT: u32 = 1080;

/// Everything the run needs besides the interactive session.
///
/// `language` and `max_height` are `None` when the user gave no flag, in
/// which case the corresponding prompt supplies the value.
pub struct RunOptions {
    pub url: String,
    pub language: Option<String>,
    pub max_height: Option<u32>,
    pub output_dir: PathBuf,
    /// Skip the confirmation prompt and auto-select.
    pub auto: bool,
}

/// Resolve the yt-dlp binary and run the full flow against it.
pub async fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    prompter: &mut Prompter<R, W>,
    runner: Arc<dyn CommandRunner>,
) -> Result<(), StreampickError> {
    let binary = extractor::find_ytdlp().ok_or(StreampickError::YtDlpNotFound)?;
    run_with_binary(&binary, options, prompter, runner).await
}

/// Full flow against an already-resolved yt-dlp binary.
pub async fn run_with_binary<R: BufRead, W: Write>(
    binary: &Path,
    options: &RunOptions,
    prompter: &mut Prompter<R, W>,
    runner: Arc<dyn CommandRunner>,
) -> Result<(), StreampickError> {
    let extractor = YtDlpExtractor::with_binary(binary, runner.clone());
    let metadata = extractor.fetch(&options.url).await?;

    println!("Video title: {}", metadata.title);

    let audio_set = selector::audio_formats(&metadata.formats);
    let video_set = selector::video_formats(&metadata.formats);

    selector::print_audio_formats(&audio_set);
    selector::print_video_formats(&video_set);

    if audio_set.is_empty() {
        return Err(StreampickError::NoFormats("audio"));
    }
    if video_set.is_empty() {
        return Err(StreampickError::NoFormats("video"));
    }

    let auto = options.auto
        || prompter.confirm("\nAutomatically pick the best quality? (Y/n): ")?;

    let (video_id, audio_id) = if auto {
        let language = match &options.language {
            Some(language) => language.clone(),
            None => {
                let answer =
                    prompter.ask("Preferred audio language (blank for pt-BR): ")?;
                if answer.is_empty() {
                    DEFAULT_LANGUAGE.to_string()
                } else {
                    answer
                }
            }
        };

        let max_height = match options.max_height {
            Some(height) => height,
            None => {
                let answer =
                    prompter.ask("Maximum resolution (blank for 1080p): ")?;
                if answer.is_empty() {
                    DEFAULT_MAX_HEIGHT
                } else {
                    answer.parse().unwrap_or_else(|_| {
                        println!("Invalid resolution, falling back to 1080p.");
                        DEFAULT_MAX_HEIGHT
                    })
                }
            }
        };

        let audio_id = selector::select_audio(&audio_set, &language)
            .ok_or_else(|| {
                StreampickError::Selection("Could not find a suitable audio track".to_string())
            })?
            .to_string();
        let video_id = selector::select_video(&video_set, max_height)
            .ok_or_else(|| {
                StreampickError::Selection("Could not find a suitable video format".to_string())
            })?
            .to_string();

        println!("\nAutomatically selected:");
        println!("- Audio: {audio_id}");
        println!("- Video: {video_id}");

        (video_id, audio_id)
    } else {
        let audio_id = prompter.ask("\nEnter the audio track id: ")?;
        let video_id = prompter.ask("Enter the video format id: ")?;

        if !selector::contains_format(&audio_set, &audio_id) {
            return Err(StreampickError::Selection(format!(
                "Audio id '{audio_id}' not found"
            )));
        }
        if !selector::contains_format(&video_set, &video_id) {
            return Err(StreampickError::Selection(format!(
                "Video id '{video_id}' not found"
            )));
        }

        (video_id, audio_id)
    };

    println!("\nDownloading video format {video_id} with audio {audio_id}...");

    let downloader = Downloader::new(binary, runner);
    downloader
        .download(&options.url, &video_id, &audio_id, &options.output_dir)
        .await?;

    println!(
        "\nDownload complete! The file was saved into '{}'.",
        options.output_dir.display()
    );

    Ok(())
}
