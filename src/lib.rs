//! streampick library

pub mod app;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod prompt;
pub mod runner;
pub mod selector;

// Re-export main types for easier use
pub use app::{run, run_with_binary, RunOptions};
pub use downloader::Downloader;
pub use error::StreampickError;
pub use extractor::{Format, VideoMetadata, YtDlpExtractor};
pub use prompt::Prompter;
pub use runner::{CommandOutput, CommandRunner, ProcessRunner};
