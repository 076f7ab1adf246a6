//! streampick - yt-dlp front-end for picking stream pairs
//!
//! Lists the audio and video streams yt-dlp reports for a URL, picks one of
//! each (automatically or interactively), and lets yt-dlp download and mux
//! the pair into a single file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use streampick::app::{self, RunOptions};
use streampick::prompt::Prompter;
use streampick::runner::ProcessRunner;

#[derive(Parser)]
#[command(version, about = "Download a video with a hand-picked audio track via yt-dlp")]
struct Args {
    /// Video URL
    url: Option<String>,

    /// Preferred audio language tag; skips the language prompt
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum video height in pixels; skips the resolution prompt
    #[arg(short, long)]
    max_height: Option<u32>,

    /// Destination directory for the muxed file
    #[arg(short, long, default_value = "downloads")]
    output_dir: PathBuf,

    /// Auto-select the best streams without asking
    #[arg(short = 'y', long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // A missing URL is a usage error, reported with exit status 1 before
    // anything is fetched.
    let Some(url) = args.url else {
        eprintln!("Usage: streampick [OPTIONS] <URL>");
        std::process::exit(1);
    };

    let options = RunOptions {
        url,
        language: args.language,
        max_height: args.max_height,
        output_dir: args.output_dir,
        auto: args.yes,
    };

    let mut prompter = Prompter::stdio();
    if let Err(err) = app::run(&options, &mut prompter, Arc::new(ProcessRunner)).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}
