//! Data structures for the yt-dlp metadata document

use serde::{Deserialize, Serialize};

/// Metadata for a single video: title plus the ordered format list exactly
/// as yt-dlp reported it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    #[serde(default)]
    pub formats: Vec<Format>,
}

/// One downloadable stream from the yt-dlp `formats` array.
///
/// `vcodec`/`acodec` carry the sentinel string `"none"` for a missing track;
/// an absent field is not the same thing as `"none"` and the classifier
/// treats them differently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    /// Audio bitrate in kbps, approximate
    pub abr: Option<f32>,
    /// Video bitrate in kbps, approximate
    pub vbr: Option<f32>,
    /// `"<width>x<height>"` for video streams
    pub resolution: Option<String>,
    pub language: Option<String>,
    /// Free-text quality hint, e.g. "medium"
    pub format_note: Option<String>,
    /// Free-text description, e.g. "251 - audio only (medium)"
    pub format: Option<String>,
}

impl Format {
    /// Height parsed out of the `resolution` field, when it has the
    /// `<width>x<height>` shape.
    pub fn height(&self) -> Option<u32> {
        let resolution = self.resolution.as_deref()?;
        let (_, height) = resolution.split_once('x')?;
        height.trim().parse().ok()
    }
}
