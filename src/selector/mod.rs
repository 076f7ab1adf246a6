//! Format classification and stream selection
//!
//! Splits the yt-dlp format list into audio-only and video-only subsets and
//! picks one stream from each. Selection is a fixed preference cascade:
//! stages are tried in order and the first stage with a non-empty candidate
//! set decides, so reordering the stages would change which id wins.

use crate::extractor::Format;

/// Audio-only formats: no video codec, or an audio codec on a format that
/// yt-dlp itself describes as "audio only".
pub fn audio_formats(formats: &[Format]) -> Vec<&Format> {
    formats
        .iter()
        .filter(|f| {
            f.vcodec.as_deref() == Some("none")
                || (f.acodec.as_deref() != Some("none")
                    && f.format.as_deref().is_some_and(|d| d.contains("audio only")))
        })
        .collect()
}

/// Video-only formats: a video codec present and the audio track stripped.
pub fn video_formats(formats: &[Format]) -> Vec<&Format> {
    formats
        .iter()
        .filter(|f| f.acodec.as_deref() == Some("none") && f.vcodec.as_deref() != Some("none"))
        .collect()
}

/// Whether `id` names one of the classified formats. Manual selection is
/// validated with this before anything is handed to the downloader.
pub fn contains_format(formats: &[&Format], id: &str) -> bool {
    formats.iter().any(|f| f.format_id == id)
}

/// Pick the best audio track for `preferred_language`.
///
/// Cascade: restrict to the preferred language when any track matches,
/// then prefer the "medium" quality tier (m4a first for container
/// compatibility), and as a last resort take the highest bitrate.
pub fn select_audio<'a>(audio: &[&'a Format], preferred_language: &str) -> Option<&'a str> {
    let preferred = preferred_language.to_lowercase();

    // Stage 1: language filter, falling back to every track when nothing matches.
    let by_language: Vec<&Format> = audio
        .iter()
        .copied()
        .filter(|f| {
            f.language
                .as_deref()
                .is_some_and(|lang| lang.to_lowercase().contains(&preferred))
        })
        .collect();
    let pool: &[&Format] = if by_language.is_empty() { audio } else { &by_language };

    // Stage 2: "medium" quality tier, m4a preferred within it.
    let medium: Vec<&Format> = pool
        .iter()
        .copied()
        .filter(|f| {
            f.format_note
                .as_deref()
                .is_some_and(|note| note.to_lowercase().contains("medium"))
        })
        .collect();
    if let Some(first) = medium.first() {
        let pick = medium.iter().find(|f| f.ext == "m4a").unwrap_or(first);
        return Some(pick.format_id.as_str());
    }

    // Stage 3: highest bitrate wins, absent abr counts as zero. Stable sort
    // keeps the listing order among equal bitrates.
    let mut by_bitrate: Vec<&Format> = pool.to_vec();
    by_bitrate.sort_by(|a, b| b.abr.unwrap_or(0.0).total_cmp(&a.abr.unwrap_or(0.0)));
    by_bitrate.first().map(|f| f.format_id.as_str())
}

/// Pick the best video format no taller than `max_height`.
///
/// Cascade: drop formats without a parseable `WxH` resolution or above the
/// cap, take the tallest remaining, and among formats of that same height
/// prefer an AV1 encode.
pub fn select_video<'a>(video: &[&'a Format], max_height: u32) -> Option<&'a str> {
    let mut capped: Vec<(&Format, u32)> = video
        .iter()
        .copied()
        .filter_map(|f| f.height().map(|h| (f, h)))
        .filter(|&(_, height)| height <= max_height)
        .collect();

    // Stable sort keeps yt-dlp's listing order within a height.
    capped.sort_by(|a, b| b.1.cmp(&a.1));

    let &(best, best_height) = capped.first()?;

    let pick = capped
        .iter()
        .take_while(|&&(_, height)| height == best_height)
        .find(|(f, _)| {
            f.vcodec
                .as_deref()
                .is_some_and(|codec| codec.to_lowercase().contains("av01"))
        })
        .map(|&(f, _)| f)
        .unwrap_or(best);

    Some(pick.format_id.as_str())
}

/// Print the audio subset as a table. Presentation only.
pub fn print_audio_formats(formats: &[&Format]) {
    println!("\nAvailable audio tracks:");
    println!("ID\tExt\tCodec\t\tBitrate\tLanguage/Description");
    println!("{}", "-".repeat(80));

    for f in formats {
        let language = f.language.as_deref().unwrap_or("unknown");
        let note = f.format_note.as_deref().unwrap_or("");
        let abr = f
            .abr
            .map(|b| format!("{b}k"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{}\t{}\t{}\t{}\t{} {}",
            f.format_id,
            if f.ext.is_empty() { "N/A" } else { &f.ext },
            f.acodec.as_deref().unwrap_or("N/A"),
            abr,
            language,
            note
        );
    }
}

/// Print the video subset as a table. Presentation only.
pub fn print_video_formats(formats: &[&Format]) {
    println!("\nAvailable video formats (no audio):");
    println!("ID\tExt\tResolution\tCodec\t\tBitrate");
    println!("{}", "-".repeat(80));

    for f in formats {
        let vbr = f
            .vbr
            .map(|b| format!("{b}k"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{}\t{}\t{}\t{}\t{}",
            f.format_id,
            if f.ext.is_empty() { "N/A" } else { &f.ext },
            f.resolution.as_deref().unwrap_or("N/A"),
            f.vcodec.as_deref().unwrap_or("N/A"),
            vbr
        );
    }
}
