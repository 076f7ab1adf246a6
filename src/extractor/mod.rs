pub mod models;
pub mod ytdlp;

pub use models::{Format, VideoMetadata};
pub use ytdlp::{find_ytdlp, YtDlpExtractor};
