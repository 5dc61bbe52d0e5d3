//! The extraction library seen from the CLI.

use crate::dl::{DownloadOptions, VideoInfo};
use crate::error::Result;

/// Video extraction backend.
///
/// [`crate::dl::YtDlp`] is the production implementation; the CLI only talks
/// to this trait so runs can be driven without Python or network access.
pub trait Extractor {
    /// Fetch metadata without downloading.
    ///
    /// Returns `Ok(None)` when the backend yields no info, which yt-dlp does
    /// for skipped items under `ignoreerrors`.
    fn extract_info(&self, url: &str, opts: &DownloadOptions) -> Result<Option<VideoInfo>>;

    /// Download every URL according to `opts`. Blocks until done.
    fn download(&self, urls: &[&str], opts: &DownloadOptions) -> Result<()>;
}
