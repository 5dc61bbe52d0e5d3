//! Single video and playlist downloads.

use std::io::{self, Write};
use std::path::Path;
use vidl_dl::Extractor;
use vidl_dl::preset::Preset;

/// Download one video into `output_dir`. Returns whether yt-dlp succeeded.
pub fn single(
    url: &str,
    preset: &Preset,
    output_dir: &Path,
    extractor: &impl Extractor,
    out: &mut impl Write,
) -> io::Result<bool> {
    let opts = preset.single(output_dir);
    tracing::info!(url, format = ?opts.format, "downloading video");

    writeln!(out, "Downloading: {url}")?;

    match extractor.download(&[url], &opts) {
        Ok(()) => {
            writeln!(out, "Download completed successfully!")?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(kind = %e.kind(), error = %e, "video download failed");
            writeln!(out, "Error downloading video: {e}")?;
            Ok(false)
        }
    }
}

/// Download a playlist into `output_dir/<playlist>/`, at most `max_downloads` items.
///
/// Individual item failures are skipped by yt-dlp; only a fatal error returns `false`.
pub fn playlist(
    url: &str,
    preset: &Preset,
    output_dir: &Path,
    max_downloads: Option<u32>,
    extractor: &impl Extractor,
    out: &mut impl Write,
) -> io::Result<bool> {
    let opts = preset.playlist(output_dir, max_downloads);
    tracing::info!(url, format = ?opts.format, limit = ?opts.playlistend, "downloading playlist");

    writeln!(out, "Downloading playlist: {url}")?;

    match extractor.download(&[url], &opts) {
        Ok(()) => {
            writeln!(out, "Playlist download completed!")?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(kind = %e.kind(), error = %e, "playlist download failed");
            writeln!(out, "Error downloading playlist: {e}")?;
            Ok(false)
        }
    }
}
