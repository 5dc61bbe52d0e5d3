//! Info mode - print video metadata without downloading.

use std::fmt::Display;
use std::io::{self, Write};
use vidl_dl::Extractor;
use vidl_dl::dl::VideoInfo;
use vidl_dl::preset::info_options;

const MISSING: &str = "N/A";

/// Look up metadata and print it. Lookup failures are printed, not returned.
pub fn execute(url: &str, extractor: &impl Extractor, out: &mut impl Write) -> io::Result<()> {
    tracing::info!(url, "fetching video info");

    match extractor.extract_info(url, &info_options()) {
        Ok(Some(info)) => write_info(&info, out),
        Ok(None) => {
            tracing::warn!(url, "yt-dlp returned no info");
            Ok(())
        }
        Err(e) => {
            tracing::error!(kind = %e.kind(), error = %e, "info lookup failed");
            writeln!(out, "Error getting video info: {e}")
        }
    }
}

/// Write the five info lines, `N/A` for missing fields.
pub fn write_info(info: &VideoInfo, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Title: {}", or_missing(info.title.as_ref()))?;
    writeln!(out, "Duration: {} seconds", or_missing(info.duration))?;
    writeln!(out, "View count: {}", or_missing(info.view_count))?;
    writeln!(out, "Upload date: {}", or_missing(info.upload_date.as_ref()))?;
    writeln!(out, "Uploader: {}", or_missing(info.uploader.as_ref()))
}

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}
