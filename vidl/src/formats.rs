//! List-formats mode - yt-dlp prints the format table itself.

use std::io::{self, Write};
use vidl_dl::Extractor;
use vidl_dl::preset::list_formats_options;

/// Print available formats. Failures are printed, not returned.
pub fn execute(url: &str, extractor: &impl Extractor, out: &mut impl Write) -> io::Result<()> {
    tracing::info!(url, "listing formats");

    match extractor.download(&[url], &list_formats_options()) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!(kind = %e.kind(), error = %e, "format listing failed");
            writeln!(out, "Error listing formats: {e}")
        }
    }
}
