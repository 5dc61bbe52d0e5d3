//! Download presets: format selectors and output templates.
//!
//! **Quality:** [`Quality::Best`], [`Quality::Worst`], or [`Quality::Height`] (`best[height<=N]`).
//! Audio-only always selects `bestaudio/best`.
//!
//! ```no_run
//! use vidl_dl::Extractor;
//! use vidl_dl::dl::YtDlp;
//! use vidl_dl::preset::{Preset, Quality};
//! use std::path::Path;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let preset = Preset { quality: Quality::Height("720".to_string()), audio_only: false };
//! YtDlp.download(&["https://youtube.com/watch?v=example"], &preset.single(Path::new("downloads")))?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output:** `downloads/title.ext`, or `downloads/playlist/index - title.ext` for playlists

use crate::dl::{DownloadOptions, OutputTemplates};
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output template for a single video, relative to the output directory.
pub const VIDEO_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Output template for playlist items, nested by playlist name and index.
pub const PLAYLIST_TEMPLATE: &str = "%(playlist)s/%(playlist_index)s - %(title)s.%(ext)s";

/// Format selector used whenever audio-only is requested.
pub const AUDIO_FORMAT: &str = "bestaudio/best";

/// Requested video quality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Quality {
    #[default]
    Best,
    Worst,
    /// Maximum height in pixels, kept as the user wrote it
    Height(String),
}

impl Quality {
    /// Whether a [`Quality::Height`] holds a positive integer.
    pub fn is_valid_height(&self) -> bool {
        match self {
            Self::Height(h) => h.parse::<u32>().is_ok_and(|h| h > 0),
            _ => true,
        }
    }
}

/// Total: `best` and `worst` match exactly, anything else is a height.
impl FromStr for Quality {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "best" => Self::Best,
            "worst" => Self::Worst,
            other => Self::Height(other.to_string()),
        })
    }
}

impl fmt::Display for Quality {
    /// The format selector for video downloads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Best => f.write_str("best"),
            Self::Worst => f.write_str("worst"),
            Self::Height(h) => write!(f, "best[height<={h}]"),
        }
    }
}

/// Format and layout choices shared by single and playlist downloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preset {
    pub quality: Quality,
    pub audio_only: bool,
}

impl Preset {
    /// yt-dlp format selector; audio-only overrides quality.
    pub fn format(&self) -> String {
        if self.audio_only {
            AUDIO_FORMAT.to_string()
        } else {
            self.quality.to_string()
        }
    }

    /// Options for one video: `<dir>/%(title)s.%(ext)s`, playlist context ignored.
    pub fn single(&self, output_dir: &Path) -> DownloadOptions {
        DownloadOptions {
            format: Some(self.format()),
            outtmpl: Some(template_in(output_dir, VIDEO_TEMPLATE)),
            noplaylist: Some(true),
            ..Default::default()
        }
    }

    /// Options for a playlist: nested template, failing items skipped.
    ///
    /// `max_downloads` of `None` or `Some(0)` means the whole playlist.
    pub fn playlist(&self, output_dir: &Path, max_downloads: Option<u32>) -> DownloadOptions {
        DownloadOptions {
            format: Some(self.format()),
            outtmpl: Some(template_in(output_dir, PLAYLIST_TEMPLATE)),
            ignoreerrors: Some(true),
            playlistend: max_downloads.filter(|&n| n > 0),
            ..Default::default()
        }
    }
}

/// Options for a metadata-only lookup.
pub fn info_options() -> DownloadOptions {
    DownloadOptions {
        quiet: Some(true),
        no_warnings: Some(true),
        ..Default::default()
    }
}

/// Options that make `download` print the format table instead of downloading.
pub fn list_formats_options() -> DownloadOptions {
    DownloadOptions {
        listformats: Some(true),
        quiet: Some(false),
        ..Default::default()
    }
}

fn template_in(output_dir: &Path, template: &str) -> OutputTemplates {
    OutputTemplates::simple(output_dir.join(template).to_string_lossy().to_string())
}
