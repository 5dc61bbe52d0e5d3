//! Configuration resolved from CLI arguments.
//!
//! Args structs (for CLI parsing) remain in cli.rs and mode.rs.

use crate::cli::Cli;
use crate::mode::Mode;
use eyre::{Result, ensure};
use std::path::PathBuf;
use vidl_dl::preset::{Preset, Quality};

/// Resolved run configuration.
///
/// The output directory travels with the config to every operation.
#[derive(Debug)]
pub struct Config {
    pub url: String,
    pub output_dir: PathBuf,
    pub preset: Preset,
    /// Playlist item cap; `None` downloads everything
    pub max_downloads: Option<u32>,
    pub mode: Mode,
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let url = cli.url.trim().to_string();
        ensure!(!url.is_empty(), "URL must not be empty");

        let Ok(quality) = cli.quality.parse::<Quality>();

        if !quality.is_valid_height() {
            tracing::warn!(
                quality = %cli.quality,
                "quality is neither best, worst, nor a pixel height; passing it to yt-dlp as is"
            );
        }

        let mode = cli.mode.resolve(&url);

        Ok(Self {
            url,
            output_dir: cli.output,
            preset: Preset {
                quality,
                audio_only: cli.audio_only,
            },
            max_downloads: cli.max_downloads.filter(|&n| n > 0),
            mode,
        })
    }
}
