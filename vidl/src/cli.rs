//! CLI argument definitions using clap.

use crate::config::Config;
use crate::mode::{Mode, ModeArgs};
use clap::Parser;
use color_eyre::Section;
use eyre::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use vidl_dl::Extractor;
use vidl_dl::dl::YtDlp;

#[derive(Debug, Parser)]
#[command(name = "vidl")]
#[command(about = "Video/playlist downloader built on yt-dlp")]
#[command(version)]
pub struct Cli {
    /// Video or playlist URL
    pub url: String,

    /// Output directory
    #[arg(short, long, default_value = "downloads")]
    pub output: PathBuf,

    /// Video quality: best, worst, or height (e.g., 720, 1080)
    #[arg(short, long, default_value = "best")]
    pub quality: String,

    /// Download audio only
    #[arg(short, long)]
    pub audio_only: bool,

    /// Maximum number of videos to download from playlist (0 = no limit)
    #[arg(short, long)]
    pub max_downloads: Option<u32>,

    #[command(flatten)]
    pub mode: ModeArgs,
}

/// Result of a run, mapped to the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    DownloadFailed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::DownloadFailed => ExitCode::FAILURE,
        }
    }
}

/// Parse-to-exit entry point used by the binary.
pub fn run_cli(cli: Cli) -> Result<ExitCode> {
    tracing::debug!(?cli, "parsed arguments");

    let config = Config::try_from(cli)?;
    let mut stdout = std::io::stdout().lock();

    run(config, &YtDlp, &mut stdout).map(ExitCode::from)
}

/// Execute a resolved config against `extractor` - separated for testing.
///
/// Info and format listing always succeed: their failures are printed, not
/// propagated. Only downloads can yield [`Outcome::DownloadFailed`].
pub fn run(config: Config, extractor: &impl Extractor, out: &mut impl Write) -> Result<Outcome> {
    tracing::debug!(?config, "resolved config");

    let Config {
        url,
        output_dir,
        preset,
        max_downloads,
        mode,
    } = config;

    std::fs::create_dir_all(&output_dir)
        .wrap_err_with(|| format!("failed to create output directory {:?}", output_dir.display()))
        .with_suggestion(|| "pass a writable directory with --output")?;

    let success = match mode {
        Mode::ListFormats => {
            crate::formats::execute(&url, extractor, out)?;
            return Ok(Outcome::Success);
        }
        Mode::Info => {
            crate::info::execute(&url, extractor, out)?;
            return Ok(Outcome::Success);
        }
        Mode::Single { from_playlist_url } => {
            if from_playlist_url {
                writeln!(out, "Downloading single video from playlist URL...")?;
            } else {
                writeln!(out, "Downloading single video...")?;
            }
            crate::download::single(&url, &preset, &output_dir, extractor, out)?
        }
        Mode::Playlist => {
            writeln!(out, "Downloading playlist...")?;
            crate::download::playlist(&url, &preset, &output_dir, max_downloads, extractor, out)?
        }
    };

    if success {
        writeln!(out, "Files saved to: {}", output_dir.display())?;
        Ok(Outcome::Success)
    } else {
        writeln!(out, "Download failed!")?;
        Ok(Outcome::DownloadFailed)
    }
}
