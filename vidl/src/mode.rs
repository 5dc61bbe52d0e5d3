//! URL classification and mode dispatch.

use url::Url;

/// Mode-selecting flags.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ModeArgs {
    /// Force playlist download
    #[arg(short, long)]
    pub playlist: bool,

    /// Download single video from playlist URL
    #[arg(short, long)]
    pub single: bool,

    /// List available formats without downloading
    #[arg(short, long)]
    pub list_formats: bool,

    /// Show video information without downloading
    #[arg(short, long)]
    pub info: bool,
}

/// What a run does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print the format table
    ListFormats,
    /// Print metadata
    Info,
    /// Download one video; `from_playlist_url` when `--single` overrode a playlist URL
    Single { from_playlist_url: bool },
    /// Download a playlist
    Playlist,
}

impl ModeArgs {
    /// Pick the mode. Precedence: list-formats, info, single, playlist flag or
    /// playlist URL, single video.
    pub fn resolve(&self, url: &str) -> Mode {
        let playlist_url = is_playlist(url);

        if self.list_formats {
            Mode::ListFormats
        } else if self.info {
            Mode::Info
        } else if self.single && playlist_url {
            Mode::Single {
                from_playlist_url: true,
            }
        } else if self.single {
            Mode::Single {
                from_playlist_url: false,
            }
        } else if self.playlist || playlist_url {
            Mode::Playlist
        } else {
            Mode::Single {
                from_playlist_url: false,
            }
        }
    }
}

/// Whether `url` looks like a playlist: query contains `playlist` or path
/// contains `/playlist`.
///
/// Substring heuristic only. Inputs that are not absolute URLs are split at
/// `?` by hand. Absolute URLs are matched after parsing, so dot segments are
/// already resolved: `/playlist/../watch` counts as `/watch`.
pub fn is_playlist(url: &str) -> bool {
    let looks_like_playlist = |path: &str, query: &str| {
        query.contains("playlist") || path.contains("/playlist")
    };

    match Url::parse(url) {
        Ok(parsed) => looks_like_playlist(parsed.path(), parsed.query().unwrap_or_default()),
        Err(e) => {
            tracing::debug!(url, error = %e, "not an absolute URL, splitting manually");
            let url = url.split_once('#').map_or(url, |(head, _)| head);
            let (path, query) = url.split_once('?').unwrap_or((url, ""));
            looks_like_playlist(path, query)
        }
    }
}
