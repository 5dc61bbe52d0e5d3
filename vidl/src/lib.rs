//! vidl - download videos and playlists with yt-dlp.
//!
//! Arguments are parsed in [`cli`], resolved into a [`config::Config`], and
//! dispatched by [`mode::Mode`] to one of the operation modules.

pub mod cli;
pub mod config;
pub mod download;
pub mod formats;
pub mod info;
pub mod mode;
