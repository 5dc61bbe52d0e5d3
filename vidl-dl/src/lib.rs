//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`preset`] - Format selectors and output templates for video and playlist downloads
//! - [`error`] - Error kinds for failed yt-dlp calls
//!
//! ## Quick Start
//!
//! ```no_run
//! use vidl_dl::Extractor;
//! use vidl_dl::dl::YtDlp;
//! use vidl_dl::preset::Preset;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = Preset::default().playlist(Path::new("downloads"), Some(10));
//! YtDlp.download(&["https://youtube.com/playlist?list=example"], &opts)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod preset;
pub mod traits;

pub use error::{Error, ErrorKind, Result};
pub use traits::Extractor;
