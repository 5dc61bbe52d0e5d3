//! vidl CLI - video and playlist downloader

use clap::Parser;
use eyre::Result;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vidl::cli::{Cli, run_cli};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run_cli(Cli::parse())
}
