use std::path::PathBuf;

use clap::Parser;

/// autoheight — show web content in a view that grows to fit it.
#[derive(Parser, Debug, Default)]
#[command(name = "autoheight", version, about)]
pub struct Args {
    /// URL to load.
    #[arg(long, conflicts_with = "html_file")]
    pub url: Option<String>,

    /// Local HTML file to render inline.
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// Fixed view width in logical pixels (default: window width).
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial height, and the fixed height with --no-auto-height.
    #[arg(long)]
    pub default_height: Option<u32>,

    /// Keep the view at its default height.
    #[arg(long)]
    pub no_auto_height: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `autoheight=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
