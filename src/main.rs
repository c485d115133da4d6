//! Media Viewer - view one file at a time with live presentation controls
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use viewer_app::config::{self, StartupSettings};

/// Media Viewer - view one file at a time with live presentation controls
#[derive(Parser, Debug)]
#[command(name = "viewer")]
#[command(about = "A single-file media and document viewer", long_about = None)]
struct Args {
    /// Files to offer; the one at --index is shown
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Which of FILE to show
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Load a page by address instead of a file
    #[arg(long, conflicts_with = "files")]
    url: Option<String>,

    /// Start with the control panels visible
    #[arg(long)]
    controls: bool,

    /// Start with forced dark presentation
    #[arg(long)]
    force_dark: bool,

    /// Start with the reversed layout
    #[arg(long)]
    reverse: bool,

    /// Load large files without asking
    #[arg(long, short = 'y')]
    assume_yes: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    viewer_core::logging::init()?;

    let settings = match config::default_config_dir() {
        Some(dir) => {
            if let Err(e) = config::init_config_dir(&dir) {
                warn!("Could not create default config in {}: {}", dir.display(), e);
            }
            config::load_settings(&dir)
        }
        None => {
            warn!("No config directory on this platform, using defaults");
            Default::default()
        }
    };

    let options = media_viewer::HeadlessOptions {
        startup: StartupSettings {
            controls: args.controls,
            force_dark: args.force_dark,
            reverse: args.reverse,
        },
        files: args.files,
        index: args.index,
        url: args.url,
        assume_yes: args.assume_yes,
    };

    media_viewer::run_headless(settings, options).await?;
    Ok(())
}
