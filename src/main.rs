//! Docbrowse CLI application entry point
//!
//! Opens the configured document database and starts the interactive
//! browser on the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse with defaults (10 documents per page)
//! docbrowse
//! docbrowse browse
//!
//! # Larger pages
//! docbrowse browse --page-size 25
//! ```
//!
//! # Configuration
//!
//! Settings are read from `~/.config/docbrowse/config.toml` (on Linux) and
//! `./docbrowse.toml`, both optional. Diagnostics go to stderr at the
//! configured `log_level` so they stay out of the interactive output.

use docbrowse::{
    DocbrowseError,
    cli::Cli,
    commands,
    config::Settings,
    db::SledStore,
    ui::{OutputWriter, StdoutWriter},
};
use tracing::info;

type Result<T> = std::result::Result<T, DocbrowseError>;

fn init_logging(settings: &Settings) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level()?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let settings = Settings::load()?;
    init_logging(&settings)?;

    let options = cli.get_command().browse_options();
    info!(database = %settings.database.display(), "opening document store");
    let store = SledStore::open(&settings.database)?;

    commands::browse(&store, &settings, options)
}

fn main() {
    if let Err(e) = run() {
        StdoutWriter::new().error(&e.to_string());
        std::process::exit(1);
    }
}
