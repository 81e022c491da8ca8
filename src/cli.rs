//! Command-line interface definitions and parsing
//!
//! docbrowse has a single command, `browse`, which is also what runs when
//! no subcommand is given.
//!
//! # Examples
//!
//! ```
//! use docbrowse::cli::{Cli, Commands};
//!
//! let cli = Cli::try_parse_from_args(["docbrowse", "browse", "-p", "25"]).unwrap();
//! let Commands::Browse { page_size, .. } = cli.get_command();
//! assert_eq!(page_size, 25);
//! ```

use crate::config::{BrowseOptions, DEFAULT_PAGE_SIZE};
use clap::{Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "docbrowse")]
#[command(about = "Browse the collections of a document database", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse collections interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Render single documents as a table
        #[arg(short = 't', long = "table")]
        table: bool,

        /// Number of documents per page
        #[arg(
            short = 'p',
            long = "page-size",
            value_name = "N",
            default_value_t = DEFAULT_PAGE_SIZE,
            value_parser = parse_page_size
        )]
        page_size: usize,
    },
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if size == 0 {
        return Err("page size must be at least 1".to_string());
    }
    Ok(size)
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list
    ///
    /// # Errors
    ///
    /// Returns a `clap::Error` describing the first invalid argument.
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            table: false,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }
}

impl Commands {
    /// Options threaded into the browse session
    #[must_use]
    pub const fn browse_options(&self) -> BrowseOptions {
        match *self {
            Self::Browse { table, page_size } => BrowseOptions { table, page_size },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from_args(std::iter::once("docbrowse").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.get_command().browse_options(), BrowseOptions::default());
    }

    #[test]
    fn test_browse_defaults() {
        let cli = parse(&["browse"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                table: false,
                page_size: 10
            }
        );
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["browse", "-t", "-p", "3"]).unwrap();
        let options = cli.get_command().browse_options();
        assert!(options.table);
        assert_eq!(options.page_size, 3);
    }

    #[test]
    fn test_long_flags_and_alias() {
        let cli = parse(&["b", "--table", "--page-size", "50"]).unwrap();
        assert_eq!(
            cli.get_command().browse_options(),
            BrowseOptions::new(true, 50).unwrap()
        );
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(parse(&["browse", "-p", "0"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_page_size() {
        assert!(parse(&["browse", "--page-size", "many"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(parse(&["tag", "x"]).is_err());
    }
}
