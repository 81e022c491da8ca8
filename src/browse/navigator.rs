//! Collection selection loop

use super::session::{BrowseSession, Result};
use tracing::debug;

/// Synthetic last entry of the collection menu
pub const EXIT_LABEL: &str = "Exit";

impl BrowseSession<'_> {
    /// Run the session until the user picks `Exit`
    ///
    /// Collections are listed again on every pass so new ones show up
    /// without a restart.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError` if the store cannot be read or a prompt fails.
    pub fn run(&self) -> Result<()> {
        loop {
            let collections = self.store.collections()?;
            debug!(count = collections.len(), "listed collections");

            let mut items = collections.clone();
            items.push(EXIT_LABEL.to_string());

            let choice = self
                .input
                .prompt_select("Select a collection to browse or exit", &items)?;

            let Some(collection) = collections.get(choice) else {
                self.output.success("Goodbye!");
                return Ok(());
            };

            self.browse_collection(collection)?;
        }
    }
}
