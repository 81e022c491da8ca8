//! User input abstraction layer
//!
//! This module provides a backend-agnostic interface for the two prompts the
//! browser needs: choosing one of several labeled options, and entering a
//! line of text that may be checked by a validator.

use std::io;

/// Validation hook for text prompts
///
/// Returns `Err(message)` to reject the input; the message is shown inline
/// and the user is asked again.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// Reject empty input
///
/// # Errors
///
/// Returns an error message when `input` is empty.
pub fn non_empty(input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        Err("Field name cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use docbrowse::ui::input::{non_empty, DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
///
/// let items = vec!["users".to_string(), "Exit".to_string()];
/// let choice = input.prompt_select("Select a collection", &items).unwrap();
///
/// let field = input.prompt_text("Field", Some(non_empty)).unwrap();
/// ```
pub trait UserInput {
    /// Prompt user to select from a list
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Index of selected item
    /// * `Err(_)` - Input operation failed or was interrupted
    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Prompt user for a line of text
    ///
    /// Empty input is accepted unless `validator` rejects it.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Text accepted by the validator
    /// * `Err(_)` - Input operation failed or was interrupted
    fn prompt_text(&self, prompt: &str, validator: Option<Validator>) -> Result<String>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        use dialoguer::Select;

        if items.is_empty() {
            return Err(InputError::Invalid(format!("nothing to select for '{prompt}'")));
        }

        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_text(&self, prompt: &str, validator: Option<Validator>) -> Result<String> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);

        if let Some(validate) = validator {
            input = input.validate_with(move |text: &String| validate(text));
        }

        input
            .interact_text()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
