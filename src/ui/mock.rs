//! Scripted user input for testing

use super::input::{InputError, Result, UserInput, Validator};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Choose the option with this label
    Choose(String),
    /// Type this text
    Type(String),
}

/// User input that replays predetermined answers
///
/// Selections are made by label so scripts read like the session they
/// drive. Text rejected by a validator is recorded and the next answer is
/// used, like a user re-typing after an inline error. Running out of
/// answers behaves like interrupted input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: RefCell<VecDeque<Answer>>,
    prompts: RefCell<Vec<String>>,
    rejections: RefCell<Vec<String>>,
}

impl ScriptedInput {
    /// Create a scripted input from answers in the order they are asked for
    #[must_use]
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            ..Self::default()
        }
    }

    /// Prompts seen so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Validator messages produced by rejected text answers
    #[must_use]
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.borrow().clone()
    }

    /// Number of answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next_answer(&self) -> Result<Answer> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(InputError::Cancelled)
    }
}

/// Shorthand for [`Answer::Choose`]
#[must_use]
pub fn choose(label: &str) -> Answer {
    Answer::Choose(label.to_string())
}

/// Shorthand for [`Answer::Type`]
#[must_use]
pub fn type_text(text: &str) -> Answer {
    Answer::Type(text.to_string())
}

impl UserInput for ScriptedInput {
    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match self.next_answer()? {
            Answer::Choose(label) => items.iter().position(|item| *item == label).ok_or_else(|| {
                InputError::Invalid(format!("'{label}' is not offered by '{prompt}': {items:?}"))
            }),
            Answer::Type(text) => Err(InputError::Invalid(format!(
                "expected a selection for '{prompt}', got text '{text}'"
            ))),
        }
    }

    fn prompt_text(&self, prompt: &str, validator: Option<Validator>) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        loop {
            match self.next_answer()? {
                Answer::Type(text) => match validator.map_or(Ok(()), |validate| validate(&text)) {
                    Ok(()) => return Ok(text),
                    Err(message) => self.rejections.borrow_mut().push(message),
                },
                Answer::Choose(label) => {
                    return Err(InputError::Invalid(format!(
                        "expected text for '{prompt}', got selection '{label}'"
                    )));
                }
            }
        }
    }
}
