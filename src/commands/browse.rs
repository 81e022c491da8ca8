//! Browse command - interactive collection browser

use crate::{
    DocbrowseError,
    browse::{BrowseSession, SessionSettings},
    config::{BrowseOptions, Settings},
    db::DocumentStore,
    ui::{DialoguerInput, OutputWriter, StdoutWriter, UserInput},
};

type Result<T> = std::result::Result<T, DocbrowseError>;

/// Execute the browse command on the terminal
///
/// # Errors
/// Returns an error if a database read or a prompt fails
pub fn execute(store: &dyn DocumentStore, settings: &Settings, options: BrowseOptions) -> Result<()> {
    let input = DialoguerInput::new();
    let output = StdoutWriter::new();
    run(store, &input, &output, settings, options)
}

/// Run a browse session with explicit prompt and output backends
///
/// # Errors
/// Returns an error if a database read or a prompt fails
pub fn run(
    store: &dyn DocumentStore,
    input: &dyn UserInput,
    output: &dyn OutputWriter,
    settings: &Settings,
    options: BrowseOptions,
) -> Result<()> {
    let session_settings =
        SessionSettings::new(options).with_empty_pause(settings.empty_preview_pause());
    tracing::debug!(?session_settings, "starting browse session");

    BrowseSession::new(store, input, output, session_settings).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::BrowseError;
    use crate::db::{Document, MemoryStore};
    use crate::ui::BufferWriter;
    use crate::ui::mock::{ScriptedInput, choose, type_text};
    use serde_json::json;

    fn quiet_settings() -> Settings {
        Settings {
            empty_preview_pause_ms: 0,
            ..Settings::default()
        }
    }

    #[test]
    fn test_page_size_option_is_used() {
        let documents = (0..4)
            .map(|i| Document::from_json(format!("d{i}"), json!({ "i": i })).unwrap())
            .collect();
        let store = MemoryStore::new().with_documents("items", documents);
        let input = ScriptedInput::new(vec![
            choose("items"),
            choose("Column Format"),
            choose("Back to Collections"),
            choose("Exit"),
        ]);
        let output = BufferWriter::new();

        run(
            &store,
            &input,
            &output,
            &quiet_settings(),
            BrowseOptions::new(false, 3).unwrap(),
        )
        .unwrap();

        assert!(output.contains("Document ID: d2"));
        assert!(!output.contains("Document ID: d3"));
    }

    #[test]
    fn test_empty_preview_goes_back_to_the_page() {
        let store = MemoryStore::new()
            .with_documents("items", vec![Document::from_json("d0", json!({"i": 0})).unwrap()]);
        let input = ScriptedInput::new(vec![
            choose("items"),
            choose("Table Format"),
            choose("New Search Condition"),
            type_text("i"),
            choose(">"),
            type_text("10"),
            choose("Back to Collections"),
            choose("Exit"),
        ]);
        let output = BufferWriter::new();

        run(&store, &input, &output, &quiet_settings(), BrowseOptions::default()).unwrap();
        assert!(output.contains("No documents found."));
        assert_eq!(output.count("Page 1 of collection 'items'"), 2);
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_prompt_failure_is_reported() {
        let store = MemoryStore::new();
        let input = ScriptedInput::new(vec![]);
        let output = BufferWriter::new();

        let result = run(&store, &input, &output, &quiet_settings(), BrowseOptions::default());
        assert!(matches!(result, Err(DocbrowseError::Browse(BrowseError::Input(_)))));
    }
}
