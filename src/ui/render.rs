//! Document rendering
//!
//! Formats already-fetched documents either as a table (one row per
//! document, columns taken from the first document) or as key/value blocks.
//! Rendering is pure: functions return the text and callers decide where
//! it goes.

use crate::db::Document;
use std::fmt;

/// How a page of documents is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    /// One row per document
    #[default]
    Table,
    /// `key: value` lines per document
    Column,
}

impl DisplayFormat {
    /// Formats in prompt order
    pub const ALL: [Self; 2] = [Self::Table, Self::Column];

    /// Label offered to the user
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Table => "Table Format",
            Self::Column => "Column Format",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Render a batch of documents in the chosen format
#[must_use]
pub fn render_documents(documents: &[Document], format: DisplayFormat) -> String {
    if documents.is_empty() {
        return "No documents found.".to_string();
    }
    match format {
        DisplayFormat::Table => table(documents),
        DisplayFormat::Column => key_value(documents),
    }
}

/// Render a single document, as a one-row table or a key/value block
#[must_use]
pub fn render_document(document: &Document, as_table: bool) -> String {
    let single = std::slice::from_ref(document);
    if as_table { table(single) } else { key_value(single) }
}

/// Upper-case a header and turn underscores into spaces
fn format_header(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

fn table(documents: &[Document]) -> String {
    let Some(first) = documents.first() else {
        return String::new();
    };

    let keys: Vec<&String> = first.fields.keys().collect();
    let headers: Vec<String> = keys.iter().map(|k| format_header(k)).collect();
    let rows: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| {
            keys.iter()
                .map(|key| doc.fields.get(*key).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("|");

    let mut lines = vec![format_row(&headers, &widths), separator.clone()];
    for row in &rows {
        lines.push(format_row(row, &widths));
        lines.push(separator.clone());
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {cell:<width$} "))
        .collect::<Vec<_>>()
        .join(" ")
}

fn key_value(documents: &[Document]) -> String {
    let mut out = String::new();
    for doc in documents {
        out.push_str(&format!("\nDocument ID: {}\n", doc.id));
        for (key, value) in &doc.fields {
            out.push_str(&format!("  {key}: {value}\n"));
        }
    }
    out
}
