//! Renderable panel structure
//!
//! A [`View`] is the pure output of rendering a component: a titled table
//! whose cells are plain text or interactive controls. It is independent of
//! any rendering technology; [`crate::host::html`] turns it into markup and
//! [`serde`] turns it into JSON for a client-side renderer.

use serde::{Deserialize, Serialize};

/// A rendered panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Key of the component that produced the view (tab id)
    pub component: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl View {
    /// Find a row by the record id it represents
    pub fn row(&self, key: u32) -> Option<&Row> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Text of the cell under `column` for the row `key`
    pub fn cell_text(&self, key: u32, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.row(key)?.cells.get(index).map(Cell::text)
    }
}

/// A table row keyed by record id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub key: u32,
    pub cells: Vec<Cell>,
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    /// Clicking dispatches [`UiEvent::Click`](crate::host::UiEvent)
    Button { label: String },
    /// Changing dispatches [`UiEvent::Select`](crate::host::UiEvent)
    Select { value: String, options: Vec<String> },
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    /// The visible text of the cell
    pub fn text(&self) -> &str {
        match self {
            Cell::Text { text } => text,
            Cell::Button { label } => label,
            Cell::Select { value, .. } => value,
        }
    }
}
