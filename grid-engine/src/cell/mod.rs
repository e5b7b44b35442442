//! Cell content and value resolution.

pub mod format;

use crate::column::Column;
use crate::model::{GridRow, Value};

/// Semantic color of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Resolved content of one (row, column) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing to show.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// Status badge.
    Badge { label: String, tone: Tone },
    /// Clickable cell; activating it emits a navigate intent to `target`.
    Link { label: String, target: String },
}

impl Cell {
    /// Create a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// Create a badge cell.
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Create a link cell.
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Cell::Link {
            label: label.into(),
            target: target.into(),
        }
    }

    /// The visible text of this cell.
    pub fn label(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Text(text) => text,
            Cell::Badge { label, .. } | Cell::Link { label, .. } => label,
        }
    }

    /// Returns `true` for empty cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

/// Raw value of `column` in `row`, read through the accessor.
pub fn resolve_value<R: GridRow>(column: &Column<R>, row: &R) -> Option<Value> {
    column.accessor.as_deref().and_then(|field| row.field(field))
}

/// Resolve the cell for `column` in `row`.
///
/// A custom renderer wins and its output is used verbatim. Otherwise the
/// accessed value is shown as text, with null and missing values rendering
/// empty. A column with neither renders empty.
pub fn resolve_cell<R: GridRow>(column: &Column<R>, row: &R) -> Cell {
    let value = resolve_value(column, row);
    if let Some(render) = &column.render {
        return render(value.as_ref(), row);
    }
    match value {
        Some(value) if !value.is_null() => Cell::Text(value.to_string()),
        _ => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn row() -> Record {
        Record::new()
            .set("id", 1i64)
            .set("amt", 100i64)
            .set("note", Value::Null)
    }

    #[test]
    fn test_accessor_value() {
        let column: Column<Record> = Column::field("amt", "Amount");
        assert_eq!(resolve_cell(&column, &row()), Cell::text("100"));
    }

    #[test]
    fn test_null_and_missing_are_empty() {
        let note: Column<Record> = Column::field("note", "Note");
        let missing: Column<Record> = Column::field("gone", "Gone");
        assert_eq!(resolve_cell(&note, &row()), Cell::Empty);
        assert_eq!(resolve_cell(&missing, &row()), Cell::Empty);
    }

    #[test]
    fn test_render_takes_precedence() {
        let column: Column<Record> = Column::field("amt", "Amount").render(|value, row: &Record| {
            let id = row.get("id").map(ToString::to_string).unwrap_or_default();
            Cell::text(format!("{}:{}", id, value.map(ToString::to_string).unwrap_or_default()))
        });
        assert_eq!(resolve_cell(&column, &row()), Cell::text("1:100"));
    }

    #[test]
    fn test_render_without_accessor_gets_none() {
        let column: Column<Record> = Column::new("derived", "Derived")
            .render(|value, _| Cell::text(if value.is_none() { "none" } else { "some" }));
        assert_eq!(resolve_cell(&column, &row()), Cell::text("none"));
    }

    #[test]
    fn test_blank_column_renders_empty() {
        let column: Column<Record> = Column::new("broken", "Broken");
        assert_eq!(resolve_cell(&column, &row()), Cell::Empty);
    }
}
