//! Column descriptors.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::cell::Cell;
use crate::error::GridError;
use crate::model::Value;

/// Custom cell renderer: receives the accessed value (if any) and the row.
pub type RenderFn<R> = Arc<dyn Fn(Option<&Value>, &R) -> Cell + Send + Sync>;

/// Formatter for a column's footer total.
pub type TotalFn = Arc<dyn Fn(Decimal) -> String + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column defines how one column is labeled, where its value comes from
/// and how it is rendered. Columns are pure data; the engine never mutates
/// them.
///
/// # Examples
///
/// ```
/// use grid_engine::column::{Alignment, Column};
/// use grid_engine::model::Record;
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::field("code", "Code").width(8),
///     Column::field("name", "Name").sortable(),
///     Column::field("amount", "Amount").sum().align(Alignment::Right),
/// ];
/// assert!(columns[2].show_sum);
/// ```
pub struct Column<R> {
    /// Stable identity, unique within a column set.
    pub id: String,
    /// Header text.
    pub header: String,
    /// Field read from the row when resolving the cell.
    pub accessor: Option<String>,
    /// Custom renderer; takes precedence over the raw accessed value.
    pub render: Option<RenderFn<R>>,
    /// Whether the header toggles a sort intent.
    pub sortable: bool,
    /// Whether the column is summed in the footer.
    pub show_sum: bool,
    /// Fixed width in terminal cells.
    pub width: Option<u16>,
    /// Hard floor on the resolved width.
    pub min_width: Option<u16>,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Formatter for the footer total.
    pub total_format: Option<TotalFn>,
}

impl<R> Column<R> {
    /// Create a column with no data source.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: None,
            render: None,
            sortable: false,
            show_sum: false,
            width: None,
            min_width: None,
            align: Alignment::Left,
            total_format: None,
        }
    }

    /// Create a column whose accessor is its own id.
    pub fn field(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        let accessor = id.clone();
        Self::new(id, header).accessor(accessor)
    }

    /// Set the field read from each row.
    pub fn accessor(mut self, field: impl Into<String>) -> Self {
        self.accessor = Some(field.into());
        self
    }

    /// Set a custom cell renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &R) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Set a shared cell renderer, such as one from [`crate::cell::format`].
    pub fn render_with(mut self, render: RenderFn<R>) -> Self {
        self.render = Some(render);
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sum this column in the footer.
    pub fn sum(mut self) -> Self {
        self.show_sum = true;
        self
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the footer total formatter.
    pub fn total_format(mut self, format: TotalFn) -> Self {
        self.total_format = Some(format);
        self
    }

    /// A column with neither accessor nor renderer always renders blank.
    pub fn is_blank(&self) -> bool {
        self.accessor.is_none() && self.render.is_none()
    }

    /// Formats a footer total for this column.
    pub fn format_total(&self, total: Decimal) -> String {
        match &self.total_format {
            Some(format) => format(total),
            None => total.normalize().to_string(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            render: self.render.clone(),
            sortable: self.sortable,
            show_sum: self.show_sum,
            width: self.width,
            min_width: self.min_width,
            align: self.align,
            total_format: self.total_format.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("sortable", &self.sortable)
            .field("show_sum", &self.show_sum)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("align", &self.align)
            .finish()
    }
}

/// Ordered set of column descriptors with unique ids.
pub struct ColumnSet<R> {
    columns: Vec<Column<R>>,
}

impl<R> ColumnSet<R> {
    /// Build a column set, dropping any column whose id was already seen.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(columns.len());
        for column in columns {
            if !seen.insert(column.id.clone()) {
                log::warn!("Dropping duplicate column '{}'", column.id);
                continue;
            }
            if column.is_blank() {
                log::debug!(
                    "Column '{}' has no accessor or renderer; cells render blank",
                    column.id
                );
            }
            kept.push(column);
        }
        Self { columns: kept }
    }

    /// Build a column set, rejecting duplicate ids.
    pub fn try_new(columns: Vec<Column<R>>) -> Result<Self, GridError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(GridError::duplicate_column(&column.id));
            }
        }
        Ok(Self::new(columns))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate columns in descriptor order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column<R>> {
        self.columns.iter()
    }

    /// Find a column by id.
    pub fn get(&self, id: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns `true` if a column with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All column ids in descriptor order.
    pub fn ids(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.id.as_str()).collect()
    }
}

impl<R> Clone for ColumnSet<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<R> Default for ColumnSet<R> {
    fn default() -> Self {
        Self { columns: Vec::new() }
    }
}

impl<'a, R> IntoIterator for &'a ColumnSet<R> {
    type Item = &'a Column<R>;
    type IntoIter = std::slice::Iter<'a, Column<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
