//! Render model produced by the grid shell.
//!
//! A `GridView` is a snapshot of everything a front end needs to paint the
//! grid. It holds no callbacks; interaction goes back through the shell.

use crate::action::Affordance;
use crate::cell::Cell;
use crate::column::Alignment;
use crate::model::RowKey;
use crate::pagination::PageControls;
use crate::shell::SortDirection;

/// Snapshot of the grid for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub title: Option<String>,
    pub class_name: Option<String>,
    /// Filter affordance label, when the page supplied a filter trigger.
    pub filter: Option<String>,
    /// Column selector entries, when the selector is enabled.
    pub column_selector: Option<Vec<ColumnToggle>>,
    /// One header per visible column.
    pub headers: Vec<HeaderCell>,
    /// Action affordances rendered on every row. Empty means no action column.
    pub actions: Vec<Affordance>,
    pub body: Body,
    /// Aggregate row, one cell per visible column.
    pub footer: Option<Vec<FooterCell>>,
    pub pagination: Option<PageControls>,
    pub scroll: ScrollRegion,
}

/// Header of a visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    /// Resolved width in terminal cells.
    pub width: u16,
    pub align: Alignment,
    pub sortable: bool,
    /// Direction of the active sort intent on this column.
    pub sort: Option<SortDirection>,
}

/// Entry of the column selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnToggle {
    pub id: String,
    pub label: String,
    pub visible: bool,
}

/// What the body area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The caller is fetching data.
    Loading,
    /// The caller reported a failure; the message is its own prose.
    Error(String),
    /// No rows to show.
    Empty(String),
    /// Rows of the current page window.
    Rows(Vec<RowView>),
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: RowKey,
    /// One cell per visible column.
    pub cells: Vec<Cell>,
}

/// One footer cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterCell {
    pub column_id: String,
    /// Formatted total, label, or empty.
    pub text: String,
}

/// Scroll position of the body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRegion {
    pub offset: usize,
    /// Body rows shown at once; `None` when unbounded.
    pub viewport: Option<usize>,
    /// Body rows in the window.
    pub content: usize,
}
