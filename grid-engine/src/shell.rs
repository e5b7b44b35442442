//! Grid shell: composes pagination, visibility, aggregation, cell rendering
//! and row actions over a caller-owned row store.
//!
//! The caller owns the rows and the column descriptors and replaces them
//! wholesale when data changes. The shell owns only ephemeral UI state:
//! the page, the hidden columns, the sort intent and the scroll offset.

use std::ops::Range;

use rust_decimal::Decimal;

use crate::action::{ActionDispatcher, ActionKind, ActionSet};
use crate::aggregate::sum_column;
use crate::cell::{Cell, resolve_cell};
use crate::column::{Column, ColumnSet};
use crate::config::{DEFAULT_FILTER_LABEL, GridConfig};
use crate::error::DispatchError;
use crate::layout::resolve_width;
use crate::model::{GridRow, row_key};
use crate::pagination::{PageControls, Pagination};
use crate::scroll::ScrollState;
use crate::view::{Body, ColumnToggle, FooterCell, GridView, HeaderCell, RowView, ScrollRegion};
use crate::visibility::ColumnVisibility;

/// Label of the footer's first cell when that column is not summed.
pub const FOOTER_LABEL: &str = "Total";

/// Load state reported by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Ready,
    Loading,
    /// Fetch failed; the message is shown as-is.
    Failed(String),
}

impl LoadStatus {
    /// Map the fetch layer's `{ isLoading, error }` facets. Loading wins.
    pub fn from_fetch(is_loading: bool, error: Option<String>) -> Self {
        match (is_loading, error) {
            (true, _) => LoadStatus::Loading,
            (false, Some(message)) => LoadStatus::Failed(message),
            (false, None) => LoadStatus::Ready,
        }
    }
}

/// Sort direction of a sort intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A request to sort by a column. The engine never re-orders rows itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortIntent {
    pub column_id: String,
    pub direction: SortDirection,
}

/// The grid engine for one mounted grid.
pub struct GridShell<R> {
    columns: ColumnSet<R>,
    rows: Vec<R>,
    config: GridConfig<R>,
    pagination: Pagination,
    visibility: ColumnVisibility,
    actions: ActionDispatcher<R>,
    sort: Option<SortIntent>,
    scroll: ScrollState,
    status: LoadStatus,
}

impl<R: GridRow> GridShell<R> {
    /// Mount a grid.
    pub fn new(columns: ColumnSet<R>, rows: Vec<R>, config: GridConfig<R>) -> Self {
        let pagination = Pagination::new(config.pagination.clone(), config.items_per_page)
            .with_page(config.current_page);
        let actions = ActionDispatcher::new(
            config.actions.clone(),
            config.action_categories(),
            config.mode(),
        );
        let scroll = ScrollState::new(config.max_height.map(usize::from));

        let mut shell = Self {
            columns,
            rows,
            config,
            pagination,
            visibility: ColumnVisibility::new(),
            actions,
            sort: None,
            scroll,
            status: LoadStatus::Ready,
        };
        shell.clamp_page();
        shell
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &ColumnSet<R> {
        &self.columns
    }

    /// The full row store.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn config(&self) -> &GridConfig<R> {
        &self.config
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn sort(&self) -> Option<&SortIntent> {
        self.sort.as_ref()
    }

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Actions that render on each row.
    pub fn available_actions(&self) -> ActionSet {
        self.actions.available()
    }

    // -------------------------------------------------------------------------
    // Caller-driven updates
    // -------------------------------------------------------------------------

    /// Replace the row store. The current page is re-clamped to the known
    /// page range.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.clamp_page();
        let content = self.window().len();
        let offset = self.scroll.offset;
        self.scroll.scroll_to(offset, content);
    }

    /// Replace the rows of a server-paged grid along with the page they
    /// belong to and fresh navigation hints.
    pub fn set_server_page(
        &mut self,
        rows: Vec<R>,
        page: usize,
        total_count: Option<usize>,
        has_next: bool,
        has_previous: bool,
    ) {
        self.pagination.set_current_page(page);
        self.pagination
            .set_server_hints(total_count, has_next, has_previous);
        self.scroll.home();
        self.set_rows(rows);
    }

    /// Replace server-mode navigation hints. A known total re-clamps the
    /// current page.
    pub fn set_server_hints(
        &mut self,
        total_count: Option<usize>,
        has_next: bool,
        has_previous: bool,
    ) -> bool {
        let accepted = self
            .pagination
            .set_server_hints(total_count, has_next, has_previous);
        if accepted {
            self.clamp_page();
        }
        accepted
    }

    /// Replace the column set. Visibility and sort intent carry over for
    /// columns that still exist.
    pub fn set_columns(&mut self, columns: ColumnSet<R>) {
        self.columns = columns;
        self.visibility.retain(&self.columns);
        if let Some(sort) = &self.sort
            && !self.columns.contains(&sort.column_id)
        {
            log::debug!("Dropping sort intent on removed column '{}'", sort.column_id);
            self.sort = None;
        }
    }

    /// Report the fetch layer's status.
    pub fn set_status(&mut self, status: LoadStatus) {
        self.status = status;
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Range of the row store rendered on the current page.
    pub fn window(&self) -> Range<usize> {
        if self.config.show_pagination {
            self.pagination.window(self.rows.len())
        } else {
            0..self.rows.len()
        }
    }

    /// Rows rendered on the current page.
    pub fn visible_rows(&self) -> &[R] {
        &self.rows[self.window()]
    }

    /// Jump to a page. Returns `true` if the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !self.config.show_pagination {
            return false;
        }
        let changed = self.pagination.go_to(page, self.rows.len());
        self.page_changed(changed)
    }

    /// Next page. Returns `true` if the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.config.show_pagination {
            return false;
        }
        let changed = self.pagination.next(self.rows.len());
        self.page_changed(changed)
    }

    /// Previous page. Returns `true` if the page changed.
    pub fn previous_page(&mut self) -> bool {
        if !self.config.show_pagination {
            return false;
        }
        let changed = self.pagination.previous(self.rows.len());
        self.page_changed(changed)
    }

    /// First page. Returns `true` if the page changed.
    pub fn first_page(&mut self) -> bool {
        if !self.config.show_pagination {
            return false;
        }
        let changed = self.pagination.first(self.rows.len());
        self.page_changed(changed)
    }

    /// Last page, when it is known. Returns `true` if the page changed.
    pub fn last_page(&mut self) -> bool {
        if !self.config.show_pagination {
            return false;
        }
        let changed = self.pagination.last(self.rows.len());
        self.page_changed(changed)
    }

    /// Controls summary, when pagination is shown.
    pub fn page_controls(&self) -> Option<PageControls> {
        self.config
            .show_pagination
            .then(|| self.pagination.controls(self.rows.len()))
    }

    fn clamp_page(&mut self) {
        if !self.config.show_pagination {
            return;
        }
        if let Some(page) = self.pagination.clamp(self.rows.len()) {
            log::debug!(
                "Page out of range for {} rows; clamped to page {}",
                self.rows.len(),
                page
            );
            self.page_changed(Some(page));
        }
    }

    fn page_changed(&mut self, page: Option<usize>) -> bool {
        let Some(page) = page else {
            return false;
        };
        self.scroll.home();
        if let Some(on_page_change) = &self.config.on_page_change {
            on_page_change(page);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Visible columns in descriptor order.
    pub fn visible_columns(&self) -> Vec<&Column<R>> {
        self.columns
            .iter()
            .filter(|c| self.visibility.is_visible(&c.id))
            .collect()
    }

    /// Show or hide a column. Hiding the last visible column is refused.
    pub fn toggle_column(&mut self, id: &str) -> bool {
        self.visibility.toggle(id, &self.columns)
    }

    /// Hide a column. Hiding the last visible column is refused.
    pub fn hide_column(&mut self, id: &str) -> bool {
        self.visibility.hide(id, &self.columns)
    }

    /// Show every column.
    pub fn show_all_columns(&mut self) {
        self.visibility.reset();
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Toggle the sort intent for a sortable column.
    ///
    /// A new column sorts ascending; the same column flips direction. The
    /// rows are left alone; `on_sort` tells the caller what was asked for.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<SortIntent> {
        let column = self.columns.get(column_id)?;
        if !column.sortable {
            return None;
        }
        let direction = match &self.sort {
            Some(sort) if sort.column_id == column_id => sort.direction.flip(),
            _ => SortDirection::Ascending,
        };
        let intent = SortIntent {
            column_id: column_id.to_string(),
            direction,
        };
        self.sort = Some(intent.clone());
        if let Some(on_sort) = &self.config.on_sort {
            on_sort(Some(&intent));
        }
        Some(intent)
    }

    /// Clear the sort intent.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some()
            && let Some(on_sort) = &self.config.on_sort
        {
            on_sort(None);
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Fire the filter affordance. Returns `false` when the page has none.
    pub fn trigger_filter(&self) -> bool {
        match &self.config.on_filter {
            Some(on_filter) => {
                on_filter();
                true
            }
            None => false,
        }
    }

    /// Forward a row action for the row at `index` of the current window.
    pub fn dispatch(&self, index: usize, kind: ActionKind) -> Result<(), DispatchError> {
        let row = self.window_row(index)?;
        log::debug!("Dispatching {} for row {}", kind, index);
        self.actions.dispatch(kind, row)
    }

    /// Activate a cell. Link cells emit a navigate intent and return its
    /// target; other cells are inert.
    pub fn activate_cell(
        &self,
        index: usize,
        column_id: &str,
    ) -> Result<Option<String>, DispatchError> {
        let row = self.window_row(index)?;
        let column = self
            .columns
            .get(column_id)
            .filter(|c| self.visibility.is_visible(&c.id))
            .ok_or_else(|| DispatchError::UnknownColumn {
                id: column_id.to_string(),
            })?;

        match resolve_cell(column, row) {
            Cell::Link { target, .. } => {
                if let Some(on_navigate) = &self.config.on_navigate {
                    on_navigate(&target);
                }
                Ok(Some(target))
            }
            _ => Ok(None),
        }
    }

    /// Scroll the body. Returns `true` if the offset moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let content = self.window().len();
        self.scroll.scroll_by(delta, content)
    }

    fn window_row(&self, index: usize) -> Result<&R, DispatchError> {
        let rows = self.visible_rows();
        rows.get(index).ok_or(DispatchError::RowOutOfRange {
            index,
            len: rows.len(),
        })
    }

    // -------------------------------------------------------------------------
    // Aggregation
    // -------------------------------------------------------------------------

    /// Footer total for a summable column over the current window, or the
    /// caller-supplied total when one was configured.
    pub fn column_total(&self, column_id: &str) -> Option<Decimal> {
        let column = self.columns.get(column_id).filter(|c| c.show_sum)?;
        Some(self.total_for(column))
    }

    fn total_for(&self, column: &Column<R>) -> Decimal {
        match self.config.footer_totals.get(&column.id) {
            Some(total) => *total,
            None => sum_column(column, self.visible_rows()),
        }
    }

    /// Footer cells for the visible columns, when the footer is shown and
    /// at least one visible column is summed.
    pub fn footer(&self) -> Option<Vec<FooterCell>> {
        if !self.config.show_footer {
            return None;
        }
        let columns = self.visible_columns();
        if !columns.iter().any(|c| c.show_sum) {
            return None;
        }
        let cells = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let text = if column.show_sum {
                    column.format_total(self.total_for(column))
                } else if i == 0 {
                    FOOTER_LABEL.to_string()
                } else {
                    String::new()
                };
                FooterCell {
                    column_id: column.id.clone(),
                    text,
                }
            })
            .collect();
        Some(cells)
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Snapshot the grid for rendering.
    pub fn view(&self) -> GridView {
        let columns = self.visible_columns();
        let window = self.window();

        let body = match &self.status {
            LoadStatus::Loading => Body::Loading,
            LoadStatus::Failed(message) => Body::Error(message.clone()),
            LoadStatus::Ready if window.is_empty() => {
                Body::Empty(self.config.empty_message.clone())
            }
            LoadStatus::Ready => Body::Rows(
                self.rows[window.clone()]
                    .iter()
                    .enumerate()
                    .map(|(i, row)| RowView {
                        key: row_key(row, window.start + i),
                        cells: columns.iter().map(|c| resolve_cell(c, row)).collect(),
                    })
                    .collect(),
            ),
        };

        let footer = match &body {
            Body::Rows(_) | Body::Empty(_) => self.footer(),
            _ => None,
        };

        let headers = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let header_text = if column.sortable {
                    format!("{} ▲", column.header)
                } else {
                    column.header.clone()
                };
                let cell_labels: Vec<&str> = match &body {
                    Body::Rows(rows) => rows.iter().map(|r| r.cells[i].label()).collect(),
                    _ => Vec::new(),
                };
                let footer_text = footer.as_ref().map(|f| f[i].text.as_str());
                let width = resolve_width(
                    column.width,
                    column.min_width,
                    std::iter::once(header_text.as_str())
                        .chain(cell_labels)
                        .chain(footer_text),
                );
                HeaderCell {
                    id: column.id.clone(),
                    label: column.header.clone(),
                    width,
                    align: column.align,
                    sortable: column.sortable,
                    sort: self
                        .sort
                        .as_ref()
                        .filter(|s| s.column_id == column.id)
                        .map(|s| s.direction),
                }
            })
            .collect();

        let column_selector = self.config.show_column_selector.then(|| {
            self.columns
                .iter()
                .map(|c| ColumnToggle {
                    id: c.id.clone(),
                    label: c.header.clone(),
                    visible: self.visibility.is_visible(&c.id),
                })
                .collect()
        });

        let content = match &body {
            Body::Rows(rows) => rows.len(),
            _ => 0,
        };
        let scroll = ScrollRegion {
            offset: self.scroll.visible_range(content).start,
            viewport: self.scroll.viewport,
            content,
        };

        GridView {
            title: self.config.title.clone(),
            class_name: self.config.class_name.clone(),
            filter: self.config.on_filter.as_ref().map(|_| {
                self.config
                    .filter_label
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FILTER_LABEL.to_string())
            }),
            column_selector,
            headers,
            actions: self.actions.affordances(),
            body,
            footer,
            pagination: self.page_controls(),
            scroll,
        }
    }
}
