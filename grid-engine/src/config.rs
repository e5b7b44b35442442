//! Grid configuration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::action::{ActionKind, ActionSet, ActionSlots, GridMode};
use crate::pagination::PaginationMode;
use crate::shell::SortIntent;

/// Page-change notification; receives the new 1-based page.
pub type PageChangeFn = Arc<dyn Fn(usize) + Send + Sync>;
/// Sort-intent notification. The caller decides whether to re-order.
pub type SortFn = Arc<dyn Fn(Option<&SortIntent>) + Send + Sync>;
/// Filter trigger; the engine never filters rows itself.
pub type FilterFn = Arc<dyn Fn() + Send + Sync>;
/// Navigate intent with an opaque path.
pub type NavigateFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Default number of rows per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Default empty-state message.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found";

/// Filter affordance label when the page gives none.
pub const DEFAULT_FILTER_LABEL: &str = "Filter";

/// Per-page configuration of the grid.
///
/// Every screen of the console is one of these over the shared engine.
///
/// # Examples
///
/// ```
/// use grid_engine::GridConfig;
/// use grid_engine::model::Record;
///
/// let config: GridConfig<Record> = GridConfig::new()
///     .title("Transfers")
///     .paginate(25)
///     .footer()
///     .actions()
///     .on_edit(|row: &Record| println!("edit {:?}", row.get("id")));
///
/// assert!(config.show_pagination);
/// assert_eq!(config.items_per_page, 25);
/// ```
pub struct GridConfig<R> {
    /// Title bar text.
    pub title: Option<String>,
    /// Cosmetic class name passed through to the view.
    pub class_name: Option<String>,
    /// Maximum number of body rows shown before the body scrolls.
    pub max_height: Option<u16>,
    /// Whether the grid windows rows and shows page controls.
    pub show_pagination: bool,
    /// Initial page.
    pub current_page: usize,
    /// Page size.
    pub items_per_page: usize,
    /// Who owns the page window.
    pub pagination: PaginationMode,
    /// Whether the aggregate footer renders.
    pub show_footer: bool,
    /// Caller-supplied totals shown instead of the per-page sum.
    pub footer_totals: HashMap<String, Decimal>,
    /// Enables the view/edit/delete action category.
    pub show_actions: bool,
    /// Pending mode: enables view/approve/reject.
    pub pending: bool,
    /// Documents mode: enables view/delete.
    pub documents: bool,
    /// Whether the column visibility selector renders.
    pub show_column_selector: bool,
    /// Label of the filter affordance.
    pub filter_label: Option<String>,
    /// Empty-state message.
    pub empty_message: String,
    pub on_page_change: Option<PageChangeFn>,
    pub on_sort: Option<SortFn>,
    pub on_filter: Option<FilterFn>,
    pub on_navigate: Option<NavigateFn>,
    /// Row action callbacks.
    pub actions: ActionSlots<R>,
}

impl<R> GridConfig<R> {
    /// Create a default configuration: no pagination, no footer, no actions.
    pub fn new() -> Self {
        Self {
            title: None,
            class_name: None,
            max_height: None,
            show_pagination: false,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            pagination: PaginationMode::Client,
            show_footer: false,
            footer_totals: HashMap::new(),
            show_actions: false,
            pending: false,
            documents: false,
            show_column_selector: false,
            filter_label: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            on_page_change: None,
            on_sort: None,
            on_filter: None,
            on_navigate: None,
            actions: ActionSlots::new(),
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the class name.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Cap the body height in rows.
    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = Some(rows);
        self
    }

    /// Enable pagination with the given page size.
    pub fn paginate(mut self, items_per_page: usize) -> Self {
        self.show_pagination = true;
        self.items_per_page = items_per_page;
        self
    }

    /// Start on a given page.
    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Use server-driven paging with the given hints.
    pub fn server(
        mut self,
        total_count: Option<usize>,
        has_next: bool,
        has_previous: bool,
    ) -> Self {
        self.pagination = PaginationMode::server(total_count, has_next, has_previous);
        self
    }

    /// Set the pagination mode explicitly.
    pub fn pagination(mut self, mode: PaginationMode) -> Self {
        self.pagination = mode;
        self
    }

    /// Show the aggregate footer.
    pub fn footer(mut self) -> Self {
        self.show_footer = true;
        self
    }

    /// Show a caller-computed total for `column_id` instead of the page sum.
    pub fn footer_total(mut self, column_id: impl Into<String>, total: Decimal) -> Self {
        self.footer_totals.insert(column_id.into(), total);
        self
    }

    /// Enable the view/edit/delete action category.
    pub fn actions(mut self) -> Self {
        self.show_actions = true;
        self
    }

    /// Pending mode.
    pub fn pending(mut self) -> Self {
        self.pending = true;
        self
    }

    /// Documents mode.
    pub fn documents(mut self) -> Self {
        self.documents = true;
        self
    }

    /// Show the column visibility selector.
    pub fn column_selector(mut self) -> Self {
        self.show_column_selector = true;
        self
    }

    /// Set the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Add a filter affordance that calls back into the page.
    pub fn filter<F>(mut self, label: impl Into<String>, on_filter: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.filter_label = Some(label.into());
        self.on_filter = Some(Arc::new(on_filter));
        self
    }

    /// Filter callback under the default label.
    pub fn on_filter<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_filter = Some(Arc::new(f));
        self
    }

    /// Page-change callback.
    pub fn on_page_change<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_page_change = Some(Arc::new(f));
        self
    }

    /// Sort-intent callback.
    pub fn on_sort<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&SortIntent>) + Send + Sync + 'static,
    {
        self.on_sort = Some(Arc::new(f));
        self
    }

    /// Navigate-intent callback.
    pub fn on_navigate<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_navigate = Some(Arc::new(f));
        self
    }

    /// Install the callback for a row action.
    pub fn on_action<F>(mut self, kind: ActionKind, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.actions.set(kind, Arc::new(f));
        self
    }

    /// View callback.
    pub fn on_view<F>(self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_action(ActionKind::View, f)
    }

    /// Edit callback.
    pub fn on_edit<F>(self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_action(ActionKind::Edit, f)
    }

    /// Delete callback. Confirmation is up to the caller.
    pub fn on_delete<F>(self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_action(ActionKind::Delete, f)
    }

    /// Approve callback.
    pub fn on_approve<F>(self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_action(ActionKind::Approve, f)
    }

    /// Reject callback.
    pub fn on_reject<F>(self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_action(ActionKind::Reject, f)
    }

    /// Presentation mode implied by the flags. Pending wins over documents.
    pub fn mode(&self) -> GridMode {
        if self.pending {
            GridMode::Pending
        } else if self.documents {
            GridMode::Documents
        } else {
            GridMode::Standard
        }
    }

    /// Action categories enabled by the flags.
    pub fn action_categories(&self) -> ActionSet {
        ActionSet::categories(self.show_actions, self.pending, self.documents)
    }
}

impl<R> Default for GridConfig<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for GridConfig<R> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            class_name: self.class_name.clone(),
            max_height: self.max_height,
            show_pagination: self.show_pagination,
            current_page: self.current_page,
            items_per_page: self.items_per_page,
            pagination: self.pagination.clone(),
            show_footer: self.show_footer,
            footer_totals: self.footer_totals.clone(),
            show_actions: self.show_actions,
            pending: self.pending,
            documents: self.documents,
            show_column_selector: self.show_column_selector,
            filter_label: self.filter_label.clone(),
            empty_message: self.empty_message.clone(),
            on_page_change: self.on_page_change.clone(),
            on_sort: self.on_sort.clone(),
            on_filter: self.on_filter.clone(),
            on_navigate: self.on_navigate.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<R> fmt::Debug for GridConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridConfig")
            .field("title", &self.title)
            .field("max_height", &self.max_height)
            .field("show_pagination", &self.show_pagination)
            .field("current_page", &self.current_page)
            .field("items_per_page", &self.items_per_page)
            .field("pagination", &self.pagination)
            .field("show_footer", &self.show_footer)
            .field("mode", &self.mode())
            .field("actions", &self.actions)
            .field("show_column_selector", &self.show_column_selector)
            .field("filter_label", &self.filter_label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_defaults() {
        let config: GridConfig<Record> = GridConfig::new();
        assert!(!config.show_pagination);
        assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.mode(), GridMode::Standard);
        assert!(config.action_categories().is_empty());
    }

    #[test]
    fn test_mode_precedence() {
        let config: GridConfig<Record> = GridConfig::new().documents().pending();
        assert_eq!(config.mode(), GridMode::Pending);
        assert!(config.action_categories().contains(ActionKind::Delete));
        assert!(config.action_categories().contains(ActionKind::Approve));
    }

    #[test]
    fn test_action_slots_installed() {
        let config: GridConfig<Record> = GridConfig::new().on_edit(|_| {}).on_reject(|_| {});
        assert_eq!(
            config.actions.supplied(),
            ActionSet::of(&[ActionKind::Edit, ActionKind::Reject])
        );
    }
}
