//! Pagination controller.
//!
//! Two mutually exclusive strategies, chosen once when the grid is built:
//!
//! - **Client**: the engine holds the full row store and slices the current
//!   page out of it.
//! - **Server**: the caller fetches one page at a time; the engine renders
//!   what it is given and only reports page-change intents.

use std::ops::Range;

/// Which side owns the page window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Slice the row store locally.
    #[default]
    Client,
    /// Rows already hold exactly one page; navigation follows the hints.
    Server {
        /// Total number of records across all pages, when known.
        total_count: Option<usize>,
        /// Whether a next page exists.
        has_next: bool,
        /// Whether a previous page exists.
        has_previous: bool,
    },
}

impl PaginationMode {
    /// Server mode with the given hints.
    pub fn server(total_count: Option<usize>, has_next: bool, has_previous: bool) -> Self {
        PaginationMode::Server {
            total_count,
            has_next,
            has_previous,
        }
    }

    /// Returns `true` for server mode.
    pub fn is_server(&self) -> bool {
        matches!(self, PaginationMode::Server { .. })
    }
}

/// Summary of the pagination controls for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// Current page (1-based).
    pub current_page: usize,
    /// Last page, when it can be known.
    pub last_page: Option<usize>,
    /// Whether "next" is enabled.
    pub has_next: bool,
    /// Whether "previous" is enabled.
    pub has_previous: bool,
    /// 1-based index of the first rendered record, 0 when nothing renders.
    pub first_item: usize,
    /// 1-based index of the last rendered record, 0 when nothing renders.
    pub last_item: usize,
    /// Total number of records, when known.
    pub total: Option<usize>,
}

/// Pagination state: current page and page size under a fixed mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    mode: PaginationMode,
    current_page: usize,
    items_per_page: usize,
}

impl Pagination {
    /// Create pagination on page 1.
    ///
    /// A page size of zero is coerced to one.
    pub fn new(mode: PaginationMode, items_per_page: usize) -> Self {
        if items_per_page == 0 {
            log::warn!("items_per_page must be positive; using 1");
        }
        Self {
            mode,
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Start on a given page (pages below 1 become 1).
    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page.max(1);
        self
    }

    /// The pagination mode.
    pub fn mode(&self) -> &PaginationMode {
        &self.mode
    }

    /// Returns `true` in server mode.
    pub fn is_server(&self) -> bool {
        self.mode.is_server()
    }

    /// Current page (1-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Replace the server hints. Ignored in client mode.
    pub fn set_server_hints(
        &mut self,
        total_count: Option<usize>,
        has_next: bool,
        has_previous: bool,
    ) -> bool {
        if !self.is_server() {
            log::warn!("Ignoring server pagination hints on a client-paginated grid");
            return false;
        }
        self.mode = PaginationMode::server(total_count, has_next, has_previous);
        true
    }

    /// Set the current page without validation (caller-driven server paging).
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Last page for `len` rows in the store.
    ///
    /// Client mode always knows it; server mode only when a total count was
    /// supplied. An empty store still has one (empty) page.
    pub fn last_page(&self, len: usize) -> Option<usize> {
        match &self.mode {
            PaginationMode::Client => Some(page_count(len, self.items_per_page)),
            PaginationMode::Server { total_count, .. } => {
                total_count.map(|total| page_count(total, self.items_per_page))
            }
        }
    }

    /// Range of the row store to render for `len` rows.
    pub fn window(&self, len: usize) -> Range<usize> {
        match self.mode {
            PaginationMode::Client => {
                let start = (self.current_page - 1)
                    .saturating_mul(self.items_per_page)
                    .min(len);
                let end = self
                    .current_page
                    .saturating_mul(self.items_per_page)
                    .min(len);
                start..end
            }
            PaginationMode::Server { .. } => 0..len,
        }
    }

    /// Whether "next" is enabled.
    pub fn can_next(&self, len: usize) -> bool {
        match self.mode {
            PaginationMode::Client => self.current_page < page_count(len, self.items_per_page),
            PaginationMode::Server { has_next, .. } => has_next,
        }
    }

    /// Whether "previous" is enabled.
    pub fn can_previous(&self) -> bool {
        match self.mode {
            PaginationMode::Client => self.current_page > 1,
            PaginationMode::Server { has_previous, .. } => has_previous,
        }
    }

    /// Move to `page`, bounded by the known page range.
    ///
    /// Returns the new page if it changed.
    pub fn go_to(&mut self, page: usize, len: usize) -> Option<usize> {
        let mut target = page.max(1);
        if let Some(last) = self.last_page(len) {
            target = target.min(last);
        }
        if target == self.current_page {
            return None;
        }
        self.current_page = target;
        Some(target)
    }

    /// Advance one page if "next" is enabled.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        if !self.can_next(len) {
            return None;
        }
        let target = self.current_page.saturating_add(1);
        // Server mode may not know the last page; trust the hint.
        if self.last_page(len).is_none() {
            if target == self.current_page {
                return None;
            }
            self.current_page = target;
            return Some(target);
        }
        self.go_to(target, len)
    }

    /// Go back one page if "previous" is enabled.
    pub fn previous(&mut self, len: usize) -> Option<usize> {
        if !self.can_previous() {
            return None;
        }
        self.go_to(self.current_page - 1, len)
    }

    /// Jump to the first page.
    pub fn first(&mut self, len: usize) -> Option<usize> {
        self.go_to(1, len)
    }

    /// Jump to the last page. Unknown in server mode without a total.
    pub fn last(&mut self, len: usize) -> Option<usize> {
        let last = self.last_page(len)?;
        self.go_to(last, len)
    }

    /// Clamp the current page to the known page range.
    ///
    /// In server mode the range comes from the total count; without one the
    /// page is left alone.
    pub fn clamp(&mut self, len: usize) -> Option<usize> {
        let last = self.last_page(len)?;
        if self.current_page > last {
            self.current_page = last;
            return Some(last);
        }
        None
    }

    /// Controls summary for `len` rows in the store.
    pub fn controls(&self, len: usize) -> PageControls {
        let (first_item, last_item, total) = match &self.mode {
            PaginationMode::Client => {
                let window = self.window(len);
                if window.is_empty() {
                    (0, 0, Some(len))
                } else {
                    (window.start + 1, window.end, Some(len))
                }
            }
            PaginationMode::Server { total_count, .. } => {
                let offset = (self.current_page - 1).saturating_mul(self.items_per_page);
                if len == 0 {
                    (0, 0, *total_count)
                } else {
                    (offset.saturating_add(1), offset.saturating_add(len), *total_count)
                }
            }
        };
        PageControls {
            current_page: self.current_page,
            last_page: self.last_page(len),
            has_next: self.can_next(len),
            has_previous: self.can_previous(),
            first_item,
            last_item,
            total,
        }
    }
}

/// Number of pages for `len` items; at least one.
pub fn page_count(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1)).max(1)
}
