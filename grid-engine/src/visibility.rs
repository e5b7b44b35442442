//! Column visibility selector state.

use std::collections::HashSet;

use crate::column::ColumnSet;

/// Tracks which columns the user has hidden.
///
/// Visibility is a projection over the column set: it never reorders or
/// edits descriptors, and at least one column always stays visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: HashSet<String>,
}

impl ColumnVisibility {
    /// Everything visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` unless `id` was hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }

    /// Visible column ids in descriptor order.
    pub fn visible_ids<'a, R>(&self, columns: &'a ColumnSet<R>) -> Vec<&'a str> {
        columns
            .iter()
            .map(|c| c.id.as_str())
            .filter(|id| self.is_visible(id))
            .collect()
    }

    /// Number of visible columns.
    pub fn visible_count<R>(&self, columns: &ColumnSet<R>) -> usize {
        columns.iter().filter(|c| self.is_visible(&c.id)).count()
    }

    /// Hide a column. Refuses unknown ids and the last visible column.
    pub fn hide<R>(&mut self, id: &str, columns: &ColumnSet<R>) -> bool {
        if !columns.contains(id) || !self.is_visible(id) {
            return false;
        }
        if self.visible_count(columns) <= 1 {
            log::debug!("Refusing to hide '{}': it is the last visible column", id);
            return false;
        }
        self.hidden.insert(id.to_string())
    }

    /// Show a hidden column.
    pub fn show(&mut self, id: &str) -> bool {
        self.hidden.remove(id)
    }

    /// Flip a column's visibility. Returns `true` if anything changed.
    pub fn toggle<R>(&mut self, id: &str, columns: &ColumnSet<R>) -> bool {
        if self.is_visible(id) {
            self.hide(id, columns)
        } else {
            self.show(id)
        }
    }

    /// Make every column visible again.
    pub fn reset(&mut self) {
        self.hidden.clear();
    }

    /// Re-apply to a replacement column set.
    ///
    /// Hidden ids that no longer exist are forgotten; new columns start
    /// visible. If nothing would be visible, the first column is shown.
    pub fn retain<R>(&mut self, columns: &ColumnSet<R>) {
        self.hidden.retain(|id| columns.contains(id));
        if !columns.is_empty()
            && self.visible_count(columns) == 0
            && let Some(first) = columns.iter().next()
        {
            self.hidden.remove(&first.id);
        }
    }
}
