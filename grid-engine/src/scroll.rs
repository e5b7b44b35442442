//! Scroll state for the height-constrained body region.

use std::ops::Range;

/// Vertical scroll state of the grid body.
///
/// `viewport` is the maximum number of body lines shown at once; `None`
/// means the body is unbounded and never scrolls. Content length is passed
/// in by the shell since it changes with every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Current scroll offset (rows from top).
    pub offset: usize,
    /// Viewport height in rows.
    pub viewport: Option<usize>,
}

impl ScrollState {
    /// Create a scroll state with an optional viewport.
    pub fn new(viewport: Option<usize>) -> Self {
        Self {
            offset: 0,
            viewport: viewport.map(|v| v.max(1)),
        }
    }

    /// Maximum scroll offset for `content` rows.
    pub fn max_offset(&self, content: usize) -> usize {
        match self.viewport {
            Some(viewport) => content.saturating_sub(viewport),
            None => 0,
        }
    }

    /// Whether content exceeds the viewport.
    pub fn can_scroll(&self, content: usize) -> bool {
        self.max_offset(content) > 0
    }

    /// Scroll by a relative amount. Returns `true` if the offset moved.
    pub fn scroll_by(&mut self, delta: isize, content: usize) -> bool {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target, content)
    }

    /// Scroll to an absolute offset. Returns `true` if the offset moved.
    pub fn scroll_to(&mut self, offset: usize, content: usize) -> bool {
        let clamped = offset.min(self.max_offset(content));
        let moved = clamped != self.offset;
        self.offset = clamped;
        moved
    }

    /// Scroll to top.
    pub fn home(&mut self) {
        self.offset = 0;
    }

    /// Scroll to bottom.
    pub fn end(&mut self, content: usize) {
        self.offset = self.max_offset(content);
    }

    /// Rows visible for `content` rows, with the offset clamped.
    pub fn visible_range(&self, content: usize) -> Range<usize> {
        let start = self.offset.min(self.max_offset(content));
        let end = match self.viewport {
            Some(viewport) => (start + viewport).min(content),
            None => content,
        };
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_scrolls() {
        let mut s = ScrollState::new(None);
        assert!(!s.scroll_by(5, 100));
        assert_eq!(s.visible_range(100), 0..100);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut s = ScrollState::new(Some(4));
        assert!(s.scroll_by(3, 10));
        assert_eq!(s.visible_range(10), 3..7);
        assert!(s.scroll_by(100, 10));
        assert_eq!(s.offset, 6);
        assert!(s.scroll_by(-100, 10));
        assert_eq!(s.offset, 0);
    }

    #[test]
    fn test_range_clamps_after_content_shrinks() {
        let mut s = ScrollState::new(Some(4));
        s.end(10);
        assert_eq!(s.visible_range(5), 1..5);
    }
}
