//! Windowed scrolling over a list of fixed-height items.
//!
//! Items are stacked top to bottom; item `i` covers the pixel rows
//! `[top(i), top(i) + height(i))`. The window `[low, high)` is the slice of
//! that strip currently on screen. Moving the selection scrolls the window
//! just far enough to bring the selected item's edge into view.

/// How much of an item is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The whole item.
    Full,
    /// Item-local rows `[low, high)`.
    Partial {
        /// First visible row of the item.
        low: u32,
        /// One past the last visible row of the item.
        high: u32,
    },
}

/// An item that is at least partly on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem {
    /// Position in the list.
    pub index: usize,
    /// Visible part.
    pub visibility: Visibility,
}

/// Scroll state for a list shown through a fixed-height viewport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollWindow {
    viewport: u32,
    /// Cumulative bottom edge of each item.
    bottoms: Vec<u32>,
    selected: usize,
    low: u32,
    high: u32,
}

impl ScrollWindow {
    /// An empty list shown through a viewport `viewport` rows tall.
    #[must_use]
    pub const fn new(viewport: u32) -> Self {
        Self {
            viewport,
            bottoms: Vec::new(),
            selected: 0,
            low: 0,
            high: 0,
        }
    }

    /// A list of items with the given heights.
    #[must_use]
    pub fn with_heights(viewport: u32, heights: impl IntoIterator<Item = u32>) -> Self {
        let mut window = Self::new(viewport);
        for height in heights {
            window.push(height);
        }
        window
    }

    /// Append an item at the bottom.
    pub fn push(&mut self, height: u32) {
        let bottom = self.total_height().saturating_add(height);
        self.bottoms.push(bottom);
        self.scroll();
    }

    /// Remove every item and scroll back to the top.
    pub fn clear(&mut self) {
        self.bottoms.clear();
        self.selected = 0;
        self.low = 0;
        self.high = 0;
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bottoms.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bottoms.is_empty()
    }

    /// Height of the whole strip.
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.bottoms.last().copied().unwrap_or(0)
    }

    /// Viewport height.
    #[must_use]
    pub const fn viewport(&self) -> u32 {
        self.viewport
    }

    /// Index of the selected item.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// The visible strip rows as `(low, high)`.
    #[must_use]
    pub const fn window(&self) -> (u32, u32) {
        (self.low, self.high)
    }

    /// Strip rows `(top, bottom)` covered by an item.
    #[must_use]
    pub fn extent(&self, index: usize) -> Option<(u32, u32)> {
        let bottom = *self.bottoms.get(index)?;
        let top = index.checked_sub(1).map_or(0, |prev| self.bottoms[prev]);
        Some((top, bottom))
    }

    /// Select an item and scroll it into view. Out-of-range indices select
    /// the last item.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.len().saturating_sub(1));
        self.scroll();
    }

    /// Move the selection by `delta` items.
    ///
    /// With `wrap`, moving past either end continues from the other end;
    /// otherwise the selection stops at the ends.
    pub fn on_move(&mut self, delta: isize, wrap: bool) {
        let Ok(len) = isize::try_from(self.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        // selected < len, which fits in isize.
        let current = self.selected as isize;
        let target = if wrap {
            (current + delta).rem_euclid(len)
        } else {
            (current + delta).clamp(0, len - 1)
        };
        // In [0, len) after rem_euclid or clamp.
        self.select(target as usize);
    }

    fn band(&self) -> u32 {
        self.viewport.min(self.total_height())
    }

    fn scroll(&mut self) {
        let band = self.band();
        let Some((top, bottom)) = self.extent(self.selected) else {
            self.low = 0;
            self.high = band;
            return;
        };

        if top <= self.low {
            self.low = top;
            self.high = top + band;
        } else if bottom > self.high {
            self.high = bottom;
            self.low = bottom.saturating_sub(band);
        } else {
            self.high = self.low + band;
        }
    }

    /// Items at least partly inside the window, top to bottom.
    ///
    /// Zero-height items and items whose visible slice is empty are left out.
    #[must_use]
    pub fn visible_items(&self) -> Vec<VisibleItem> {
        let (low, high) = (self.low, self.high);
        (0..self.len())
            .filter_map(|index| {
                let (top, bottom) = self.extent(index)?;
                if top == bottom {
                    return None;
                }
                let top_in = low <= top && top < high;
                let bottom_in = low < bottom && bottom <= high;
                let visibility = match (top_in, bottom_in) {
                    (true, true) => Visibility::Full,
                    (true, false) => Visibility::Partial {
                        low: 0,
                        high: high - top,
                    },
                    (false, true) => Visibility::Partial {
                        low: low - top,
                        high: bottom - top,
                    },
                    // Taller than the window and covering all of it.
                    (false, false) if top < low && bottom > high => Visibility::Partial {
                        low: low - top,
                        high: high - top,
                    },
                    (false, false) => return None,
                };
                Some(VisibleItem { index, visibility })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_ten() -> ScrollWindow {
        ScrollWindow::with_heights(30, [10; 5])
    }

    #[test]
    fn test_initial_window() {
        let window = five_by_ten();
        assert_eq!(window.window(), (0, 30));
        assert_eq!(window.total_height(), 50);
        let visible = window.visible_items();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|v| v.visibility == Visibility::Full));
    }

    #[test]
    fn test_select_last_aligns_bottom() {
        let mut window = five_by_ten();
        window.select(4);
        assert_eq!(window.window(), (20, 50));
        let indices: Vec<usize> = window.visible_items().iter().map(|v| v.index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
    }

    #[test]
    fn test_select_above_aligns_top() {
        let mut window = five_by_ten();
        window.select(4);
        window.select(1);
        assert_eq!(window.window(), (10, 40));
    }

    #[test]
    fn test_selection_inside_window_does_not_scroll() {
        let mut window = five_by_ten();
        window.select(4);
        window.select(3);
        assert_eq!(window.window(), (20, 50));
    }

    #[test]
    fn test_partial_items() {
        let mut window = ScrollWindow::with_heights(25, [10; 5]);
        assert_eq!(
            window.visible_items().last(),
            Some(&VisibleItem {
                index: 2,
                visibility: Visibility::Partial { low: 0, high: 5 }
            })
        );

        window.select(4);
        assert_eq!(window.window(), (25, 50));
        assert_eq!(
            window.visible_items().first(),
            Some(&VisibleItem {
                index: 2,
                visibility: Visibility::Partial { low: 5, high: 10 }
            })
        );
    }

    #[test]
    fn test_item_taller_than_window() {
        let mut window = ScrollWindow::with_heights(10, [5, 30, 5]);
        window.select(1);
        // Bottom edge below the window: align the bottom.
        assert_eq!(window.window(), (25, 35));
        assert_eq!(
            window.visible_items(),
            vec![VisibleItem {
                index: 1,
                visibility: Visibility::Partial { low: 20, high: 30 }
            }]
        );
    }

    #[test]
    fn test_short_list_window_never_exceeds_content() {
        let mut window = ScrollWindow::with_heights(100, [10, 10]);
        assert_eq!(window.window(), (0, 20));
        window.select(1);
        assert_eq!(window.window(), (0, 20));
    }

    #[test]
    fn test_on_move_wraps() {
        let mut window = five_by_ten();
        window.on_move(-1, true);
        assert_eq!(window.selected(), 4);
        assert_eq!(window.window(), (20, 50));
        window.on_move(1, true);
        assert_eq!(window.selected(), 0);
        assert_eq!(window.window(), (0, 30));
    }

    #[test]
    fn test_on_move_clamps_without_wrap() {
        let mut window = five_by_ten();
        window.on_move(-1, false);
        assert_eq!(window.selected(), 0);
        window.on_move(10, false);
        assert_eq!(window.selected(), 4);
    }

    #[test]
    fn test_empty_list() {
        let mut window = ScrollWindow::new(30);
        window.on_move(1, true);
        window.select(3);
        assert_eq!(window.selected(), 0);
        assert!(window.visible_items().is_empty());
        assert_eq!(window.window(), (0, 0));
    }

    #[test]
    fn test_zero_height_items_skipped() {
        let window = ScrollWindow::with_heights(30, [10, 0, 10]);
        let indices: Vec<usize> = window.visible_items().iter().map(|v| v.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
