//! Titled, scrollable list of selectable items.

use super::scroll::{ScrollWindow, Visibility};
use crate::render::{Alignment, Canvas, Font, Image};

/// Height of a text menu row in pixels.
pub const ITEM_HEIGHT: u32 = 16;

/// One row of a menu.
#[derive(Debug, Clone)]
pub struct MenuItem<A> {
    /// Display text.
    pub text: String,
    /// Pre-rendered row image.
    pub image: Image,
    /// Value handed back when the row is confirmed.
    pub action: A,
}

/// A list of items under a title, scrolled through a fixed viewport.
///
/// The selected row is drawn inverted. What confirming a row does is up to
/// the owner: each item carries an action value of type `A`.
#[derive(Debug, Clone)]
pub struct Menu<A> {
    title_image: Image,
    items: Vec<MenuItem<A>>,
    scroll: ScrollWindow,
    item_width: u32,
}

impl<A> Menu<A> {
    /// Create an empty menu for a screen of the given size.
    ///
    /// The title is drawn as `- title -` in `title_font`, and the rows fill
    /// the space below it.
    #[must_use]
    pub fn new(title: &str, title_font: &Font, screen_width: u32, screen_height: u32) -> Self {
        let title_image = title_font.render_text(
            &format!("- {title} -"),
            Some(screen_width),
            None,
            Alignment::Center,
        );
        let viewport = screen_height.saturating_sub(title_image.height() + 5);
        Self {
            title_image,
            items: Vec::new(),
            scroll: ScrollWindow::new(viewport),
            item_width: screen_width.saturating_sub(4),
        }
    }

    /// Width of a row image.
    #[must_use]
    pub const fn item_width(&self) -> u32 {
        self.item_width
    }

    /// Append a text row rendered left-aligned in `font`.
    pub fn push(&mut self, font: &Font, text: &str, action: A) {
        let image = font.render_text(text, Some(self.item_width), Some(ITEM_HEIGHT), Alignment::Left);
        self.push_image(text, image, action);
    }

    /// Append a row with a custom image.
    pub fn push_image(&mut self, text: &str, image: Image, action: A) {
        self.scroll.push(image.height());
        self.items.push(MenuItem {
            text: text.to_string(),
            image,
            action,
        });
    }

    /// Replace the image of an existing row. The row height must not change.
    ///
    /// # Errors
    ///
    /// Hands `image` back unchanged if there is no row `index` or the heights
    /// differ.
    pub fn set_image(&mut self, index: usize, image: Image) -> Result<(), Image> {
        match self.items.get_mut(index) {
            Some(item) if item.image.height() == image.height() => {
                item.image = image;
                Ok(())
            }
            _ => Err(image),
        }
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.items.clear();
        self.scroll.clear();
    }

    /// The rows.
    #[must_use]
    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the selected row.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.scroll.selected()
    }

    /// Select a row by index.
    pub fn select(&mut self, index: usize) {
        self.scroll.select(index);
    }

    /// Move the selection up (`-1`) or down (`+1`), wrapping at the ends.
    pub fn move_selection(&mut self, delta: isize) {
        self.scroll.on_move(delta, true);
    }

    /// The action of the selected row.
    #[must_use]
    pub fn confirm(&self) -> Option<&A> {
        self.items.get(self.selected()).map(|item| &item.action)
    }

    /// Scroll state.
    #[must_use]
    pub const fn scroll(&self) -> &ScrollWindow {
        &self.scroll
    }

    /// Paint the title and every visible row.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.title_image.paint(0, 2, false, canvas);

        let mut y = 3 + self.title_image.height() as i32;
        for visible in self.scroll.visible_items() {
            let Some(item) = self.items.get(visible.index) else {
                continue;
            };
            let invert = visible.index == self.selected();
            match visible.visibility {
                Visibility::Full => {
                    item.image.paint(2, y, invert, canvas);
                    y += item.image.height() as i32;
                }
                Visibility::Partial { low, high } => {
                    let part = item.image.sub_image(0, low, item.image.width(), high - low);
                    part.paint(2, y, invert, canvas);
                    y += part.height() as i32;
                }
            }
        }
    }
}
