//! Title screen.

use super::{Key, Transition};
use crate::config::GameConfig;
use crate::render::{Alignment, Canvas, Fonts, Image};

/// Title shown on the splash screen.
pub const TITLE: &str = "SNAKE II";

/// Centred title card; any key moves on.
#[derive(Debug, Clone)]
pub struct Splash {
    image: Image,
    offset: (i32, i32),
}

impl Splash {
    /// Build the title card for the configured screen.
    #[must_use]
    pub fn new(fonts: &Fonts, config: &GameConfig) -> Self {
        let width = u32::from(config.screen_width);
        let title = fonts.main.render_text(TITLE, Some(width), Some(17), Alignment::Center);
        let hint = fonts.small.render_text("press a key", Some(width), Some(12), Alignment::Center);

        let mut rows = title.rows().to_vec();
        rows.extend_from_slice(hint.rows());
        let image = Image::from_rows(title.width().max(hint.width()), rows);

        Self::with_image(image, config)
    }

    /// A splash screen showing an arbitrary image.
    #[must_use]
    pub fn with_image(image: Image, config: &GameConfig) -> Self {
        let x = (i32::from(config.screen_width) - image.width() as i32) / 2;
        let y = (i32::from(config.screen_height) - image.height() as i32) / 2;
        Self {
            image,
            offset: (x, y),
        }
    }

    /// The card image.
    #[must_use]
    pub const fn image(&self) -> &Image {
        &self.image
    }

    /// Top-left corner of the card on screen.
    #[must_use]
    pub const fn offset(&self) -> (i32, i32) {
        self.offset
    }

    /// Any key leaves.
    #[must_use]
    pub const fn key(&self, _key: Key) -> Transition {
        Transition::Switch(0)
    }

    /// Draw the card.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.image.paint(self.offset.0, self.offset.1, false, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_centred() {
        let fonts = Fonts::load().unwrap();
        let config = GameConfig::default();
        let splash = Splash::new(&fonts, &config);
        assert_eq!(splash.image().width(), 104);
        assert_eq!(splash.image().height(), 29);
        assert_eq!(splash.offset(), (0, 27));
        assert!(splash.image().lit_count() > 0);
    }

    #[test]
    fn test_custom_image_offset() {
        let config = GameConfig::default();
        let splash = Splash::with_image(Image::new(10, 4), &config);
        assert_eq!(splash.offset(), (47, 40));
        assert_eq!(splash.key(Key::Up), Transition::Switch(0));
    }
}
