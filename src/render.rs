//! Monochrome drawing: images, bitmap fonts and the framebuffer.
//!
//! Everything the game shows is built from [`Image`]s painted through the
//! [`Canvas`] trait. Text is rendered into images by a [`Font`].

pub mod font;
pub mod glyphs;
pub mod image;
pub mod screen;

pub use font::{Alignment, Font, Glyph};
pub use image::{Canvas, Image};
pub use screen::Screen;

use crate::error::FontError;

/// The three built-in fonts, decoded once at startup.
#[derive(Debug, Clone)]
pub struct Fonts {
    /// Large proportional font.
    pub main: Font,
    /// Small proportional font.
    pub small: Font,
    /// 3×5 digits for the score and bonus countdown.
    pub digits: Font,
}

impl Fonts {
    /// Decode the built-in glyph tables.
    ///
    /// # Errors
    ///
    /// Returns an error if any glyph does not match its font height.
    pub fn load() -> Result<Self, FontError> {
        Ok(Self {
            main: Font::new(glyphs::MAIN_HEIGHT, glyphs::MAIN)?,
            small: Font::new(glyphs::SMALL_HEIGHT, glyphs::SMALL)?,
            digits: Font::new(glyphs::DIGITS_HEIGHT, glyphs::DIGITS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fonts_decode() {
        let fonts = Fonts::load().unwrap();
        assert_eq!(fonts.main.height(), 11);
        assert_eq!(fonts.small.height(), 8);
        for ch in ['A', 'z', '0', '9', ' ', '7'] {
            assert!(fonts.main.glyph(ch).is_some(), "main font lacks {ch:?}");
            assert!(fonts.small.glyph(ch).is_some(), "small font lacks {ch:?}");
        }
    }

    #[test]
    fn test_digit_glyphs() {
        let fonts = Fonts::load().unwrap();
        let zero = fonts.digits.glyph('0').unwrap();
        assert_eq!(zero.width(), 3);
        assert_eq!(zero.to_image().to_ascii(), "###\n# #\n# #\n# #\n###\n");
        let one = fonts.digits.render("1");
        assert_eq!(one.to_ascii(), " #\n##\n #\n #\n #\n");
    }

    #[test]
    fn test_score_digits_width() {
        let fonts = Fonts::load().unwrap();
        // Four 3-wide digits with three separators.
        assert_eq!(fonts.digits.render("0042").width(), 15);
    }

    #[test]
    fn test_game_over_banner_size() {
        let fonts = Fonts::load().unwrap();
        let image = fonts
            .main
            .render_text("Game over!", Some(102), Some(17), Alignment::Center);
        assert_eq!(image.width(), 102);
        assert_eq!(image.height(), 17);
        assert!(image.lit_count() > 0);
        // Three blank rows above the glyphs.
        assert_eq!(&image.rows()[..3], &[0, 0, 0]);
    }
}
