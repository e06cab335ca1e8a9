//! Fixed-height bitmap fonts.
//!
//! Glyphs are packed into a single integer: a leading marker bit (so leading
//! blank pixels survive), then the pixel grid in row-major order, most
//! significant bit first. The glyph width is the content bit count divided by
//! the font height.

use super::image::{Image, row_mask};
use crate::error::FontError;
use std::collections::HashMap;

/// Horizontal placement of text inside a wider image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Flush left, after the margin.
    Left,
    /// Centered; an odd leftover column goes to the right.
    #[default]
    Center,
    /// Flush right, before the margin.
    Right,
}

/// One decoded glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    rows: Vec<u128>,
}

impl Glyph {
    /// Decode a packed glyph at the given font height.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::MalformedGlyph`] if the content bits do not split
    /// evenly into `height` rows.
    pub fn decode(ch: char, packed: u128, height: u32) -> Result<Self, FontError> {
        if height == 0 {
            return Err(FontError::ZeroHeight);
        }
        let total = u128::BITS - packed.leading_zeros();
        let Some(bits) = total.checked_sub(1) else {
            return Err(FontError::MalformedGlyph { ch, bits: 0, height });
        };
        if bits % height != 0 {
            return Err(FontError::MalformedGlyph { ch, bits, height });
        }

        let width = bits / height;
        let rows = (0..height)
            .map(|row| {
                (0..width).fold(0u128, |acc, col| {
                    let pos = bits - 1 - (row * width + col);
                    if (packed >> pos) & 1 == 1 {
                        acc | (1 << col)
                    } else {
                        acc
                    }
                })
            })
            .collect();

        Ok(Self { width, rows })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Row bitmasks, bit `i` = column `i`.
    #[must_use]
    pub fn rows(&self) -> &[u128] {
        &self.rows
    }

    /// The glyph as a standalone image.
    #[must_use]
    pub fn to_image(&self) -> Image {
        Image::from_rows(self.width, self.rows.clone())
    }
}

/// A bitmap font with a fixed line height.
#[derive(Debug, Clone)]
pub struct Font {
    height: u32,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// Build a font from a packed glyph table.
    ///
    /// # Errors
    ///
    /// Returns the first glyph that cannot be decoded at `height`.
    pub fn new(height: u32, table: &[(char, u128)]) -> Result<Self, FontError> {
        let glyphs = table
            .iter()
            .map(|&(ch, packed)| Glyph::decode(ch, packed, height).map(|g| (ch, g)))
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self { height, glyphs })
    }

    /// Native line height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Look up a glyph.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Render text at the font's natural size.
    #[must_use]
    pub fn render(&self, text: &str) -> Image {
        self.render_text(text, None, None, Alignment::Center)
    }

    /// Render text into an image, optionally padded or cropped to a size.
    ///
    /// Glyphs are separated by one blank column. Characters without a glyph
    /// use the space glyph, and are skipped if the font has none.
    ///
    /// A taller `height` pads blank rows, the odd row going to the bottom.
    /// A wider `width` pads columns by `alignment`, keeping a left or right
    /// margin equal to the top padding; when the text plus both margins does
    /// not fit, the text is centered instead. Smaller sizes crop.
    #[must_use]
    pub fn render_text(
        &self,
        text: &str,
        width: Option<u32>,
        height: Option<u32>,
        alignment: Alignment,
    ) -> Image {
        let (mut lines, content_width) = self.compose(text);

        let mut margin = 0;
        if let Some(height) = height {
            let native = self.height;
            if height < native {
                lines.truncate(height as usize);
            } else {
                let top = (height - native) / 2;
                let bottom = height - native - top;
                margin = top;
                let mut padded = vec![0u128; top as usize];
                padded.append(&mut lines);
                padded.resize(padded.len() + bottom as usize, 0);
                lines = padded;
            }
        }

        let Some(width) = width.map(|w| w.min(Image::MAX_WIDTH)) else {
            return Image::from_rows(content_width, lines);
        };

        if width < content_width {
            return Image::from_rows(width, lines);
        }

        let pad = width - content_width;
        let mut left = pad / 2;
        if content_width + 2 * margin <= width {
            match alignment {
                Alignment::Left => left = margin,
                Alignment::Right => left = width - content_width - margin,
                Alignment::Center => {}
            }
        }

        let mask = row_mask(width);
        let lines = lines.into_iter().map(|row| (row << left) & mask).collect();
        Image::from_rows(width, lines)
    }

    /// Lay glyphs side by side at native height; returns rows and width.
    fn compose(&self, text: &str) -> (Vec<u128>, u32) {
        let mut lines = vec![0u128; self.height as usize];
        let last = text.chars().count().saturating_sub(1);
        let mut cursor = 0u32;

        for (index, ch) in text.chars().enumerate() {
            let Some(glyph) = self.glyph(ch).or_else(|| self.glyph(' ')) else {
                continue;
            };
            for (line, row) in lines.iter_mut().zip(glyph.rows()) {
                *line |= row.checked_shl(cursor).unwrap_or(0);
            }
            cursor = cursor.saturating_add(glyph.width());
            if index != last {
                cursor = cursor.saturating_add(1);
            }
        }

        if cursor > Image::MAX_WIDTH {
            tracing::warn!(text, width = cursor, "text clipped to {} columns", Image::MAX_WIDTH);
        }
        (lines, cursor.min(Image::MAX_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hollow square, one plus sign, and a 1-wide bar at height 3.
    fn test_font() -> Font {
        Font::new(
            3,
            &[
                ('o', 0b1_111_101_111),
                ('+', 0b1_010_111_010),
                ('|', 0b1_1_1_1),
                (' ', 0b1_0_0_0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_glyph_decode_roundtrip() {
        let glyph = Glyph::decode('o', 0b1_111_101_111, 3).unwrap();
        assert_eq!(glyph.width(), 3);
        assert_eq!(glyph.to_image().to_ascii(), "###\n# #\n###\n");
    }

    #[test]
    fn test_glyph_leading_zero_rows_survive() {
        let glyph = Glyph::decode('.', 0b1_00_00_01, 3).unwrap();
        assert_eq!(glyph.width(), 2);
        assert_eq!(glyph.rows(), &[0, 0, 0b10]);
    }

    #[test]
    fn test_malformed_glyph_rejected() {
        let err = Font::new(3, &[('x', 0b1_1111)]).unwrap_err();
        assert_eq!(
            err,
            FontError::MalformedGlyph {
                ch: 'x',
                bits: 4,
                height: 3
            }
        );
        assert!(Font::new(3, &[('x', 0)]).is_err());
        assert_eq!(Font::new(0, &[]).unwrap_err(), FontError::ZeroHeight);
    }

    #[test]
    fn test_one_column_between_glyphs() {
        let font = test_font();
        let image = font.render("o|o");
        assert_eq!(image.width(), 3 + 1 + 1 + 1 + 3);
        assert_eq!(image.to_ascii(), "### # ###\n# # # # #\n### # ###\n");
    }

    #[test]
    fn test_unknown_character_uses_space() {
        let font = test_font();
        let image = font.render("|?|");
        assert_eq!(image.width(), 5);
        assert_eq!(image.to_ascii(), "#   #\n#   #\n#   #\n");
    }

    #[test]
    fn test_height_padding_extra_row_at_bottom() {
        let font = test_font();
        let image = font.render_text("|", None, Some(6), Alignment::Center);
        assert_eq!(image.height(), 6);
        // top = floor(3 / 2) = 1, bottom = 2
        assert_eq!(image.rows(), &[0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_height_crop() {
        let font = test_font();
        let image = font.render_text("o", None, Some(2), Alignment::Center);
        assert_eq!(image.to_ascii(), "###\n# #\n");
    }

    #[test]
    fn test_width_alignment() {
        let font = test_font();
        let left = font.render_text("|", Some(4), None, Alignment::Left);
        let right = font.render_text("|", Some(4), None, Alignment::Right);
        let center = font.render_text("|", Some(4), None, Alignment::Center);
        assert_eq!(left.rows()[0], 0b0001);
        assert_eq!(right.rows()[0], 0b1000);
        // Three spare columns: one left, two right.
        assert_eq!(center.rows()[0], 0b0010);
        assert_eq!(center.width(), 4);
    }

    #[test]
    fn test_left_margin_matches_top_padding() {
        let font = test_font();
        let image = font.render_text("|", Some(8), Some(7), Alignment::Left);
        // top padding 2 => two blank columns on the left
        assert_eq!(image.rows()[2], 0b100);
        let right = font.render_text("|", Some(8), Some(7), Alignment::Right);
        assert_eq!(right.rows()[2], 1 << 5);
    }

    #[test]
    fn test_margin_too_wide_falls_back_to_center() {
        let font = test_font();
        // content 3 + 2 * 2 margin > 6 => centered split 1 / 2
        let image = font.render_text("o", Some(6), Some(7), Alignment::Left);
        assert_eq!(image.rows()[2], 0b111 << 1);
    }

    #[test]
    fn test_width_crop() {
        let font = test_font();
        let image = font.render_text("oo", Some(4), None, Alignment::Left);
        assert_eq!(image.width(), 4);
        assert_eq!(image.to_ascii(), "###\n# #\n###\n");
    }
}
