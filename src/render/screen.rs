//! Off-screen monochrome framebuffer.

use super::image::{Canvas, Image};

/// A fixed-size framebuffer that levels paint into.
///
/// Writes outside the bounds are dropped, so sprites may hang off the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pixels: Image,
}

impl Screen {
    /// Create a blank screen.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: Image::new(width, height),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.pixels = Image::new(self.pixels.width(), self.pixels.height());
    }

    /// Whether a pixel is lit.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.pixels.get(x, y)
    }

    /// The framebuffer contents as an image.
    #[must_use]
    pub const fn image(&self) -> &Image {
        &self.pixels
    }

    /// Plain-text dump, one character per pixel.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        self.pixels.to_ascii()
    }

    /// Pack two pixel rows per text line using half-block characters.
    ///
    /// Each line has exactly `width` characters.
    #[must_use]
    pub fn to_half_blocks(&self) -> Vec<String> {
        let (width, height) = (self.width(), self.height());
        (0..height.div_ceil(2))
            .map(|line| {
                let top = line * 2;
                (0..width)
                    .map(|x| match (self.get(x, top), self.get(x, top + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect()
    }
}

impl Canvas for Screen {
    fn plot(&mut self, x: i32, y: i32) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.pixels.set(x, y, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_clips_out_of_bounds() {
        let mut screen = Screen::new(4, 4);
        screen.plot(-1, 0);
        screen.plot(0, -1);
        screen.plot(4, 0);
        screen.plot(0, 4);
        assert_eq!(screen.image().lit_count(), 0);
        screen.plot(3, 3);
        assert!(screen.get(3, 3));
    }

    #[test]
    fn test_paint_image_onto_screen() {
        let mut screen = Screen::new(6, 3);
        Image::from_ascii(&["##", "##"]).paint(5, 2, false, &mut screen);
        // Only the top-left pixel of the square lands on screen.
        assert_eq!(screen.image().lit_count(), 1);
        assert!(screen.get(5, 2));
    }

    #[test]
    fn test_half_blocks() {
        let mut screen = Screen::new(3, 3);
        screen.plot(0, 0);
        screen.plot(0, 1);
        screen.plot(1, 0);
        screen.plot(2, 1);
        screen.plot(1, 2);
        let lines = screen.to_half_blocks();
        assert_eq!(lines, vec!["█▀▄".to_string(), " ▀ ".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut screen = Screen::new(2, 2);
        screen.plot(1, 1);
        screen.clear();
        assert_eq!(screen.image().lit_count(), 0);
        assert_eq!(screen.width(), 2);
        assert_eq!(screen.height(), 2);
    }
}
