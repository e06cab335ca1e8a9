//! Monochrome pixel images.

/// Destination for painted pixels.
///
/// The engine never touches a real screen; everything it draws goes through
/// this one primitive. Any `FnMut(i32, i32)` closure is a canvas.
pub trait Canvas {
    /// Light the pixel at `(x, y)`.
    fn plot(&mut self, x: i32, y: i32);
}

impl<F: FnMut(i32, i32)> Canvas for F {
    fn plot(&mut self, x: i32, y: i32) {
        self(x, y);
    }
}

/// Row mask covering `width` columns.
pub(crate) const fn row_mask(width: u32) -> u128 {
    if width >= Image::MAX_WIDTH {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// A monochrome image stored as one bitmask per row.
///
/// Bit `i` of a row is the pixel in column `i`, so the leftmost pixel is the
/// least significant bit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    width: u32,
    lines: Vec<u128>,
}

impl Image {
    /// Widest image representable (one `u128` per row).
    pub const MAX_WIDTH: u32 = 128;

    /// Create a blank image. Widths above [`Self::MAX_WIDTH`] are clamped.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.min(Self::MAX_WIDTH),
            lines: vec![0; height as usize],
        }
    }

    /// Create an image from row bitmasks, discarding bits beyond `width`.
    #[must_use]
    pub fn from_rows(width: u32, rows: Vec<u128>) -> Self {
        let width = width.min(Self::MAX_WIDTH);
        let mask = row_mask(width);
        let lines = rows.into_iter().map(|row| row & mask).collect();
        Self { width, lines }
    }

    /// Create an image from text rows where `#` or `1` is a lit pixel.
    ///
    /// The width is the longest row.
    #[must_use]
    pub fn from_ascii(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let lines = rows
            .iter()
            .map(|row| {
                row.chars()
                    .take(Self::MAX_WIDTH as usize)
                    .enumerate()
                    .filter(|(_, c)| matches!(c, '#' | '1'))
                    .fold(0u128, |acc, (i, _)| acc | (1 << i))
            })
            .collect();
        Self::from_rows(width, lines)
    }

    /// Create a 4×4 image from a packed cell sprite (bit `row * 4 + col`).
    #[must_use]
    pub fn from_sprite(bits: u16) -> Self {
        let lines = (0..4).map(|row| u128::from((bits >> (row * 4)) & 0xF)).collect();
        Self { width: 4, lines }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Row bitmasks, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[u128] {
        &self.lines
    }

    /// Whether the pixel at `(x, y)` is lit. Out-of-range pixels are unlit.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width
            && self
                .lines
                .get(y as usize)
                .is_some_and(|row| (row >> x) & 1 == 1)
    }

    /// Set or clear the pixel at `(x, y)`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, lit: bool) {
        if x >= self.width {
            return;
        }
        if let Some(row) = self.lines.get_mut(y as usize) {
            if lit {
                *row |= 1 << x;
            } else {
                *row &= !(1 << x);
            }
        }
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        self.lines.iter().map(|row| row.count_ones()).sum()
    }

    /// Extract the `w`×`h` window whose top-left corner is `(x, y)`.
    ///
    /// The window is clamped to the image, so the result may be smaller than
    /// requested.
    #[must_use]
    pub fn sub_image(&self, x: u32, y: u32, w: u32, h: u32) -> Self {
        let x0 = x.min(self.width);
        let y0 = (y as usize).min(self.lines.len());
        let w = w.min(self.width - x0);
        let y1 = y0.saturating_add(h as usize).min(self.lines.len());
        let mask = row_mask(w);

        let lines = self.lines[y0..y1]
            .iter()
            .map(|row| row.checked_shr(x0).unwrap_or(0) & mask)
            .collect();

        Self { width: w, lines }
    }

    /// Paint the image with its top-left corner at `(x, y)`.
    ///
    /// Calls [`Canvas::plot`] once per lit pixel. With `invert` set, the unlit
    /// pixels inside the image bounds are painted instead.
    pub fn paint<C: Canvas + ?Sized>(&self, x: i32, y: i32, invert: bool, canvas: &mut C) {
        for (row_index, row) in self.lines.iter().enumerate() {
            let py = y + row_index as i32;
            for col in 0..self.width {
                let lit = (row >> col) & 1 == 1;
                if lit != invert {
                    canvas.plot(x + col as i32, py);
                }
            }
        }
    }

    /// Render as text, `#` for lit pixels and a space otherwise.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.lines.len() * (self.width as usize + 1));
        for row in &self.lines {
            for col in 0..self.width {
                out.push(if (row >> col) & 1 == 1 { '#' } else { ' ' });
            }
            // Trailing blanks carry no information in a dump.
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        }
        out
    }
}
