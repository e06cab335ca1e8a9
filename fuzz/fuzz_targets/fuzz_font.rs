#![no_main]

//! Font fuzzer.
//!
//! Decodes arbitrary glyph tables and renders arbitrary text at arbitrary
//! sizes. Nothing may panic, and rendered images keep the requested size.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snake2::render::{Alignment, Font, Fonts};

/// Structured input for font fuzzing.
#[derive(Arbitrary, Debug)]
struct FontInput {
    height: u8,
    glyphs: Vec<(char, u128)>,
    text: String,
    width: Option<u8>,
    target_height: Option<u8>,
    align: u8,
}

fuzz_target!(|input: FontInput| {
    let alignment = match input.align % 3 {
        0 => Alignment::Left,
        1 => Alignment::Center,
        _ => Alignment::Right,
    };
    let width = input.width.map(u32::from);
    let height = input.target_height.map(u32::from);

    if let Ok(font) = Font::new(u32::from(input.height % 16), &input.glyphs) {
        let _ = font.render_text(&input.text, width, height, alignment);
    }

    let Ok(fonts) = Fonts::load() else {
        return;
    };
    let image = fonts.main.render_text(&input.text, width, height, alignment);
    if let Some(w) = width {
        assert!(image.width() <= w);
    }
    if let Some(h) = height {
        assert_eq!(image.height(), h);
    }
});
