//! Text command implementation - render a string in one of the game fonts.

use super::{AlignArg, CliError, FontChoice};
use snake2::Fonts;

/// Execute the text command.
///
/// # Errors
///
/// Returns an error if the fonts cannot be decoded.
pub(crate) fn execute(
    text: &str,
    font: FontChoice,
    width: Option<u32>,
    height: Option<u32>,
    align: AlignArg,
) -> Result<(), CliError> {
    let fonts = Fonts::load().map_err(|e| CliError::new(e.to_string()))?;
    print!("{}", render(&fonts, text, font, width, height, align));
    Ok(())
}

fn render(
    fonts: &Fonts,
    text: &str,
    font: FontChoice,
    width: Option<u32>,
    height: Option<u32>,
    align: AlignArg,
) -> String {
    let font = match font {
        FontChoice::Main => &fonts.main,
        FontChoice::Small => &fonts.small,
        FontChoice::Digits => &fonts.digits,
    };
    font.render_text(text, width, height, align.into()).to_ascii()
}
