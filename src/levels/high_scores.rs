//! The high-score list, with name entry for a freshly inserted score.

use super::{Context, Key, Transition};
use crate::config::GameConfig;
use crate::game::scoreboard::MAX_DISPLAY_SCORE;
use crate::render::{Alignment, Canvas, Font, Fonts, Image};
use crate::scores::{EditStep, HighScoreEntry, HighScoreTable, NameEditor};
use crate::timer::Timer;
use crate::ui::Menu;
use std::time::Duration;

/// Height of a table row in pixels.
pub const ROW_HEIGHT: u32 = 10;

/// Text of one table row, e.g. `MIK   0020`.
#[must_use]
pub fn row_text(name: &str, score: u32) -> String {
    format!("{name}   {:04}", score.min(MAX_DISPLAY_SCORE))
}

/// The high-score screen.
///
/// When the session holds a pending rank, the screen opens in edit mode on
/// that row: up and down cycle the blinking letter, confirm moves on, and
/// the third confirm signs and saves the table.
#[derive(Debug, Clone)]
pub struct HighScores {
    menu: Menu<()>,
    editor: Option<NameEditor>,
    blink_timer: Timer,
}

impl HighScores {
    /// A screen listing an empty table.
    #[must_use]
    pub fn new(fonts: &Fonts, config: &GameConfig) -> Self {
        let mut menu = Menu::new(
            "High Scores",
            &fonts.small,
            u32::from(config.screen_width),
            u32::from(config.screen_height),
        );
        fill(&mut menu, &fonts.small, &HighScoreTable::new());
        Self {
            menu,
            editor: None,
            blink_timer: Timer::new(),
        }
    }

    /// The rows.
    #[must_use]
    pub const fn menu(&self) -> &Menu<()> {
        &self.menu
    }

    /// The name being typed, if any.
    #[must_use]
    pub const fn editor(&self) -> Option<&NameEditor> {
        self.editor.as_ref()
    }

    /// Reload the rows and enter edit mode if a rank is waiting for a name.
    pub fn start(&mut self, ctx: &Context<'_>) {
        fill(&mut self.menu, &ctx.fonts.small, &ctx.session.scores);
        self.menu.select(0);
        self.editor = None;
        self.blink_timer.stop();

        if let Some(rank) = ctx.session.pending_rank {
            self.editor = Some(NameEditor::new(rank));
            self.menu.select(rank);
            self.blink_timer.start(ctx.config.name_blink_period());
            self.refresh(&ctx.fonts.small, ctx.session.scores.get(rank));
            tracing::debug!(rank, "name entry started");
        }
    }

    /// Stop blinking.
    pub fn end(&mut self) {
        self.blink_timer.stop();
    }

    /// Edit the name, or browse and leave.
    pub fn key(&mut self, key: Key, ctx: &mut Context<'_>) -> Transition {
        let Some(editor) = self.editor.as_mut() else {
            match key {
                Key::Up => self.menu.move_selection(-1),
                Key::Down => self.menu.move_selection(1),
                Key::Confirm => return Transition::Switch(0),
                Key::Left | Key::Right => {}
            }
            return Transition::Stay;
        };

        let rank = editor.rank();
        match key {
            Key::Up => editor.scroll(1),
            Key::Down => editor.scroll(-1),
            Key::Confirm => {
                if let EditStep::Done(name) = editor.confirm() {
                    self.commit(rank, &name, ctx);
                }
            }
            Key::Left | Key::Right => return Transition::Stay,
        }
        self.refresh(&ctx.fonts.small, ctx.session.scores.get(rank));
        Transition::Stay
    }

    /// Blink the active letter.
    pub fn advance(&mut self, dt: Duration, ctx: &mut Context<'_>) {
        let fired = self.blink_timer.advance(dt);
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if fired % 2 == 1 {
            editor.toggle_blink();
        }
        if fired > 0 {
            let rank = editor.rank();
            self.refresh(&ctx.fonts.small, ctx.session.scores.get(rank));
        }
    }

    fn commit(&mut self, rank: usize, name: &str, ctx: &mut Context<'_>) {
        ctx.session.scores.set_name(rank, name);
        ctx.session.pending_rank = None;
        ctx.session.persist_scores();
        self.editor = None;
        self.blink_timer.stop();
    }

    /// Re-render the row being edited, or the last edited row once signed.
    fn refresh(&mut self, font: &Font, entry: Option<&HighScoreEntry>) {
        let Some(entry) = entry else {
            return;
        };
        let (index, name) = match &self.editor {
            Some(editor) => (editor.rank(), editor.display_text()),
            None => (self.menu.selected(), entry.name.clone()),
        };
        let image = row_image(font, self.menu.item_width(), &row_text(&name, entry.score));
        if let Err(rejected) = self.menu.set_image(index, image) {
            tracing::warn!(index, height = rejected.height(), "high-score row not redrawn");
        }
    }

    /// Draw the list.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.menu.paint(canvas);
    }
}

fn row_image(font: &Font, width: u32, text: &str) -> Image {
    font.render_text(text, Some(width), Some(ROW_HEIGHT), Alignment::Left)
}

fn fill(menu: &mut Menu<()>, font: &Font, table: &HighScoreTable) {
    menu.clear();
    for entry in table.entries() {
        let text = row_text(&entry.name, entry.score);
        let image = row_image(font, menu.item_width(), &text);
        menu.push_image(&text, image, ());
    }
}
