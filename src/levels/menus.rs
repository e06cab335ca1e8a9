//! The main menu and the speed picker.

use super::{Context, Key, Transition};
use crate::config::{GameConfig, Speed};
use crate::render::{Canvas, Fonts};
use crate::ui::Menu;

/// What confirming a menu row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Follow the level connection at this index.
    Open(usize),
    /// Choose a speed, then return along connection 0.
    SetSpeed(Speed),
}

/// A menu screen.
#[derive(Debug, Clone)]
pub struct MenuLevel {
    menu: Menu<MenuAction>,
}

impl MenuLevel {
    /// Wrap a prepared menu.
    #[must_use]
    pub const fn new(menu: Menu<MenuAction>) -> Self {
        Self { menu }
    }

    /// `New Game`, `Level` and `High Scores`, opening connections 0, 1 and 2.
    #[must_use]
    pub fn main_menu(fonts: &Fonts, config: &GameConfig) -> Self {
        let mut menu = Menu::new(
            "Menu",
            &fonts.small,
            u32::from(config.screen_width),
            u32::from(config.screen_height),
        );
        menu.push(&fonts.main, "New Game", MenuAction::Open(0));
        menu.push(&fonts.main, "Level", MenuAction::Open(1));
        menu.push(&fonts.main, "High Scores", MenuAction::Open(2));
        Self::new(menu)
    }

    /// One row per speed tier.
    #[must_use]
    pub fn speed_menu(fonts: &Fonts, config: &GameConfig) -> Self {
        let mut menu = Menu::new(
            "Level",
            &fonts.small,
            u32::from(config.screen_width),
            u32::from(config.screen_height),
        );
        for speed in Speed::ALL {
            menu.push(&fonts.main, speed.label(), MenuAction::SetSpeed(speed));
        }
        Self::new(menu)
    }

    /// The underlying menu.
    #[must_use]
    pub const fn menu(&self) -> &Menu<MenuAction> {
        &self.menu
    }

    /// Preselect the current speed, if this menu offers speeds.
    pub fn start(&mut self, ctx: &Context<'_>) {
        let current = self
            .menu
            .items()
            .iter()
            .position(|item| item.action == MenuAction::SetSpeed(ctx.session.speed));
        if let Some(index) = current {
            self.menu.select(index);
        }
    }

    /// Up and down move the selection; confirm runs the row's action.
    pub fn key(&mut self, key: Key, ctx: &mut Context<'_>) -> Transition {
        match key {
            Key::Up => self.menu.move_selection(-1),
            Key::Down => self.menu.move_selection(1),
            Key::Confirm => match self.menu.confirm() {
                Some(&MenuAction::Open(signal)) => return Transition::Switch(signal),
                Some(&MenuAction::SetSpeed(speed)) => {
                    tracing::info!(%speed, "speed selected");
                    ctx.session.speed = speed;
                    return Transition::Switch(0);
                }
                None => {}
            },
            Key::Left | Key::Right => {}
        }
        Transition::Stay
    }

    /// Draw the menu.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.menu.paint(canvas);
    }
}
