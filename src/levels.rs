//! Screens and the controller that switches between them.
//!
//! A [`Game`] owns a set of levels, each registered under an id from its
//! [`IdAllocator`], and a connection table per level. A level asks to leave
//! by returning [`Transition::Switch`] with an index into its own
//! connections; the game ends the current level and starts the target.
//!
//! ```text
//! Splash ─► Menu ─┬─► Arena ─┬─► Menu
//!                 │          └─► HighScores ─► Menu
//!                 ├─► Level (speed) ─► Menu
//!                 └─► HighScores ─► Menu
//! ```

pub mod arena;
pub mod high_scores;
pub mod menus;
pub mod splash;

pub use arena::{Arena, ArenaState};
pub use high_scores::HighScores;
pub use menus::{MenuAction, MenuLevel};
pub use splash::Splash;

use crate::config::{GameConfig, Speed};
use crate::error::GameError;
use crate::render::{Canvas, Fonts};
use crate::scores::HighScoreTable;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// A key press, already mapped from the host's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Enter / Return.
    Confirm,
}

/// What a level wants after handling input or time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Remain on this level.
    Stay,
    /// Follow the level's connection at this index.
    Switch(usize),
}

/// Identity of a registered level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(u32);

impl LevelId {
    /// Numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Hands out level ids in registration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Start from id 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// A fresh id.
    pub fn allocate(&mut self) -> LevelId {
        let id = LevelId(self.next);
        self.next += 1;
        id
    }
}

/// Runtime state shared by the levels.
#[derive(Debug, Clone)]
pub struct Session {
    /// Speed picked in the level menu.
    pub speed: Speed,
    /// The high-score table.
    pub scores: HighScoreTable,
    /// Rank of a new entry still waiting for a name.
    pub pending_rank: Option<usize>,
    /// Where to persist the table; `None` keeps it in memory.
    pub store: Option<PathBuf>,
}

impl Session {
    /// A session starting at `speed` with the given table.
    #[must_use]
    pub const fn new(speed: Speed, scores: HighScoreTable, store: Option<PathBuf>) -> Self {
        Self {
            speed,
            scores,
            pending_rank: None,
            store,
        }
    }

    /// Write the table to the store, if any. Failures are logged.
    pub fn persist_scores(&self) {
        let Some(path) = &self.store else {
            return;
        };
        if let Err(e) = self.scores.save(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not save high scores");
        }
    }
}

/// Everything a level may read or change besides itself.
#[derive(Debug)]
pub struct Context<'a> {
    /// Immutable settings.
    pub config: &'a GameConfig,
    /// Shared runtime state.
    pub session: &'a mut Session,
    /// Decoded fonts.
    pub fonts: &'a Fonts,
}

/// One screen of the game.
#[derive(Debug, Clone)]
pub enum Level {
    /// Title screen.
    Splash(Splash),
    /// A menu (main menu or speed picker).
    Menu(MenuLevel),
    /// The playfield.
    Arena(Box<Arena>),
    /// The high-score list and name entry.
    HighScores(HighScores),
}

impl Level {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Splash(_) => "splash",
            Level::Menu(_) => "menu",
            Level::Arena(_) => "arena",
            Level::HighScores(_) => "high scores",
        }
    }

    /// Called when the level becomes current.
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be laid out.
    pub fn start(&mut self, ctx: &mut Context<'_>) -> Result<(), GameError> {
        match self {
            Level::Splash(_) => {}
            Level::Menu(menu) => menu.start(ctx),
            Level::Arena(arena) => arena.start(ctx)?,
            Level::HighScores(scores) => scores.start(ctx),
        }
        Ok(())
    }

    /// Called when the level stops being current.
    pub fn end(&mut self) {
        match self {
            Level::Splash(_) | Level::Menu(_) => {}
            Level::Arena(arena) => arena.end(),
            Level::HighScores(scores) => scores.end(),
        }
    }

    /// Handle a key press.
    ///
    /// # Errors
    ///
    /// Returns an error if the board breaks.
    pub fn key(&mut self, key: Key, ctx: &mut Context<'_>) -> Result<Transition, GameError> {
        Ok(match self {
            Level::Splash(splash) => splash.key(key),
            Level::Menu(menu) => menu.key(key, ctx),
            Level::Arena(arena) => arena.key(key, ctx),
            Level::HighScores(scores) => scores.key(key, ctx),
        })
    }

    /// Let `dt` of game time pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the board breaks.
    pub fn advance(&mut self, dt: Duration, ctx: &mut Context<'_>) -> Result<Transition, GameError> {
        match self {
            Level::Splash(_) | Level::Menu(_) => {}
            Level::Arena(arena) => arena.advance(dt, ctx)?,
            Level::HighScores(scores) => scores.advance(dt, ctx),
        }
        Ok(Transition::Stay)
    }

    /// Draw the level.
    pub fn paint<C: Canvas + ?Sized>(&self, config: &GameConfig, fonts: &Fonts, canvas: &mut C) {
        match self {
            Level::Splash(splash) => splash.paint(canvas),
            Level::Menu(menu) => menu.paint(canvas),
            Level::Arena(arena) => arena.paint(config, fonts, canvas),
            Level::HighScores(scores) => scores.paint(canvas),
        }
    }
}

#[derive(Debug, Clone)]
struct LevelSlot {
    level: Level,
    connections: Vec<LevelId>,
}

/// The top-level controller: owns the levels and routes input and time to
/// the current one.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    fonts: Fonts,
    session: Session,
    ids: IdAllocator,
    levels: HashMap<LevelId, LevelSlot>,
    current: LevelId,
    paused: bool,
}

impl Game {
    /// Build every level, wire them together and show the title screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the fonts cannot be decoded.
    pub fn new(config: GameConfig, session: Session) -> Result<Self, GameError> {
        let fonts = Fonts::load()?;
        let mut game = Self {
            config,
            fonts,
            session,
            ids: IdAllocator::new(),
            levels: HashMap::new(),
            current: LevelId(0),
            paused: false,
        };

        let splash = game.add_level(Level::Splash(Splash::new(&game.fonts, &game.config)));
        let main_menu = game.add_level(Level::Menu(MenuLevel::main_menu(&game.fonts, &game.config)));
        let speed_menu = game.add_level(Level::Menu(MenuLevel::speed_menu(&game.fonts, &game.config)));
        let arena = game.add_level(Level::Arena(Box::new(Arena::new(&game.config))));
        let high_scores = game.add_level(Level::HighScores(HighScores::new(&game.fonts, &game.config)));

        game.add_connection(splash, main_menu);

        // Order matches the main menu's `MenuAction::Open` indices.
        game.add_connection(main_menu, arena);
        game.add_connection(main_menu, speed_menu);
        game.add_connection(main_menu, high_scores);

        game.add_connection(speed_menu, main_menu);

        game.add_connection(arena, main_menu);
        game.add_connection(arena, high_scores);

        game.add_connection(high_scores, main_menu);

        game.current = splash;
        Ok(game)
    }

    /// Register a level and return its id.
    pub fn add_level(&mut self, level: Level) -> LevelId {
        let id = self.ids.allocate();
        self.levels.insert(
            id,
            LevelSlot {
                level,
                connections: Vec::new(),
            },
        );
        id
    }

    /// Append a connection from `from` to `to`; returns its index in
    /// `from`'s table, or `None` if `from` is unknown.
    pub fn add_connection(&mut self, from: LevelId, to: LevelId) -> Option<usize> {
        let slot = self.levels.get_mut(&from)?;
        slot.connections.push(to);
        Some(slot.connections.len() - 1)
    }

    /// Id of the current level.
    #[must_use]
    pub const fn current_id(&self) -> LevelId {
        self.current
    }

    /// The current level.
    #[must_use]
    pub fn current(&self) -> Option<&Level> {
        self.levels.get(&self.current).map(|slot| &slot.level)
    }

    /// Shared runtime state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The configuration the game was built with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether time is frozen.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze or resume time. Key presses still reach the level.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            tracing::debug!(paused, "pause toggled");
        }
        self.paused = paused;
    }

    /// Send a key press to the current level.
    ///
    /// # Errors
    ///
    /// Returns an error if the board breaks.
    pub fn key(&mut self, key: Key) -> Result<(), GameError> {
        let mut ctx = Context {
            config: &self.config,
            session: &mut self.session,
            fonts: &self.fonts,
        };
        let Some(slot) = self.levels.get_mut(&self.current) else {
            return Ok(());
        };
        let transition = slot.level.key(key, &mut ctx)?;
        self.apply(transition)
    }

    /// Let `dt` of time pass on the current level. Does nothing while paused.
    ///
    /// # Errors
    ///
    /// Returns an error if the board breaks.
    pub fn advance(&mut self, dt: Duration) -> Result<(), GameError> {
        if self.paused {
            return Ok(());
        }
        let mut ctx = Context {
            config: &self.config,
            session: &mut self.session,
            fonts: &self.fonts,
        };
        let Some(slot) = self.levels.get_mut(&self.current) else {
            return Ok(());
        };
        let transition = slot.level.advance(dt, &mut ctx)?;
        self.apply(transition)
    }

    /// Draw the current level.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(slot) = self.levels.get(&self.current) {
            slot.level.paint(&self.config, &self.fonts, canvas);
        }
    }

    fn apply(&mut self, transition: Transition) -> Result<(), GameError> {
        match transition {
            Transition::Stay => Ok(()),
            Transition::Switch(signal) => self.switch(signal),
        }
    }

    /// Follow connection `signal` of the current level. Indices past the
    /// end use the last connection; a level without connections stays.
    ///
    /// # Errors
    ///
    /// Returns an error if the next level fails to start.
    pub fn switch(&mut self, signal: usize) -> Result<(), GameError> {
        let Some(slot) = self.levels.get(&self.current) else {
            return Ok(());
        };
        let Some(last) = slot.connections.len().checked_sub(1) else {
            return Ok(());
        };
        let next = slot.connections[signal.min(last)];

        if let Some(slot) = self.levels.get_mut(&self.current) {
            slot.level.end();
        }
        let mut ctx = Context {
            config: &self.config,
            session: &mut self.session,
            fonts: &self.fonts,
        };
        if let Some(slot) = self.levels.get_mut(&next) {
            tracing::info!(from = self.current.get(), to = next.get(), level = slot.level.name(), "switching level");
            slot.level.start(&mut ctx)?;
        }
        self.current = next;
        Ok(())
    }
}
