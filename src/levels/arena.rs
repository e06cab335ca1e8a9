//! The playfield level: a running game, the death animation and the
//! game-over card.

use super::{Context, Key, Transition};
use crate::config::GameConfig;
use crate::game::{
    BonusCountdown, CountdownTick, Direction, GameGrid, InvariantViolation, ScoreBoard, StepOutcome,
};
use crate::render::{Alignment, Canvas, Fonts};
use crate::timer::Timer;
use std::time::Duration;

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArenaState {
    /// Not started yet.
    #[default]
    Idle,
    /// The snake is moving.
    Running,
    /// The snake crashed and is blinking.
    Dying,
    /// The final score is shown.
    GameOver,
}

/// A game of snake with its score, bonus countdown and timers.
#[derive(Debug, Clone)]
pub struct Arena {
    grid: GameGrid,
    score: ScoreBoard,
    countdown: BonusCountdown,
    countdown_visible: bool,
    state: ArenaState,
    apples: u32,
    blinks: u32,
    move_timer: Timer,
    bonus_timer: Timer,
    blink_timer: Timer,
}

impl Arena {
    /// An idle arena sized for `config`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let (width, height) = config.grid_size();
        Self {
            grid: GameGrid::new(width, height, config.snake_length, config.seed),
            score: ScoreBoard::new(),
            countdown: BonusCountdown::new(),
            countdown_visible: false,
            state: ArenaState::Idle,
            apples: 0,
            blinks: 0,
            move_timer: Timer::new(),
            bonus_timer: Timer::new(),
            blink_timer: Timer::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn state(&self) -> ArenaState {
        self.state
    }

    /// The board.
    #[must_use]
    pub const fn grid(&self) -> &GameGrid {
        &self.grid
    }

    /// Score so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score.score()
    }

    /// The bonus countdown.
    #[must_use]
    pub const fn countdown(&self) -> &BonusCountdown {
        &self.countdown
    }

    /// Whether a bonus is on the board and its countdown is shown.
    #[must_use]
    pub const fn countdown_visible(&self) -> bool {
        self.countdown_visible
    }

    /// Apples eaten since the last bonus appeared.
    #[must_use]
    pub const fn apples_since_bonus(&self) -> u32 {
        self.apples
    }

    /// Start a new game at the session's speed.
    ///
    /// # Errors
    ///
    /// Returns an error if the snake cannot be laid out.
    pub fn start(&mut self, ctx: &Context<'_>) -> Result<(), InvariantViolation> {
        self.end();
        self.score.reset();
        self.countdown.reset(0);
        self.countdown_visible = false;
        self.apples = 0;
        self.blinks = 0;

        let speed = ctx.session.speed;
        self.grid.set_speed(speed);
        self.grid.start()?;
        self.move_timer.start(speed.tick());
        self.state = ArenaState::Running;
        tracing::info!(%speed, "game started");
        Ok(())
    }

    /// Stop every timer.
    pub fn end(&mut self) {
        self.move_timer.stop();
        self.bonus_timer.stop();
        self.blink_timer.stop();
    }

    /// Arrows steer; confirm leaves the game-over card.
    pub fn key(&mut self, key: Key, ctx: &mut Context<'_>) -> Transition {
        let direction = match key {
            Key::Up => Direction::Up,
            Key::Down => Direction::Down,
            Key::Left => Direction::Left,
            Key::Right => Direction::Right,
            Key::Confirm => {
                if self.state != ArenaState::GameOver {
                    return Transition::Stay;
                }
                return match ctx.session.pending_rank {
                    Some(_) => Transition::Switch(1),
                    None => Transition::Switch(0),
                };
            }
        };
        if !self.grid.turn(direction) {
            tracing::trace!(?direction, "reverse turn ignored");
        }
        Transition::Stay
    }

    /// Let `dt` pass on whichever timers are running.
    ///
    /// # Errors
    ///
    /// Returns an error if the board breaks.
    pub fn advance(&mut self, dt: Duration, ctx: &mut Context<'_>) -> Result<(), InvariantViolation> {
        match self.state {
            ArenaState::Idle | ArenaState::GameOver => {}
            ArenaState::Running => {
                for _ in 0..self.move_timer.advance(dt) {
                    if self.state != ArenaState::Running {
                        break;
                    }
                    self.step(ctx.config)?;
                }
                for _ in 0..self.bonus_timer.advance(dt) {
                    self.tick_countdown();
                }
            }
            ArenaState::Dying => {
                for _ in 0..self.blink_timer.advance(dt) {
                    self.blinks += 1;
                    self.grid.set_draw_snake(self.blinks % 2 == 0);
                    if self.blinks >= ctx.config.death_blinks {
                        self.game_over(ctx);
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn step(&mut self, config: &GameConfig) -> Result<(), InvariantViolation> {
        match self.grid.step()? {
            StepOutcome::Moved => {}
            StepOutcome::AppleEaten { points } => {
                self.score.add(points);
                self.apples += 1;
                if self.apples >= config.bonus_trigger {
                    self.apples = 0;
                    self.spawn_bonus(config)?;
                }
            }
            StepOutcome::BonusEaten => {
                let value = self.countdown.value();
                self.score.add(value);
                self.bonus_timer.stop();
                self.countdown_visible = false;
                tracing::debug!(value, "bonus eaten");
            }
            StepOutcome::Collision => {
                self.move_timer.stop();
                self.bonus_timer.stop();
                self.blink_timer.start(config.death_blink_period());
                self.state = ArenaState::Dying;
                tracing::info!(score = self.score.score(), length = self.grid.length(), "collision");
            }
        }
        Ok(())
    }

    fn spawn_bonus(&mut self, config: &GameConfig) -> Result<(), InvariantViolation> {
        let kind = self.grid.add_bonus()?;
        self.countdown.reset(config.bonus_countdown);
        self.bonus_timer.start(config.bonus_countdown_period());
        self.countdown_visible = true;
        tracing::debug!(?kind, "bonus spawned");
        Ok(())
    }

    fn tick_countdown(&mut self) {
        if let CountdownTick::Expired = self.countdown.tick() {
            self.bonus_timer.stop();
            self.countdown_visible = false;
            self.grid.remove_bonus();
            tracing::debug!("bonus expired");
        }
    }

    fn game_over(&mut self, ctx: &mut Context<'_>) {
        self.blink_timer.stop();
        self.state = ArenaState::GameOver;

        let score = self.score.score();
        let scores = &mut ctx.session.scores;
        if scores.is_qualifying(score) {
            ctx.session.pending_rank = scores.insert(score);
        }
        tracing::info!(score, rank = ?ctx.session.pending_rank, "game over");
    }

    /// Draw the board, or the game-over card once the game has ended.
    pub fn paint<C: Canvas + ?Sized>(&self, config: &GameConfig, fonts: &Fonts, canvas: &mut C) {
        let width = i32::from(config.screen_width);
        let height = i32::from(config.screen_height);

        if self.state == ArenaState::GameOver {
            let score = self.score.as_string();
            let lines: [&str; 3] = ["Game over!", "Your score:", &score];
            let card_width = u32::from(config.screen_width.saturating_sub(2));
            for (line, y) in lines.into_iter().zip([10, 27, 44]) {
                fonts
                    .main
                    .render_text(line, Some(card_width), Some(17), Alignment::Center)
                    .paint(0, y, false, canvas);
            }
            return;
        }

        self.score.paint(&fonts.digits, canvas);
        if self.countdown_visible {
            self.countdown.paint(&fonts.digits, config.screen_width, canvas);
        }

        for x in 2..width - 2 {
            canvas.plot(x, 8);
            canvas.plot(x, 10);
            canvas.plot(x, height - 3);
        }
        for y in 11..height - 3 {
            canvas.plot(2, y);
            canvas.plot(width - 3, y);
        }

        self.grid.paint(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Speed;
    use crate::game::{BonusHalf, BonusKind, CellKind, Coord};
    use crate::levels::Session;
    use crate::render::Screen;
    use crate::scores::HighScoreTable;

    struct Harness {
        config: GameConfig,
        session: Session,
        fonts: Fonts,
    }

    impl Harness {
        fn new(config: GameConfig) -> Self {
            Self {
                session: Session::new(config.speed, HighScoreTable::new(), None),
                config,
                fonts: Fonts::load().unwrap(),
            }
        }

        fn ctx(&mut self) -> Context<'_> {
            Context {
                config: &self.config,
                session: &mut self.session,
                fonts: &self.fonts,
            }
        }
    }

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        }
    }

    fn started(harness: &mut Harness) -> Arena {
        let mut arena = Arena::new(&harness.config);
        arena.start(&harness.ctx()).unwrap();
        arena
    }

    fn clear_food(arena: &mut Arena) {
        arena.grid.remove_bonus();
        let apples: Vec<Coord> = arena
            .grid
            .iter()
            .filter(|(_, cell)| cell.kind == CellKind::Apple)
            .map(|(at, _)| at)
            .collect();
        for at in apples {
            if let Some(cell) = arena.grid.cell_mut(at) {
                cell.reset();
            }
        }
    }

    fn put_apple(arena: &mut Arena, at: Coord) {
        let cell = arena.grid.cell_mut(at).unwrap();
        cell.kind = CellKind::Apple;
        cell.food = true;
    }

    /// Steer the snake into its own body: up, left, then down.
    fn crash(arena: &mut Arena, harness: &mut Harness) {
        let tick = harness.session.speed.tick();
        for key in [Key::Up, Key::Left, Key::Down] {
            arena.key(key, &mut harness.ctx());
            arena.advance(tick, &mut harness.ctx()).unwrap();
        }
    }

    #[test]
    fn test_start_runs_at_session_speed() {
        let mut harness = Harness::new(config());
        harness.session.speed = Speed::Fast;
        let arena = started(&mut harness);
        assert_eq!(arena.state(), ArenaState::Running);
        assert_eq!(arena.grid().speed(), Speed::Fast);
        assert_eq!(arena.move_timer.period(), Some(Speed::Fast.tick()));
        assert_eq!(arena.score(), 0);
    }

    #[test]
    fn test_each_tick_moves_once() {
        let mut harness = Harness::new(config());
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        let tick = Speed::Normal.tick();
        arena.advance(tick * 3, &mut harness.ctx()).unwrap();
        assert_eq!(arena.grid().head(), Coord::new(15, 8));
    }

    #[test]
    fn test_apple_scores_speed_points() {
        let mut harness = Harness::new(config());
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        put_apple(&mut arena, Coord::new(13, 8));
        arena.advance(Speed::Normal.tick(), &mut harness.ctx()).unwrap();
        assert_eq!(arena.score(), 5);
        assert_eq!(arena.apples_since_bonus(), 1);
        assert_eq!(arena.grid().length(), 11);
    }

    #[test]
    fn test_bonus_spawns_then_expires() {
        let mut harness = Harness::new(GameConfig {
            bonus_trigger: 1,
            ..config()
        });
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        put_apple(&mut arena, Coord::new(13, 8));
        arena.advance(Speed::Normal.tick(), &mut harness.ctx()).unwrap();

        assert!(arena.countdown_visible());
        assert_eq!(arena.countdown().value(), 20);
        assert!(arena.grid().bonus().is_some());
        assert_eq!(arena.apples_since_bonus(), 0);

        // Freeze the snake so only the countdown runs.
        arena.move_timer.stop();
        let period = harness.config.bonus_countdown_period();
        arena.advance(period * 19, &mut harness.ctx()).unwrap();
        assert_eq!(arena.countdown().value(), 1);
        assert!(arena.countdown_visible());

        arena.advance(period, &mut harness.ctx()).unwrap();
        assert!(!arena.countdown_visible());
        assert!(arena.grid().bonus().is_none());
        assert!(!arena.bonus_timer.is_running());
    }

    #[test]
    fn test_bonus_without_room_is_fatal() {
        let mut harness = Harness::new(GameConfig {
            bonus_trigger: 1,
            ..config()
        });
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        put_apple(&mut arena, Coord::new(13, 8));
        // Leave only isolated free cells: every other column of the top row.
        let blocked: Vec<Coord> = arena
            .grid
            .iter()
            .filter(|(at, cell)| cell.kind == CellKind::Free && !(at.y == 0 && at.x % 2 == 0))
            .map(|(at, _)| at)
            .collect();
        for at in blocked {
            arena.grid.cell_mut(at).unwrap().kind = CellKind::Apple;
        }

        let err = arena.advance(Speed::Normal.tick(), &mut harness.ctx()).unwrap_err();
        assert!(err.message.contains("bonus"), "{err}");
        assert!(arena.grid().bonus().is_none());
        assert!(!arena.countdown_visible());
    }

    #[test]
    fn test_bonus_pays_remaining_countdown() {
        let mut harness = Harness::new(GameConfig {
            bonus_trigger: 1,
            ..config()
        });
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        put_apple(&mut arena, Coord::new(13, 8));
        arena.advance(Speed::Normal.tick(), &mut harness.ctx()).unwrap();

        // Move the bonus straight ahead of the head.
        arena.grid.remove_bonus();
        clear_food(&mut arena);
        let head = arena.grid().head();
        for (x, half) in [(head.x + 1, BonusHalf::First), (head.x + 2, BonusHalf::Second)] {
            let cell = arena.grid.cell_mut(Coord::new(x, head.y)).unwrap();
            cell.kind = CellKind::Bonus(BonusKind::A, half);
            cell.food = true;
        }
        arena.countdown.reset(17);

        arena.move_timer.start(Speed::Normal.tick());
        arena.bonus_timer.stop();
        arena.advance(Speed::Normal.tick(), &mut harness.ctx()).unwrap();
        assert_eq!(arena.score(), 5 + 17);
        assert!(!arena.countdown_visible());
    }

    #[test]
    fn test_game_over_after_exact_blink_count() {
        let mut harness = Harness::new(config());
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        crash(&mut arena, &mut harness);
        assert_eq!(arena.state(), ArenaState::Dying);
        assert!(!arena.move_timer.is_running());

        let blink = harness.config.death_blink_period();
        arena.advance(blink, &mut harness.ctx()).unwrap();
        assert!(!arena.grid().draw_snake());
        arena.advance(blink, &mut harness.ctx()).unwrap();
        assert!(arena.grid().draw_snake());

        arena.advance(blink * 7, &mut harness.ctx()).unwrap();
        assert_eq!(arena.state(), ArenaState::Dying);
        arena.advance(blink, &mut harness.ctx()).unwrap();
        assert_eq!(arena.state(), ArenaState::GameOver);
        assert!(!arena.blink_timer.is_running());
    }

    #[test]
    fn test_zero_score_returns_to_menu() {
        let mut harness = Harness::new(config());
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        crash(&mut arena, &mut harness);
        arena
            .advance(harness.config.death_blink_period() * 10, &mut harness.ctx())
            .unwrap();
        assert_eq!(harness.session.pending_rank, None);
        assert_eq!(arena.key(Key::Confirm, &mut harness.ctx()), Transition::Switch(0));
    }

    #[test]
    fn test_qualifying_score_goes_to_high_scores() {
        let mut harness = Harness::new(config());
        let mut arena = started(&mut harness);
        clear_food(&mut arena);
        put_apple(&mut arena, Coord::new(13, 8));
        arena.advance(Speed::Normal.tick(), &mut harness.ctx()).unwrap();
        clear_food(&mut arena);
        crash(&mut arena, &mut harness);
        assert_eq!(arena.state(), ArenaState::Dying);
        assert_eq!(arena.key(Key::Confirm, &mut harness.ctx()), Transition::Stay);

        arena
            .advance(harness.config.death_blink_period() * 10, &mut harness.ctx())
            .unwrap();
        assert_eq!(harness.session.pending_rank, Some(0));
        assert_eq!(harness.session.scores.get(0).unwrap().score, 5);
        assert_eq!(arena.key(Key::Confirm, &mut harness.ctx()), Transition::Switch(1));
    }

    #[test]
    fn test_end_stops_timers() {
        let mut harness = Harness::new(config());
        let mut arena = started(&mut harness);
        arena.end();
        let head = arena.grid().head();
        arena.advance(Duration::from_secs(1), &mut harness.ctx()).unwrap();
        assert_eq!(arena.grid().head(), head);
    }

    #[test]
    fn test_paint_draws_border_and_card() {
        let mut harness = Harness::new(config());
        let mut arena = started(&mut harness);
        let mut screen = Screen::new(104, 84);
        arena.paint(&harness.config, &harness.fonts, &mut screen);
        assert!(screen.get(2, 8));
        assert!(screen.get(101, 81));
        assert!(screen.get(2, 40));
        assert!(!screen.get(2, 9));

        clear_food(&mut arena);
        crash(&mut arena, &mut harness);
        arena
            .advance(harness.config.death_blink_period() * 10, &mut harness.ctx())
            .unwrap();
        let mut card = Screen::new(104, 84);
        arena.paint(&harness.config, &harness.fonts, &mut card);
        assert!(!card.get(2, 8));
        assert!(card.image().lit_count() > 0);
    }
}
