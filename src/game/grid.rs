//! The toroidal playfield and the snake movement step.

use super::cell::{BonusHalf, BonusKind, Cell, CellKind, Direction, corner_direction};
use super::invariants::{InvariantViolation, assert_invariants};
use crate::config::Speed;
use crate::render::{Canvas, Image};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Pixel offset of cell `(0, 0)` on screen.
pub const GRID_ORIGIN: (i32, i32) = (4, 12);

/// Side of one cell in pixels.
pub const CELL_PIXELS: i32 = 4;

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// What happened during one movement tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved onto a free cell or its own vacating tail.
    Moved,
    /// The snake ate an apple and grew by one.
    AppleEaten {
        /// Points for the current speed.
        points: u32,
    },
    /// The snake ate half of the bonus item; both halves are gone.
    BonusEaten,
    /// The snake ran into itself. Nothing moved.
    Collision,
}

/// The playfield: a `width`×`height` grid of cells that wraps at every edge.
#[derive(Debug, Clone)]
pub struct GameGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    snake_length: u32,
    head: Coord,
    direction: Direction,
    next_direction: Direction,
    length: u32,
    speed: Speed,
    draw_snake: bool,
    bonus: Option<[Coord; 2]>,
    rng: SmallRng,
}

impl GameGrid {
    /// Create an empty grid. Call [`GameGrid::start`] to lay out the snake.
    ///
    /// Placement is reproducible when `seed` is set.
    #[must_use]
    pub fn new(width: u16, height: u16, snake_length: u16, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
            snake_length: u32::from(snake_length),
            head: Coord::default(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            length: u32::from(snake_length),
            speed: Speed::default(),
            draw_snake: true,
            bonus: None,
            rng,
        };
        grid.reset();
        grid
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Position of the head.
    #[must_use]
    pub const fn head(&self) -> Coord {
        self.head
    }

    /// Direction of the last step.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next step will take.
    #[must_use]
    pub const fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Current snake length.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Speed used to score apples.
    #[must_use]
    pub const fn speed(&self) -> Speed {
        self.speed
    }

    /// Set the speed used to score apples.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Whether snake cells are painted.
    #[must_use]
    pub const fn draw_snake(&self) -> bool {
        self.draw_snake
    }

    /// Show or hide the snake when painting.
    pub fn set_draw_snake(&mut self, visible: bool) {
        self.draw_snake = visible;
    }

    /// The two cells of the bonus item on the board, if any.
    #[must_use]
    pub const fn bonus(&self) -> Option<[Coord; 2]> {
        self.bonus
    }

    /// The cell at `at`, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        let index = self.index(at)?;
        Some(&self.cells[index])
    }

    /// Mutable access to the cell at `at`.
    ///
    /// Editing cells by hand can break the snake chain; see
    /// [`super::invariants::check_invariants`].
    pub fn cell_mut(&mut self, at: Coord) -> Option<&mut Cell> {
        let index = self.index(at)?;
        Some(&mut self.cells[index])
    }

    /// Iterate over every cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let width = usize::from(self.width.max(1));
        self.cells.iter().enumerate().map(move |(i, cell)| {
            // Both fit in u16: i < width * height.
            (Coord::new((i % width) as u16, (i / width) as u16), cell)
        })
    }

    /// The neighbouring cell in `direction`, wrapping at the edges.
    #[must_use]
    pub fn neighbor(&self, at: Coord, direction: Direction) -> Coord {
        let (dx, dy) = direction.delta();
        let wrap = |v: u16, d: i32, size: u16| {
            let size = i32::from(size.max(1));
            // In [0, size) after rem_euclid, so the cast is lossless.
            (i32::from(v) + d).rem_euclid(size) as u16
        };
        Coord::new(wrap(at.x, dx, self.width), wrap(at.y, dy, self.height))
    }

    /// Queue a turn for the next step.
    ///
    /// Reversing onto the snake's own neck is ignored; returns whether the
    /// turn was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Clear the board and restore the starting snake parameters.
    pub fn reset(&mut self) {
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.head = Coord::new(self.width / 2, self.height / 2);
        self.length = self.snake_length;
        self.draw_snake = true;
        self.bonus = None;
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Reset, lay the snake out left of centre facing right, and add an apple.
    ///
    /// # Errors
    ///
    /// Returns an error if the snake does not fit or no cell is left for the
    /// apple.
    pub fn start(&mut self) -> Result<(), InvariantViolation> {
        self.reset();
        let Coord { x, y } = self.head;
        if self.length < 2 || self.length > u32::from(x) + 1 {
            return Err(InvariantViolation {
                message: format!(
                    "snake of length {} does not fit left of column {x}",
                    self.length
                ),
            });
        }

        for offset in 0..self.length {
            // offset <= x, checked above.
            let at = Coord::new(x - offset as u16, y);
            let kind = match offset {
                0 => CellKind::Head,
                o if o == self.length - 1 => CellKind::Tail,
                _ => CellKind::Body,
            };
            let counter = self.length - offset;
            if let Some(cell) = self.cell_mut(at) {
                cell.kind = kind;
                cell.direction = Direction::Right;
                cell.counter = counter;
            }
        }

        self.add_apple()?;
        tracing::debug!(length = self.length, head = ?self.head, "snake laid out");
        Ok(())
    }

    /// Every free cell, row by row.
    #[must_use]
    pub fn free_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.kind == CellKind::Free)
            .map(|(at, _)| at)
            .collect()
    }

    /// Left cells of every horizontally adjacent free pair.
    ///
    /// The scan does not wrap, so a pair never straddles the side edge.
    #[must_use]
    pub fn free_pairs(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(at, cell)| {
                at.x + 1 < self.width
                    && cell.kind == CellKind::Free
                    && self
                        .cell(Coord::new(at.x + 1, at.y))
                        .is_some_and(|right| right.kind == CellKind::Free)
            })
            .map(|(at, _)| at)
            .collect()
    }

    /// Place an apple on a uniformly random free cell.
    ///
    /// # Errors
    ///
    /// Returns an error if no cell is free.
    pub fn add_apple(&mut self) -> Result<Coord, InvariantViolation> {
        let free = self.free_cells();
        if free.is_empty() {
            return Err(InvariantViolation {
                message: "no free cell left for an apple".to_string(),
            });
        }
        let at = free[self.rng.random_range(0..free.len())];
        if let Some(cell) = self.cell_mut(at) {
            cell.kind = CellKind::Apple;
            cell.food = true;
        }
        Ok(at)
    }

    /// Place a random bonus item on a random free pair of cells.
    ///
    /// A bonus already on the board is removed first.
    ///
    /// # Errors
    ///
    /// Returns an error if no two horizontally adjacent cells are free.
    pub fn add_bonus(&mut self) -> Result<BonusKind, InvariantViolation> {
        self.remove_bonus();
        let pairs = self.free_pairs();
        if pairs.is_empty() {
            return Err(InvariantViolation {
                message: "no free cell pair left for a bonus".to_string(),
            });
        }
        let left = pairs[self.rng.random_range(0..pairs.len())];
        let kind = BonusKind::ALL[self.rng.random_range(0..BonusKind::ALL.len())];
        let right = Coord::new(left.x + 1, left.y);

        for (at, half) in [(left, BonusHalf::First), (right, BonusHalf::Second)] {
            if let Some(cell) = self.cell_mut(at) {
                cell.kind = CellKind::Bonus(kind, half);
                cell.food = true;
            }
        }
        self.bonus = Some([left, right]);
        tracing::debug!(?kind, at = ?left, "bonus placed");
        Ok(kind)
    }

    /// Remove the bonus item, if any.
    pub fn remove_bonus(&mut self) {
        let Some(cells) = self.bonus.take() else {
            return;
        };
        for at in cells {
            if let Some(cell) = self.cell_mut(at) {
                cell.kind = CellKind::Free;
                cell.food = false;
            }
        }
    }

    /// Advance the snake by one cell.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two cells are free, if the board is
    /// left without a valid snake or if the eaten apple cannot be replaced.
    pub fn step(&mut self) -> Result<StepOutcome, InvariantViolation> {
        let free = self.cells.iter().filter(|cell| cell.kind == CellKind::Free).count();
        if free < 2 {
            return Err(InvariantViolation {
                message: format!("step needs two free cells, found {free}"),
            });
        }

        self.direction = self.next_direction;
        let next = self.neighbor(self.head, self.direction);
        let future = self.neighbor(next, self.direction);
        let (Some(head_index), Some(next_index)) = (self.index(self.head), self.index(next)) else {
            return Err(InvariantViolation {
                message: format!("head {:?} is off a {}x{} grid", self.head, self.width, self.height),
            });
        };

        let mut added_length = 0;
        let outcome = match self.cells[next_index].kind {
            CellKind::Apple => {
                added_length = 1;
                self.add_apple()?;
                StepOutcome::AppleEaten {
                    points: self.speed.points(),
                }
            }
            CellKind::Bonus(..) => {
                self.remove_bonus();
                self.cells[next_index].food = true;
                StepOutcome::BonusEaten
            }
            CellKind::Free | CellKind::Tail => StepOutcome::Moved,
            CellKind::Head | CellKind::Body | CellKind::Corner => {
                return Ok(StepOutcome::Collision);
            }
        };

        let mouth_open = self
            .cell(future)
            .is_some_and(|cell| cell.kind == CellKind::Apple);
        let new_head = &mut self.cells[next_index];
        new_head.counter = self.length + 1;
        new_head.direction = self.direction;
        new_head.kind = CellKind::Head;
        new_head.mouth_open = mouth_open;

        self.length += added_length;

        let old_head = &mut self.cells[head_index];
        match corner_direction(old_head.direction, self.direction) {
            Some(corner) => {
                old_head.kind = CellKind::Corner;
                old_head.corner = corner;
            }
            None => old_head.kind = CellKind::Body,
        }
        old_head.mouth_open = false;

        self.head = next;
        self.shift_chain(added_length)?;
        assert_invariants(self);
        Ok(outcome)
    }

    /// Age every snake cell by one step, free the cell that fell off the end
    /// and mark the new last cell as the tail.
    fn shift_chain(&mut self, added_length: u32) -> Result<(), InvariantViolation> {
        // (counter, index) of the two lowest survivors.
        let mut lowest: Option<(u32, usize)> = None;
        let mut second: Option<(u32, usize)> = None;

        for (index, cell) in self.cells.iter_mut().enumerate() {
            if cell.counter == 0 || cell.kind == CellKind::Apple {
                continue;
            }
            cell.counter = cell.counter - 1 + added_length;
            if cell.counter == 0 {
                cell.reset();
                continue;
            }
            let entry = (cell.counter, index);
            if lowest.is_none_or(|(c, _)| entry.0 < c) {
                second = lowest;
                lowest = Some(entry);
            } else if second.is_none_or(|(c, _)| entry.0 < c) {
                second = Some(entry);
            }
        }

        let (Some((_, tail)), Some((_, before_tail))) = (lowest, second) else {
            return Err(InvariantViolation {
                message: "snake has fewer than two segments".to_string(),
            });
        };
        let direction = self.cells[before_tail].direction;
        let tail = &mut self.cells[tail];
        tail.kind = CellKind::Tail;
        tail.direction = direction;
        Ok(())
    }

    /// Paint every occupied cell. Snake cells are skipped while the snake is
    /// hidden.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for (at, cell) in self.iter() {
            if !self.draw_snake && cell.kind.is_snake() {
                continue;
            }
            let Some(sprite) = cell.sprite() else {
                continue;
            };
            let x = GRID_ORIGIN.0 + i32::from(at.x) * CELL_PIXELS;
            let y = GRID_ORIGIN.1 + i32::from(at.y) * CELL_PIXELS;
            Image::from_sprite(sprite).paint(x, y, false, canvas);
        }
    }

    /// Text dump of the board, one symbol per cell.
    ///
    /// ```text
    /// _ _ _ O _
    /// # # & _ _
    /// ```
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (at, cell) in self.iter() {
            if at.x > 0 {
                out.push(' ');
            }
            out.push(cell.kind.symbol());
            if at.x + 1 == self.width {
                out.push('\n');
            }
        }
        out
    }

    fn index(&self, at: Coord) -> Option<usize> {
        (at.x < self.width && at.y < self.height)
            .then(|| usize::from(at.y) * usize::from(self.width) + usize::from(at.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::invariants::check_invariants;

    fn started(width: u16, height: u16, length: u16) -> GameGrid {
        let mut grid = GameGrid::new(width, height, length, Some(42));
        grid.start().unwrap();
        grid
    }

    fn clear_apples(grid: &mut GameGrid) {
        let apples: Vec<Coord> = grid
            .iter()
            .filter(|(_, c)| c.kind == CellKind::Apple)
            .map(|(at, _)| at)
            .collect();
        for at in apples {
            grid.cell_mut(at).unwrap().reset();
        }
    }

    #[test]
    fn test_start_layout() {
        let grid = started(10, 10, 3);
        assert_eq!(grid.head(), Coord::new(5, 5));
        assert_eq!(grid.cell(Coord::new(5, 5)).unwrap().kind, CellKind::Head);
        assert_eq!(grid.cell(Coord::new(4, 5)).unwrap().kind, CellKind::Body);
        assert_eq!(grid.cell(Coord::new(3, 5)).unwrap().kind, CellKind::Tail);
        assert_eq!(grid.cell(Coord::new(3, 5)).unwrap().counter, 1);
        assert_eq!(grid.iter().filter(|(_, c)| c.kind == CellKind::Apple).count(), 1);
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_straight_step() {
        let mut grid = started(10, 10, 3);
        clear_apples(&mut grid);

        assert_eq!(grid.step().unwrap(), StepOutcome::Moved);
        assert_eq!(grid.head(), Coord::new(6, 5));
        assert_eq!(grid.cell(Coord::new(6, 5)).unwrap().kind, CellKind::Head);
        assert_eq!(grid.cell(Coord::new(5, 5)).unwrap().kind, CellKind::Body);
        assert_eq!(grid.cell(Coord::new(4, 5)).unwrap().kind, CellKind::Tail);
        assert_eq!(*grid.cell(Coord::new(3, 5)).unwrap(), Cell::default());
        assert_eq!(grid.length(), 3);
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_eat_apple_grows_and_respawns() {
        let mut grid = started(10, 10, 3);
        clear_apples(&mut grid);
        grid.cell_mut(Coord::new(6, 5)).unwrap().kind = CellKind::Apple;
        let free_before = grid.free_cells();

        let outcome = grid.step().unwrap();
        assert_eq!(outcome, StepOutcome::AppleEaten { points: 5 });
        assert_eq!(grid.length(), 4);
        // The tail stayed put.
        assert_eq!(grid.cell(Coord::new(3, 5)).unwrap().kind, CellKind::Tail);

        let apples: Vec<_> = grid
            .iter()
            .filter(|(_, c)| c.kind == CellKind::Apple)
            .map(|(at, _)| at)
            .collect();
        assert_eq!(apples.len(), 1);
        assert!(free_before.contains(&apples[0]));
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_swallowed_food_travels_down_body() {
        let mut grid = started(10, 10, 3);
        clear_apples(&mut grid);
        grid.cell_mut(Coord::new(6, 5)).unwrap().kind = CellKind::Apple;
        grid.cell_mut(Coord::new(6, 5)).unwrap().food = true;
        grid.step().unwrap();
        clear_apples(&mut grid);
        grid.step().unwrap();
        assert_eq!(grid.cell(Coord::new(6, 5)).unwrap().kind, CellKind::Body);
        assert_eq!(grid.cell(Coord::new(6, 5)).unwrap().sprite(), Some(crate::game::cell::FOOD_SPRITE));
    }

    #[test]
    fn test_mouth_opens_before_apple() {
        let mut grid = started(10, 10, 3);
        clear_apples(&mut grid);
        grid.cell_mut(Coord::new(7, 5)).unwrap().kind = CellKind::Apple;
        grid.step().unwrap();
        assert!(grid.cell(Coord::new(6, 5)).unwrap().mouth_open);
    }

    #[test]
    fn test_wraparound_all_edges() {
        let grid = GameGrid::new(5, 4, 2, Some(1));
        assert_eq!(grid.neighbor(Coord::new(4, 0), Direction::Right), Coord::new(0, 0));
        assert_eq!(grid.neighbor(Coord::new(0, 2), Direction::Left), Coord::new(4, 2));
        assert_eq!(grid.neighbor(Coord::new(1, 3), Direction::Down), Coord::new(1, 0));
        assert_eq!(grid.neighbor(Coord::new(1, 0), Direction::Up), Coord::new(1, 3));
    }

    #[test]
    fn test_snake_wraps_across_right_edge() {
        let mut grid = started(6, 3, 2);
        clear_apples(&mut grid);
        for _ in 0..3 {
            assert_eq!(grid.step().unwrap(), StepOutcome::Moved);
        }
        assert_eq!(grid.head(), Coord::new(0, 1));
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_reverse_turn_ignored() {
        let mut grid = started(10, 10, 3);
        assert!(!grid.turn(Direction::Left));
        assert_eq!(grid.next_direction(), Direction::Right);
        assert!(grid.turn(Direction::Up));
        // Reversal is judged against the last step, not the queued turn.
        assert!(grid.turn(Direction::Down));
        assert_eq!(grid.next_direction(), Direction::Down);
    }

    #[test]
    fn test_turn_leaves_corner() {
        let mut grid = started(10, 10, 4);
        clear_apples(&mut grid);
        grid.turn(Direction::Up);
        grid.step().unwrap();
        let corner = grid.cell(Coord::new(5, 5)).unwrap();
        assert_eq!(corner.kind, CellKind::Corner);
        assert_eq!(corner.corner, Direction::Right);
        assert_eq!(grid.head(), Coord::new(5, 4));
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_collision_halts_step() {
        let mut grid = started(10, 10, 5);
        clear_apples(&mut grid);
        grid.turn(Direction::Up);
        grid.step().unwrap();
        grid.turn(Direction::Left);
        grid.step().unwrap();
        grid.turn(Direction::Down);
        let before: Vec<Cell> = grid.iter().map(|(_, c)| *c).collect();
        assert_eq!(grid.step().unwrap(), StepOutcome::Collision);
        let after: Vec<Cell> = grid.iter().map(|(_, c)| *c).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_moving_into_vacating_tail() {
        // Curl a length-4 snake into a 2x2 square so the head enters the tail cell.
        let mut grid = GameGrid::new(8, 4, 4, Some(3));
        grid.start().unwrap();
        clear_apples(&mut grid);
        grid.turn(Direction::Down);
        grid.step().unwrap();
        grid.turn(Direction::Left);
        grid.step().unwrap();
        grid.turn(Direction::Up);
        assert_eq!(grid.cell(Coord::new(3, 2)).unwrap().kind, CellKind::Tail);
        assert_eq!(grid.step().unwrap(), StepOutcome::Moved);
        assert_eq!(grid.head(), Coord::new(3, 2));
        assert_eq!(grid.cell(Coord::new(4, 2)).unwrap().kind, CellKind::Tail);
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_bonus_placement_and_removal() {
        let mut grid = started(10, 10, 3);
        grid.add_bonus().unwrap();
        let [left, right] = grid.bonus().unwrap();
        assert_eq!(right, Coord::new(left.x + 1, left.y));
        assert!(grid.cell(left).unwrap().kind.is_bonus());
        assert!(grid.cell(right).unwrap().kind.is_bonus());

        grid.remove_bonus();
        assert!(grid.bonus().is_none());
        assert_eq!(grid.cell(left).unwrap().kind, CellKind::Free);
        assert_eq!(grid.cell(right).unwrap().kind, CellKind::Free);
    }

    #[test]
    fn test_eating_bonus_clears_both_halves() {
        let mut grid = started(10, 10, 3);
        clear_apples(&mut grid);
        for (x, half) in [(6, BonusHalf::First), (7, BonusHalf::Second)] {
            grid.cell_mut(Coord::new(x, 5)).unwrap().kind = CellKind::Bonus(BonusKind::B, half);
        }
        grid.bonus = Some([Coord::new(6, 5), Coord::new(7, 5)]);

        assert_eq!(grid.step().unwrap(), StepOutcome::BonusEaten);
        assert_eq!(grid.cell(Coord::new(7, 5)).unwrap().kind, CellKind::Free);
        let head = grid.cell(Coord::new(6, 5)).unwrap();
        assert_eq!(head.kind, CellKind::Head);
        assert!(head.food);
        assert_eq!(grid.length(), 3);
        assert!(grid.bonus().is_none());
    }

    #[test]
    fn test_free_pairs_do_not_wrap() {
        let mut grid = GameGrid::new(3, 1, 2, Some(0));
        assert_eq!(grid.free_pairs(), vec![Coord::new(0, 0), Coord::new(1, 0)]);
        grid.cell_mut(Coord::new(1, 0)).unwrap().kind = CellKind::Apple;
        assert!(grid.free_pairs().is_empty());
        assert!(grid.add_bonus().is_err());
    }

    #[test]
    fn test_step_needs_two_free_cells() {
        // Two snake cells and the apple leave one free cell on a 4x1 board.
        let mut grid = GameGrid::new(4, 1, 2, Some(1));
        grid.start().unwrap();
        assert_eq!(grid.free_cells().len(), 1);
        let head = grid.head();
        let err = grid.step().unwrap_err();
        assert!(err.message.contains("two free cells"), "{err}");
        assert_eq!(grid.head(), head);
    }

    #[test]
    fn test_full_board_is_invariant_violation() {
        let mut grid = GameGrid::new(2, 1, 2, Some(0));
        for x in 0..2 {
            grid.cell_mut(Coord::new(x, 0)).unwrap().kind = CellKind::Body;
        }
        assert!(grid.add_apple().is_err());
    }

    #[test]
    fn test_paint_hidden_snake() {
        let mut grid = started(10, 10, 3);
        let mut visible = 0;
        grid.paint(&mut |_, _| visible += 1);

        grid.set_draw_snake(false);
        let mut hidden = 0;
        grid.paint(&mut |_, _| hidden += 1);

        // Only the apple remains: its sprite has four lit pixels.
        assert_eq!(hidden, 4);
        assert!(visible > hidden);
    }

    #[test]
    fn test_paint_position() {
        let mut grid = GameGrid::new(4, 4, 2, Some(0));
        grid.cell_mut(Coord::new(1, 2)).unwrap().kind = CellKind::Apple;
        let mut points = Vec::new();
        grid.paint(&mut |x, y| points.push((x, y)));
        // Apple: (1,0), (0,1), (2,1), (1,2) inside the cell at (8, 20).
        assert_eq!(points, vec![(9, 20), (8, 21), (10, 21), (9, 22)]);
    }

    #[test]
    fn test_render_ascii() {
        let mut grid = GameGrid::new(4, 2, 2, Some(0));
        grid.start().unwrap();
        clear_apples(&mut grid);
        assert_eq!(grid.render_ascii(), "_ _ _ _\n_ ^ & _\n");
    }
}
