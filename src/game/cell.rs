//! Cells, directions and cell sprites.

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    #[default]
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

/// Which half of a two-cell bonus item a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusHalf {
    /// Left cell.
    First,
    /// Right cell.
    Second,
}

/// The four bonus item shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusKind {
    /// Shape A.
    A,
    /// Shape B.
    B,
    /// Shape C.
    C,
    /// Shape D.
    D,
}

impl BonusKind {
    /// All bonus shapes.
    pub const ALL: [BonusKind; 4] = [BonusKind::A, BonusKind::B, BonusKind::C, BonusKind::D];

    /// Sprites for the left and right halves.
    #[must_use]
    pub const fn sprites(self) -> (u16, u16) {
        match self {
            BonusKind::A => (0xcfac, 0x3750),
            BonusKind::B => (0xed90, 0xf753),
            BonusKind::C => (0xaf10, 0xaf00),
            BonusKind::D => (0x5dfc, 0xabf3),
        }
    }
}

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    /// Empty.
    #[default]
    Free,
    /// Straight snake segment.
    Body,
    /// The snake's head.
    Head,
    /// The snake's last segment.
    Tail,
    /// Snake segment where the snake turned.
    Corner,
    /// An apple.
    Apple,
    /// Half of a bonus item.
    Bonus(BonusKind, BonusHalf),
}

impl CellKind {
    /// Whether this is part of the snake.
    #[must_use]
    pub const fn is_snake(self) -> bool {
        matches!(
            self,
            CellKind::Body | CellKind::Head | CellKind::Tail | CellKind::Corner
        )
    }

    /// Whether this is half of a bonus item.
    #[must_use]
    pub const fn is_bonus(self) -> bool {
        matches!(self, CellKind::Bonus(..))
    }

    /// Single-character symbol used by text dumps.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Free => '_',
            CellKind::Body => '#',
            CellKind::Head => '&',
            CellKind::Tail => '^',
            CellKind::Corner => '%',
            CellKind::Apple => 'O',
            CellKind::Bonus(..) => '$',
        }
    }
}

/// Sprite of a digested food bulge inside the body.
pub const FOOD_SPRITE: u16 = 0x6bd6;
/// Sprite of an apple.
pub const APPLE_SPRITE: u16 = 0x252;

// Indexed by `Direction::index`: left, right, up, down.
const BODY_SPRITES: [u16; 4] = [0xbd0, 0xdb0, 0x6246, 0x6426];
const HEAD_SPRITES: [u16; 4] = [0xe68, 0x761, 0xa660, 0x66a];
const HEAD_OPEN_SPRITES: [u16; 4] = [0x2c4a, 0x4325, 0x5690, 0x965];
const TAIL_SPRITES: [u16; 4] = [0xf30, 0xfc0, 0x4466, 0x6644];
const CORNER_SPRITES: [u16; 4] = [0xca6, 0x356, 0x6ac0, 0x6530];

/// Orientation of the corner left behind when the snake turns from
/// `incoming` to `outgoing`. Returns `None` when the directions match.
///
/// Two turns share each orientation.
#[must_use]
pub const fn corner_direction(incoming: Direction, outgoing: Direction) -> Option<Direction> {
    use Direction::{Down, Left, Right, Up};
    match (incoming, outgoing) {
        (Right, Up) | (Down, Left) => Some(Right),
        (Left, Up) | (Down, Right) => Some(Left),
        (Left, Down) | (Up, Right) => Some(Up),
        (Right, Down) | (Up, Left) => Some(Down),
        // Same direction, or a reversal the controls never allow.
        _ => None,
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// What occupies the cell.
    pub kind: CellKind,
    /// Movement direction of the segment in this cell.
    pub direction: Direction,
    /// Orientation of a corner segment.
    pub corner: Direction,
    /// Distance from the tail plus one; 0 when not part of the snake.
    pub counter: u32,
    /// Swallowed food still travelling down the body.
    pub food: bool,
    /// Head with an apple two cells ahead.
    pub mouth_open: bool,
}

impl Cell {
    /// Restore the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The 4×4 sprite for this cell, or `None` for a free cell.
    ///
    /// Bit `row * 4 + col` is the pixel at `(col, row)`.
    #[must_use]
    pub const fn sprite(&self) -> Option<u16> {
        let table = match self.kind {
            CellKind::Free => return None,
            CellKind::Apple => return Some(APPLE_SPRITE),
            CellKind::Bonus(kind, half) => {
                let (first, second) = kind.sprites();
                return Some(match half {
                    BonusHalf::First => first,
                    BonusHalf::Second => second,
                });
            }
            _ if self.food && !matches!(self.kind, CellKind::Head | CellKind::Tail) => {
                return Some(FOOD_SPRITE);
            }
            CellKind::Head if self.mouth_open => &HEAD_OPEN_SPRITES,
            CellKind::Head => &HEAD_SPRITES,
            CellKind::Body => &BODY_SPRITES,
            CellKind::Tail => &TAIL_SPRITES,
            CellKind::Corner => return Some(CORNER_SPRITES[self.corner.index()]),
        };
        Some(table[self.direction.index()])
    }
}
