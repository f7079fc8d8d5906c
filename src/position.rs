//! Grid coordinates, per-tick velocities and board extents.

use crate::common::{ValidationError, VelocityError};
use crate::config::{SPAWN_VEL_X, SPAWN_VEL_Y, SPAWN_X, SPAWN_Y};

/// A cell on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move one tick by `velocity`. `None` if a coordinate overflows.
    pub fn step(self, velocity: Velocity) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add(velocity.x() as i32)?,
            y: self.y.checked_add(velocity.y() as i32)?,
        })
    }
}

/// One tick of motion; each component is -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(try_from = "RawVelocity", into = "RawVelocity")
)]
pub struct Velocity {
    x: i8,
    y: i8,
}

/// A direction the client asks the snake to take for a single tick.
pub type Intent = Velocity;

impl Velocity {
    pub const RIGHT: Velocity = Velocity { x: 1, y: 0 };
    pub const LEFT: Velocity = Velocity { x: -1, y: 0 };
    pub const DOWN: Velocity = Velocity { x: 0, y: 1 };
    pub const UP: Velocity = Velocity { x: 0, y: -1 };
    pub const STILL: Velocity = Velocity { x: 0, y: 0 };

    /// Build a velocity, rejecting components outside of -1..=1.
    pub fn new(x: i32, y: i32) -> Result<Self, VelocityError> {
        if !(-1..=1).contains(&x) || !(-1..=1).contains(&y) {
            return Err(VelocityError { x, y });
        }
        Ok(Self {
            x: x as i8,
            y: y as i8,
        })
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// `true` when going from `self` to `next` flips either axis between
    /// +1 and -1.
    pub fn reverses(&self, next: Velocity) -> bool {
        (self.x != 0 && self.x == -next.x) || (self.y != 0 && self.y == -next.y)
    }

    /// Diagonals where both components share a sign. Mixed-sign pairs such
    /// as (1, -1) are not forbidden.
    pub fn is_forbidden_diagonal(&self) -> bool {
        (self.x == 1 && self.y == 1) || (self.x == -1 && self.y == -1)
    }
}

/// Wire shape of a velocity before the range check.
#[cfg(feature = "std")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVelocity {
    vel_x: i32,
    vel_y: i32,
}

#[cfg(feature = "std")]
impl TryFrom<RawVelocity> for Velocity {
    type Error = VelocityError;

    fn try_from(raw: RawVelocity) -> Result<Self, Self::Error> {
        Velocity::new(raw.vel_x, raw.vel_y)
    }
}

#[cfg(feature = "std")]
impl From<Velocity> for RawVelocity {
    fn from(v: Velocity) -> Self {
        RawVelocity {
            vel_x: v.x as i32,
            vel_y: v.y as i32,
        }
    }
}

/// The snake's head: where it is and where it was last heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snake {
    #[cfg_attr(feature = "std", serde(flatten))]
    pub position: Position,
    #[cfg_attr(feature = "std", serde(flatten))]
    pub velocity: Velocity,
}

impl Snake {
    pub const fn new(position: Position, velocity: Velocity) -> Self {
        Self { position, velocity }
    }

    /// A fresh snake at the spawn cell moving in the spawn direction.
    pub const fn spawn() -> Self {
        Self {
            position: Position::new(SPAWN_X, SPAWN_Y),
            velocity: Velocity {
                x: SPAWN_VEL_X,
                y: SPAWN_VEL_Y,
            },
        }
    }
}

/// Validated board extents: both sides positive and at least two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    width: i32,
    height: i32,
}

impl BoardSize {
    pub fn new(width: i32, height: i32) -> Result<Self, ValidationError> {
        if width <= 0 || height <= 0 {
            return Err(ValidationError::InvalidBoardSize);
        }
        // i64 so a large width×height cannot wrap
        if (width as i64) * (height as i64) == 1 {
            return Err(ValidationError::InvalidBoardSize);
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether `pos` lies inside `[0, width) × [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The cell at row-major `index`, or `None` past the last cell.
    pub fn position_at(&self, index: u64) -> Option<Position> {
        if index >= self.cell_count() {
            return None;
        }
        let w = self.width as u64;
        Some(Position::new((index % w) as i32, (index / w) as i32))
    }
}
