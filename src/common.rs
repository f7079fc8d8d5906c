//! Common types for the validator: rejection classifications.

/// Why a board could not be created or a batch of ticks was rejected.
///
/// Tick indices are 0-based positions in the submitted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Width or height is not positive, or the board has a single cell.
    InvalidBoardSize,
    /// Two consecutive ticks flip direction on the same axis.
    IllegalReversal { tick: usize },
    /// A tick moves on both axes with the same sign.
    IllegalDiagonal { tick: usize },
    /// The snake left the board on this tick.
    OutOfBounds { tick: usize },
    /// Every tick was legal but none of them landed on the fruit.
    FruitNotReached,
}

impl ValidationError {
    /// Stable machine-readable classification.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidBoardSize => "invalid_board_size",
            ValidationError::IllegalReversal { .. } => "illegal_reversal",
            ValidationError::IllegalDiagonal { .. } => "illegal_diagonal",
            ValidationError::OutOfBounds { .. } => "out_of_bounds",
            ValidationError::FruitNotReached => "fruit_not_reached",
        }
    }

    /// `true` for rejections caused by a move breaking a movement rule,
    /// as opposed to bad input or simply not reaching the fruit yet.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            ValidationError::IllegalReversal { .. }
                | ValidationError::IllegalDiagonal { .. }
                | ValidationError::OutOfBounds { .. }
        )
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::InvalidBoardSize => {
                write!(f, "map size should be greater or equal than 2")
            }
            ValidationError::IllegalReversal { tick } => {
                write!(f, "can't move backwards (tick {})", tick)
            }
            ValidationError::IllegalDiagonal { tick } => {
                write!(f, "can't move diagonal (tick {})", tick)
            }
            ValidationError::OutOfBounds { tick } => write!(f, "out of bound (tick {})", tick),
            ValidationError::FruitNotReached => write!(f, "not reached to fruit"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// A velocity component outside of {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VelocityError {
    pub x: i32,
    pub y: i32,
}

impl core::fmt::Display for VelocityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "velocity ({}, {}) has a component outside of -1..=1",
            self.x, self.y
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VelocityError {}
