//! Deterministic tick replay.
//!
//! Given where the snake starts, where the fruit is and the ticks the
//! client claims to have played, walk the snake forward one tick at a time
//! and report the first tick that lands on the fruit. Nothing here touches
//! randomness or score, so the same inputs always produce the same answer.

use crate::common::ValidationError;
use crate::position::{BoardSize, Intent, Position, Velocity};

/// Where and when the fruit was eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catch {
    /// Cell the snake occupies after eating.
    pub position: Position,
    /// Velocity of the tick that reached the fruit.
    pub velocity: Velocity,
    /// 0-based index of that tick in the batch.
    pub tick: usize,
}

/// Reject the batch if any two consecutive ticks reverse direction.
///
/// Only transitions inside the batch are checked; the first tick is not
/// compared with the snake's previous velocity.
pub fn check_reversals(intents: &[Intent]) -> Result<(), ValidationError> {
    match intents
        .windows(2)
        .position(|pair| pair[0].reverses(pair[1]))
    {
        Some(i) => Err(ValidationError::IllegalReversal { tick: i + 1 }),
        None => Ok(()),
    }
}

/// Replay `intents` from `start` on `board` until the fruit is reached.
///
/// The reversal check covers the whole batch. Simulation stops at the first
/// tick that lands on `fruit` and later ticks are never stepped.
pub fn replay(
    board: BoardSize,
    start: Position,
    fruit: Position,
    intents: &[Intent],
) -> Result<Catch, ValidationError> {
    check_reversals(intents)?;

    let mut position = start;
    for (tick, &intent) in intents.iter().enumerate() {
        if intent.is_forbidden_diagonal() {
            return Err(ValidationError::IllegalDiagonal { tick });
        }

        position = match position.step(intent) {
            Some(next) if board.contains(next) => next,
            _ => return Err(ValidationError::OutOfBounds { tick }),
        };

        if position == fruit {
            return Ok(Catch {
                position,
                velocity: intent,
                tick,
            });
        }
    }

    Err(ValidationError::FruitNotReached)
}
