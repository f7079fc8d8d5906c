use crate::{
    common::ValidationError,
    position::{BoardSize, Intent, Position, Snake},
    replay::replay,
    sampler::{spawn_fruit, PositionSampler},
};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Authoritative snapshot handed back to the client.
///
/// The server keeps no copy; the client resends it with every batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GameState {
    /// Opaque client-chosen identifier, passed through untouched.
    #[cfg_attr(feature = "std", serde(default))]
    pub game_id: String,
    pub width: i32,
    pub height: i32,
    pub score: u64,
    pub fruit: Position,
    pub snake: Snake,
}

/// A snapshot plus the ticks played since it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct ValidationPayload {
    #[cfg_attr(feature = "std", serde(default))]
    pub game_id: String,
    pub width: i32,
    pub height: i32,
    pub score: u64,
    pub fruit: Position,
    pub snake: Snake,
    #[cfg_attr(feature = "std", serde(default))]
    pub ticks: Vec<Intent>,
}

impl ValidationPayload {
    /// Attach `ticks` to an existing snapshot.
    pub fn new(state: GameState, ticks: Vec<Intent>) -> Self {
        Self {
            game_id: state.game_id,
            width: state.width,
            height: state.height,
            score: state.score,
            fruit: state.fruit,
            snake: state.snake,
            ticks,
        }
    }
}

/// Create a fresh game: score zero, snake at the spawn cell, fruit anywhere
/// else on the board.
pub fn new_game<S: PositionSampler + ?Sized>(
    width: i32,
    height: i32,
    sampler: &mut S,
) -> Result<GameState, ValidationError> {
    let board = BoardSize::new(width, height)?;
    let snake = Snake::spawn();
    Ok(GameState {
        game_id: String::new(),
        width,
        height,
        score: 0,
        fruit: spawn_fruit(sampler, board, snake.position),
        snake,
    })
}

/// Replay the payload's ticks and, if they legally reach the fruit, return
/// the next snapshot with one more point and a respawned fruit.
///
/// Rejections carry no state; a legal prefix earns nothing.
pub fn validate<S: PositionSampler + ?Sized>(
    payload: &ValidationPayload,
    sampler: &mut S,
) -> Result<GameState, ValidationError> {
    let board = BoardSize::new(payload.width, payload.height)?;
    let catch = replay(board, payload.snake.position, payload.fruit, &payload.ticks)?;

    Ok(GameState {
        game_id: payload.game_id.clone(),
        width: payload.width,
        height: payload.height,
        score: payload.score.saturating_add(1),
        fruit: spawn_fruit(sampler, board, catch.position),
        snake: Snake::new(catch.position, catch.velocity),
    })
}
