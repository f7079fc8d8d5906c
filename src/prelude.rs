//! Commonly used types and utilities for ease of import.

pub use crate::{
    new_game, plan_route, spawn_fruit, validate, BoardSize, GameState, Intent, Position,
    PositionSampler, RngSampler, Snake, ValidationError, ValidationPayload, Velocity,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, router, serve, AppState};
