#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod planner;
mod position;
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
pub mod replay;
mod sampler;
#[cfg(feature = "std")]
pub mod server;

pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use planner::*;
pub use position::*;
pub use replay::{replay, Catch};
pub use sampler::*;
#[cfg(feature = "std")]
pub use server::{router, serve, AppState};
