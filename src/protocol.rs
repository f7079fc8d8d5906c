#![cfg(feature = "std")]
//! Wire shapes used only by the HTTP layer.

use serde::{Deserialize, Serialize};

/// Raw `/new` query string. Values stay strings so a non-numeric value
/// gets its own message instead of a generic query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewGameQuery {
    pub w: Option<String>,
    pub h: Option<String>,
}

/// Body returned with every rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable classification, e.g. `illegal_reversal`.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}
