#![cfg(feature = "std")]
//! HTTP dispatch: `GET /new` and `POST /validate`.
//!
//! The server holds no game state. The only thing shared between requests
//! is the random generator used to place fruit.

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{debug, error, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::ValidationError;
use crate::config::MAX_BODY_BYTES;
use crate::game::{new_game, validate, GameState, ValidationPayload};
use crate::protocol::{ErrorBody, NewGameQuery};
use crate::sampler::RngSampler;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    sampler: Arc<Mutex<RngSampler<SmallRng>>>,
}

impl AppState {
    /// Fix `seed` for reproducible fruit placement, or draw one from the
    /// thread-local generator.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            sampler: Arc::new(Mutex::new(RngSampler::new(rng))),
        }
    }
}

/// A failed request: status, stable classification and detail.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal",
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

/// Status for each rejection. Rule violations share one status; the body's
/// `error` field tells them apart.
pub fn status_for(err: &ValidationError) -> StatusCode {
    match err {
        ValidationError::InvalidBoardSize => StatusCode::BAD_REQUEST,
        ValidationError::FruitNotReached => StatusCode::NOT_FOUND,
        ValidationError::IllegalReversal { .. }
        | ValidationError::IllegalDiagonal { .. }
        | ValidationError::OutOfBounds { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: status_for(&err),
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("{} ({}): {}", self.status, self.code, self.message);
        } else {
            warn!("{} ({}): {}", self.status, self.code, self.message);
        }
        let body = ErrorBody {
            error: self.code.to_owned(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Router with both routes. Any other method on them answers 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/new", get(new_game_handler))
        .route("/validate", post(validate_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn parse_dimension(name: &str, raw: Option<&str>) -> Result<i32, ApiError> {
    raw.unwrap_or_default()
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("invalid_query", format!("{} is not number", name)))
}

async fn new_game_handler(
    State(state): State<AppState>,
    Query(query): Query<NewGameQuery>,
) -> Result<Json<GameState>, ApiError> {
    let width = parse_dimension("w", query.w.as_deref())?;
    let height = parse_dimension("h", query.h.as_deref())?;

    let mut sampler = state
        .sampler
        .lock()
        .map_err(|_| ApiError::internal("fruit sampler lock poisoned"))?;
    let game = new_game(width, height, &mut *sampler)?;
    debug!("new {}x{} game, fruit at {:?}", width, height, game.fruit);
    Ok(Json(game))
}

async fn validate_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GameState>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("empty_body", "body is missing"));
    }
    let payload: ValidationPayload = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request("invalid_payload", e.to_string()))?;

    let mut sampler = state
        .sampler
        .lock()
        .map_err(|_| ApiError::internal("fruit sampler lock poisoned"))?;
    let next = validate(&payload, &mut *sampler)?;
    debug!(
        "game {:?}: fruit eaten at {:?}, score {}",
        next.game_id, next.snake.position, next.score
    );
    Ok(Json(next))
}
