//! REST API for browser clients.
//!
//! | method | path                 | body / query                    |
//! |--------|----------------------|---------------------------------|
//! | GET    | `/`                  |                                 |
//! | POST   | `/api/new_game`      |                                 |
//! | POST   | `/api/validate_word` | `{game_id, positions: [[r,c]]}` |
//! | GET    | `/api/game_state`    | `?game_id=...`                  |

use crate::{ApiError, SessionId, SessionRegistry};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strictly_boggle::{AttemptOutcome, Board, Coordinate, SessionSnapshot};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

/// Body of `POST /api/validate_word`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateWordRequest {
    /// Session to play in.
    pub game_id: Option<SessionId>,
    /// Traced cells as `[row, col]` pairs.
    pub positions: Option<Vec<Coordinate>>,
}

/// Query of `GET /api/game_state`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameStateQuery {
    /// Session to read.
    pub game_id: Option<SessionId>,
}

/// Response of `POST /api/new_game`.
#[derive(Debug, Clone, Serialize)]
pub struct NewGameResponse {
    /// Id to pass with later requests.
    pub game_id: SessionId,
    /// The board, as rows of letters.
    pub board: Board,
    /// Always 0.
    pub score: u32,
    /// Always empty.
    pub found_words: Vec<String>,
}

/// Response of `POST /api/validate_word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidateWordResponse {
    /// The word scored.
    Accepted {
        /// Always true.
        valid: bool,
        /// The word, lowercase.
        word: String,
        /// Points for this word.
        points: u32,
        /// Session score after this word.
        score: u32,
        /// Every word found so far.
        found_words: Vec<String>,
    },
    /// The word was refused.
    Rejected {
        /// Always false.
        valid: bool,
        /// Human-readable reason.
        error: String,
        /// Machine-readable reason.
        code: &'static str,
        /// Letters along the path, possibly empty.
        attempted_word: String,
    },
}

impl From<AttemptOutcome> for ValidateWordResponse {
    fn from(outcome: AttemptOutcome) -> Self {
        match outcome {
            AttemptOutcome::Accepted(a) => ValidateWordResponse::Accepted {
                valid: true,
                word: a.word,
                points: a.points,
                score: a.score,
                found_words: a.found_words,
            },
            AttemptOutcome::Rejected(r) => ValidateWordResponse::Rejected {
                valid: false,
                error: r.rejection.to_string(),
                code: r.rejection.code(),
                attempted_word: r.attempted_word,
            },
        }
    }
}

/// Response of `GET /api/game_state`.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateResponse {
    /// The board, as rows of letters.
    pub board: Board,
    /// Current score.
    pub score: u32,
    /// Words found so far.
    pub found_words: Vec<String>,
    /// When the session started.
    pub created_at: DateTime<Utc>,
}

impl From<SessionSnapshot> for GameStateResponse {
    fn from(s: SessionSnapshot) -> Self {
        Self {
            board: s.board,
            score: s.score,
            found_words: s.found_words,
            created_at: s.created_at,
        }
    }
}

/// Builds the HTTP router over `registry`.
///
/// CORS is open to any origin so a separately hosted frontend can call in.
pub fn router(registry: SessionRegistry) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/new_game", post(new_game))
        .route("/api/validate_word", post(validate_word))
        .route("/api/game_state", get(game_state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Boggle API is running. Use /api endpoints for the frontend."
    }))
}

#[instrument(skip_all)]
async fn new_game(State(registry): State<SessionRegistry>) -> Json<NewGameResponse> {
    let (game_id, snapshot) = registry.create();
    info!(game_id = %game_id, "New game started");
    Json(NewGameResponse {
        game_id,
        board: snapshot.board,
        score: snapshot.score,
        found_words: snapshot.found_words,
    })
}

#[instrument(skip_all)]
async fn validate_word(
    State(registry): State<SessionRegistry>,
    payload: Result<Json<ValidateWordRequest>, JsonRejection>,
) -> Result<Json<ValidateWordResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Unreadable validate_word body");
        ApiError::MissingFields
    })?;

    let (Some(game_id), Some(positions)) = (req.game_id, req.positions) else {
        return Err(ApiError::MissingFields);
    };
    if game_id.is_empty() || positions.is_empty() {
        return Err(ApiError::MissingFields);
    }

    debug!(game_id = %game_id, len = positions.len(), "Validating word");
    let outcome = registry.attempt(&game_id, &positions)?;
    Ok(Json(outcome.into()))
}

#[instrument(skip_all)]
async fn game_state(
    State(registry): State<SessionRegistry>,
    Query(query): Query<GameStateQuery>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let game_id = query
        .game_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingGameId)?;
    let snapshot = registry.snapshot(&game_id)?;
    Ok(Json(snapshot.into()))
}
