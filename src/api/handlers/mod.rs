use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::catalog::DEFAULT_TARGET;
use crate::cues::{cues_for_completion, cues_for_gain, Cue};
use crate::error::{CoreError, TrackerError};
use crate::models::*;

// ============================================================
// Request / Response Types
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GainExperienceInput {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarBody {
    pub data_url: Option<String>,
}

/// Returned by every mutation: the state to re-render and the cues to play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: StatusSnapshot,
    pub experience_awarded: u64,
    pub level_ups: u64,
    pub cues: Vec<Cue>,
}

// ============================================================
// Error Handling
// ============================================================

/// Map tracker errors to responses. Validation failures are returned as-is;
/// storage failures are logged and the client gets a generic message.
fn tracker_error(e: TrackerError) -> (StatusCode, String) {
    match e {
        TrackerError::Core(CoreError::IndexOutOfRange { .. }) => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::NOT_FOUND, e.to_string())
        }
        TrackerError::Core(_) | TrackerError::Avatar(_) => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        TrackerError::Storage(_) => {
            tracing::error!("Internal error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Progression
// ============================================================

pub async fn get_status(State(state): State<AppState>) -> Json<StatusSnapshot> {
    let tracker = state.tracker.lock().expect("tracker lock poisoned");
    Json(tracker.snapshot())
}

pub async fn gain_experience(
    State(state): State<AppState>,
    Json(input): Json<GainExperienceInput>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    let mut tracker = state.tracker.lock().expect("tracker lock poisoned");
    let outcome = tracker
        .gain_experience(input.amount)
        .map_err(tracker_error)?;

    Ok(Json(ActionResponse {
        status: tracker.snapshot(),
        experience_awarded: input.amount as u64,
        level_ups: outcome.level_ups,
        cues: cues_for_gain(&outcome),
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<CharacterStats> {
    let tracker = state.tracker.lock().expect("tracker lock poisoned");
    Json(tracker.stats().clone())
}

// ============================================================
// Quests
// ============================================================

pub async fn list_quests(State(state): State<AppState>) -> Json<Vec<Quest>> {
    let tracker = state.tracker.lock().expect("tracker lock poisoned");
    Json(tracker.quests().quests.clone())
}

pub async fn complete_quest(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    let mut tracker = state.tracker.lock().expect("tracker lock poisoned");
    let completion = tracker.complete_quest(index).map_err(tracker_error)?;

    Ok(Json(ActionResponse {
        status: tracker.snapshot(),
        experience_awarded: completion.experience_awarded,
        level_ups: completion.outcome.map(|o| o.level_ups).unwrap_or(0),
        cues: cues_for_completion(&completion),
    }))
}

pub async fn reset_quests(
    State(state): State<AppState>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    let mut tracker = state.tracker.lock().expect("tracker lock poisoned");
    tracker.reset_daily().map_err(tracker_error)?;

    Ok(Json(ActionResponse {
        status: tracker.snapshot(),
        experience_awarded: 0,
        level_ups: 0,
        cues: vec![Cue::Click],
    }))
}

// ============================================================
// Exercises
// ============================================================

pub async fn list_default_exercises(State(state): State<AppState>) -> Json<ExerciseList> {
    Json(state.catalog.fetch(DEFAULT_TARGET).await)
}

pub async fn list_exercises(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Json<ExerciseList> {
    Json(state.catalog.fetch(&target).await)
}

// ============================================================
// Avatar
// ============================================================

pub async fn get_avatar(
    State(state): State<AppState>,
) -> Result<Json<AvatarBody>, (StatusCode, String)> {
    let tracker = state.tracker.lock().expect("tracker lock poisoned");
    let data_url = tracker.avatar().map_err(tracker_error)?;
    Ok(Json(AvatarBody { data_url }))
}

pub async fn set_avatar(
    State(state): State<AppState>,
    Json(body): Json<AvatarBody>,
) -> Result<StatusCode, (StatusCode, String)> {
    let Some(data_url) = body.data_url else {
        return Err((StatusCode::BAD_REQUEST, "data_url is required".to_string()));
    };
    let mut tracker = state.tracker.lock().expect("tracker lock poisoned");
    tracker.set_avatar(&data_url).map_err(tracker_error)?;
    Ok(StatusCode::NO_CONTENT)
}
