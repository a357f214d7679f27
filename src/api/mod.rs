//! Local JSON API for the browser widget.
//!
//! Binds to loopback only; the widget and this process belong to one user.

mod handlers;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::Catalog;
use crate::db::Database;
use crate::tracker::Tracker;

pub use handlers::{ActionResponse, AvatarBody, GainExperienceInput};

pub const DEFAULT_PORT: u16 = 17020;

/// Shared handler state. Every mutation goes through the one tracker lock.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<Mutex<Tracker<Database>>>,
    catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(tracker: Tracker<Database>, catalog: Catalog) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            catalog: Arc::new(catalog),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/status", get(handlers::get_status))
        .route("/xp", post(handlers::gain_experience))
        .route("/quests", get(handlers::list_quests))
        .route("/quests/reset", post(handlers::reset_quests))
        .route("/quests/{index}/complete", post(handlers::complete_quest))
        .route("/stats", get(handlers::get_stats))
        .route("/exercises", get(handlers::list_default_exercises))
        .route("/exercises/{target}", get(handlers::list_exercises))
        .route("/avatar", get(handlers::get_avatar).put(handlers::set_avatar))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
