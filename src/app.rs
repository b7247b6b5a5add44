use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/challenge", get(handlers::get_challenge))
        .route("/api/entries", post(handlers::submit_entry))
        .route("/api/journal", get(handlers::get_journal))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/badges", get(handlers::get_badges))
        .route("/api/quote", get(handlers::get_quote))
        .route("/api/share", post(handlers::share))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
