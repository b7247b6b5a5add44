use crate::catalog::{self, BADGES};
use crate::challenge;
use crate::errors::AppError;
use crate::models::{
    BadgeStatus, BadgesResponse, ChallengeSnapshot, ChallengeState, JournalResponse, QuoteResponse,
    ShareResponse, StatsResponse, SubmitEntryRequest, SubmitEntryResponse,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::persist_state;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::{DateTime, Utc};
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let now = Utc::now();
    let current = state.challenge.lock().await;
    Html(render_index(&snapshot(&current, now)))
}

pub async fn get_challenge(
    State(state): State<AppState>,
) -> Result<Json<ChallengeSnapshot>, AppError> {
    let now = Utc::now();
    let current = state.challenge.lock().await;
    Ok(Json(snapshot(&current, now)))
}

pub async fn submit_entry(
    State(state): State<AppState>,
    Json(payload): Json<SubmitEntryRequest>,
) -> Result<Json<SubmitEntryResponse>, AppError> {
    let now = Utc::now();
    let mut current = state.challenge.lock().await;
    let prompt = payload
        .prompt
        .unwrap_or_else(|| catalog::prompt_for_day(current.current_day).to_string());

    let transition = challenge::submit_entry(&current, BADGES, &payload.text, &prompt, now)?;
    *current = transition.state;

    let persisted = persist_or_warn(&state, &current).await;

    Ok(Json(SubmitEntryResponse {
        day: current.current_day,
        streak: current.streak,
        points: current.points,
        entries_count: current.entries.len(),
        newly_unlocked: transition.newly_unlocked,
        persisted,
    }))
}

pub async fn get_journal(State(state): State<AppState>) -> Result<Json<JournalResponse>, AppError> {
    let current = state.challenge.lock().await;
    let mut entries = current.entries.clone();
    entries.sort_by(|a, b| b.day.cmp(&a.day));
    Ok(Json(JournalResponse { entries }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let current = state.challenge.lock().await;
    Ok(Json(build_stats(&current)))
}

pub async fn get_badges(State(state): State<AppState>) -> Result<Json<BadgesResponse>, AppError> {
    let current = state.challenge.lock().await;
    let badges = BADGES
        .iter()
        .map(|badge| BadgeStatus {
            id: badge.id.to_string(),
            name: badge.name.to_string(),
            description: badge.description.to_string(),
            kind: badge.kind_name().to_string(),
            milestone: badge.milestone(),
            unlocked: current.unlocked_badges.iter().any(|id| id == badge.id),
        })
        .collect();
    Ok(Json(BadgesResponse { badges }))
}

pub async fn get_quote() -> Json<QuoteResponse> {
    let quote = catalog::quote_of_the_day(Utc::now().date_naive());
    Json(QuoteResponse {
        text: quote.text.to_string(),
        author: quote.author.to_string(),
    })
}

pub async fn share(State(state): State<AppState>) -> Result<Json<ShareResponse>, AppError> {
    let mut current = state.challenge.lock().await;
    let transition = challenge::record_share(&current, BADGES);
    *current = transition.state;

    let persisted = persist_or_warn(&state, &current).await;

    Ok(Json(ShareResponse {
        newly_unlocked: transition.newly_unlocked,
        persisted,
    }))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<SubmitEntryResponse>, AppError> {
    let mut current = state.challenge.lock().await;
    *current = ChallengeState::default();

    let persisted = persist_or_warn(&state, &current).await;

    Ok(Json(SubmitEntryResponse {
        day: current.current_day,
        streak: current.streak,
        points: current.points,
        entries_count: current.entries.len(),
        newly_unlocked: Vec::new(),
        persisted,
    }))
}

/// Persistence failure is non-fatal: the in-memory mutation stands for the
/// rest of the session and the caller is told via `persisted: false`.
async fn persist_or_warn(state: &AppState, current: &ChallengeState) -> bool {
    match persist_state(&state.data_path, current).await {
        Ok(()) => true,
        Err(err) => {
            warn!(
                "failed to persist state, keeping in-memory progress: {}",
                err.message
            );
            false
        }
    }
}

fn snapshot(state: &ChallengeState, now: DateTime<Utc>) -> ChallengeSnapshot {
    ChallengeSnapshot {
        day: state.current_day,
        total_days: challenge::CHALLENGE_LENGTH,
        streak: state.streak,
        points: state.points,
        entries_count: state.entries.len(),
        submitted_today: challenge::submitted_today(state, now),
        prompt: catalog::prompt_for_day(state.current_day).to_string(),
    }
}
