use chrono::{Duration, NaiveDate, Utc};

use crate::challenge::CHALLENGE_LENGTH;
use crate::models::{ActivityPoint, ChallengeState, StatsResponse, StatsSummary};

const ACTIVITY_WINDOW_DAYS: usize = 14;

pub fn build_stats(state: &ChallengeState) -> StatsResponse {
    build_stats_at(Utc::now().date_naive(), state)
}

/// Derive the journal summary and the trailing daily-activity series. Pure
/// over `(today, state)` so tests can pin the reference day.
pub fn build_stats_at(today: NaiveDate, state: &ChallengeState) -> StatsResponse {
    let mut last_14_days = Vec::with_capacity(ACTIVITY_WINDOW_DAYS);
    for offset in (0..ACTIVITY_WINDOW_DAYS).rev() {
        let date = today - Duration::days(offset as i64);
        let entries = state
            .entries
            .iter()
            .filter(|entry| entry.date.date_naive() == date)
            .count() as u32;
        last_14_days.push(ActivityPoint {
            date: date.to_string(),
            entries,
        });
    }

    StatsResponse {
        summary: StatsSummary {
            total_entries: state.entries.len(),
            current_day: state.current_day,
            total_days: CHALLENGE_LENGTH,
            streak: state.streak,
            points: state.points,
        },
        last_14_days,
    }
}
