use chrono::{DateTime, Duration, Utc};

use crate::catalog::{Badge, BadgeKind};
use crate::models::{ChallengeState, Entry};

pub const CHALLENGE_LENGTH: u32 = 30;
pub const MIN_ENTRY_CHARS: usize = 10;

const BASE_POINTS: u64 = 10;
const STREAK_BONUS_PER_DAY: u64 = 5;

/// Why a submission was not accepted. Rejections are deterministic and leave
/// the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EntryTooShort,
    AlreadySubmittedToday,
}

/// An accepted state transition plus the badge ids it unlocked, so the caller
/// can announce each one. The engine itself performs no I/O.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: ChallengeState,
    pub newly_unlocked: Vec<String>,
}

/// Accept or reject a submission and, when accepted, compute the next state.
///
/// Calendar days are compared as UTC `(year, month, day)` dates, never as
/// elapsed duration. The streak survives only when the previous submission
/// was exactly the day before `now`; everything else restarts it at 1.
pub fn submit_entry(
    state: &ChallengeState,
    catalog: &[Badge],
    text: &str,
    prompt: &str,
    now: DateTime<Utc>,
) -> Result<Transition, Rejection> {
    let text = text.trim();
    if text.chars().count() < MIN_ENTRY_CHARS {
        return Err(Rejection::EntryTooShort);
    }

    let today = now.date_naive();
    if state.last_entry_date.map(|date| date.date_naive()) == Some(today) {
        return Err(Rejection::AlreadySubmittedToday);
    }

    let mut next = state.clone();
    next.entries.push(Entry {
        day: state.current_day,
        date: now,
        text: text.to_string(),
        prompt: prompt.to_string(),
    });

    let yesterday = today - Duration::days(1);
    next.streak = match state.last_entry_date {
        Some(last) if last.date_naive() == yesterday => state.streak + 1,
        _ => 1,
    };
    next.current_day = (state.current_day + 1).min(CHALLENGE_LENGTH);
    next.points = state.points + BASE_POINTS + streak_bonus(next.streak);
    next.last_entry_date = Some(now);

    let newly_unlocked = unlock_milestone_badges(&mut next, catalog);

    Ok(Transition {
        state: next,
        newly_unlocked,
    })
}

/// Unlock any share-kind badges. Called by the share action, never by the
/// submission path.
pub fn record_share(state: &ChallengeState, catalog: &[Badge]) -> Transition {
    let mut next = state.clone();
    let mut newly_unlocked = Vec::new();
    for badge in catalog {
        if matches!(badge.kind, BadgeKind::Share) && !is_unlocked(&next, badge.id) {
            next.unlocked_badges.push(badge.id.to_string());
            newly_unlocked.push(badge.id.to_string());
        }
    }
    Transition {
        state: next,
        newly_unlocked,
    }
}

/// Zero a stale streak on load: if the most recent submission happened
/// neither today nor yesterday, the chain is already broken and must not be
/// displayed as alive. Applied once per load, not per request.
pub fn repair_loaded_streak(state: &mut ChallengeState, now: DateTime<Utc>) {
    let Some(last) = state.last_entry_date else {
        return;
    };
    let last_day = last.date_naive();
    let today = now.date_naive();
    if last_day != today && last_day != today - Duration::days(1) {
        state.streak = 0;
    }
}

pub fn submitted_today(state: &ChallengeState, now: DateTime<Utc>) -> bool {
    state.last_entry_date.map(|date| date.date_naive()) == Some(now.date_naive())
}

fn streak_bonus(streak: u32) -> u64 {
    if streak > 1 {
        STREAK_BONUS_PER_DAY * u64::from(streak - 1)
    } else {
        0
    }
}

fn unlock_milestone_badges(state: &mut ChallengeState, catalog: &[Badge]) -> Vec<String> {
    let mut newly_unlocked = Vec::new();
    for badge in catalog {
        let reached = match badge.kind {
            BadgeKind::Streak(milestone) => state.streak >= milestone,
            BadgeKind::EntryCount(milestone) => state.entries.len() as u32 >= milestone,
            BadgeKind::Share => false,
        };
        if reached && !is_unlocked(state, badge.id) {
            state.unlocked_badges.push(badge.id.to_string());
            newly_unlocked.push(badge.id.to_string());
        }
    }
    newly_unlocked
}

fn is_unlocked(state: &ChallengeState, badge_id: &str) -> bool {
    state.unlocked_badges.iter().any(|id| id == badge_id)
}
