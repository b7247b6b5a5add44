use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One journaled gratitude entry, tied to the challenge day it was written on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub day: u32,
    pub date: DateTime<Utc>,
    pub text: String,
    pub prompt: String,
}

/// The persisted challenge record. Entries are append-only, `unlocked_badges`
/// only ever grows, and `current_day` never moves backwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeState {
    pub entries: Vec<Entry>,
    pub current_day: u32,
    pub streak: u32,
    #[serde(default)]
    pub points: u64,
    pub unlocked_badges: Vec<String>,
    pub last_entry_date: Option<DateTime<Utc>>,
}

impl Default for ChallengeState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            current_day: 1,
            streak: 0,
            points: 0,
            unlocked_badges: Vec::new(),
            last_entry_date: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitEntryRequest {
    pub text: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChallengeSnapshot {
    pub day: u32,
    pub total_days: u32,
    pub streak: u32,
    pub points: u64,
    pub entries_count: usize,
    pub submitted_today: bool,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitEntryResponse {
    pub day: u32,
    pub streak: u32,
    pub points: u64,
    pub entries_count: usize,
    pub newly_unlocked: Vec<String>,
    pub persisted: bool,
}

#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
pub struct BadgeStatus {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: String,
    pub milestone: Option<u32>,
    pub unlocked: bool,
}

#[derive(Debug, Serialize)]
pub struct BadgesResponse {
    pub badges: Vec<BadgeStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub newly_unlocked: Vec<String>,
    pub persisted: bool,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub total_entries: usize,
    pub current_day: u32,
    pub total_days: u32,
    pub streak: u32,
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct ActivityPoint {
    pub date: String,
    pub entries: u32,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub summary: StatsSummary,
    pub last_14_days: Vec<ActivityPoint>,
}
