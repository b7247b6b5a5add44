use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

static CLIENT: Lazy<Client> = Lazy::new(Client::new);

#[derive(Debug, Deserialize)]
struct ChallengeSnapshot {
    day: u32,
    total_days: u32,
    streak: u32,
    points: u64,
    entries_count: usize,
    submitted_today: bool,
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct SubmitEntryResponse {
    day: u32,
    streak: u32,
    points: u64,
    entries_count: usize,
    newly_unlocked: Vec<String>,
    persisted: bool,
}

#[derive(Debug, Deserialize)]
struct JournalEntry {
    day: u32,
    date: String,
    text: String,
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct JournalResponse {
    entries: Vec<JournalEntry>,
}

#[derive(Debug, Deserialize)]
struct BadgeStatus {
    id: String,
    unlocked: bool,
}

#[derive(Debug, Deserialize)]
struct BadgesResponse {
    badges: Vec<BadgeStatus>,
}

#[derive(Debug, Deserialize)]
struct ShareResponse {
    newly_unlocked: Vec<String>,
    persisted: bool,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    summary: StatsSummary,
    last_14_days: Vec<ActivityPoint>,
}

#[derive(Debug, Deserialize)]
struct StatsSummary {
    total_entries: usize,
    current_day: u32,
}

#[derive(Debug, Deserialize)]
struct ActivityPoint {
    date: String,
    entries: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "gratitude_app_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = &*CLIENT;
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/challenge")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

// Each test gets its own server and data slot: a challenge accepts only one
// entry per calendar day, so tests cannot share state.
async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_gratitude_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

const VALID_TEXT: &str = "Grateful for a quiet morning and good coffee.";

async fn get_challenge(client: &Client, base_url: &str) -> ChallengeSnapshot {
    client
        .get(format!("{base_url}/api/challenge"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_submit_entry_advances_the_challenge() {
    let server = spawn_server().await;
    let client = &*CLIENT;

    let before = get_challenge(client, &server.base_url).await;
    assert_eq!(before.day, 1);
    assert_eq!(before.total_days, 30);
    assert_eq!(before.streak, 0);
    assert_eq!(before.points, 0);
    assert_eq!(before.entries_count, 0);
    assert!(!before.submitted_today);
    assert!(!before.prompt.is_empty());

    let response = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&serde_json::json!({ "text": VALID_TEXT }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let submitted: SubmitEntryResponse = response.json().await.unwrap();

    assert_eq!(submitted.day, 2);
    assert_eq!(submitted.streak, 1);
    assert_eq!(submitted.points, 10);
    assert_eq!(submitted.entries_count, 1);
    assert!(submitted.newly_unlocked.contains(&"entry-1".to_string()));
    assert!(submitted.persisted);

    let after = get_challenge(client, &server.base_url).await;
    assert_eq!(after.day, 2);
    assert!(after.submitted_today);

    let journal: JournalResponse = client
        .get(format!("{}/api/journal", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(journal.entries.len(), 1);
    assert_eq!(journal.entries[0].day, 1);
    assert_eq!(journal.entries[0].text, VALID_TEXT);
    assert_eq!(journal.entries[0].prompt, before.prompt);
    assert!(!journal.entries[0].date.is_empty());
}

#[tokio::test]
async fn http_second_submission_same_day_is_a_conflict() {
    let server = spawn_server().await;
    let client = &*CLIENT;

    let first = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&serde_json::json!({ "text": VALID_TEXT }))
        .send()
        .await
        .unwrap();
    assert!(first.status().is_success());

    let second = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&serde_json::json!({ "text": "Another perfectly valid entry." }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status().as_u16(), 409);

    let snapshot = get_challenge(client, &server.base_url).await;
    assert_eq!(snapshot.entries_count, 1);
    assert_eq!(snapshot.day, 2);
}

#[tokio::test]
async fn http_short_entry_is_rejected_without_state_change() {
    let server = spawn_server().await;
    let client = &*CLIENT;

    let response = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&serde_json::json!({ "text": "short" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    let snapshot = get_challenge(client, &server.base_url).await;
    assert_eq!(snapshot.day, 1);
    assert_eq!(snapshot.entries_count, 0);
    assert!(!snapshot.submitted_today);
}

#[tokio::test]
async fn http_share_unlocks_the_share_badge_once() {
    let server = spawn_server().await;
    let client = &*CLIENT;

    let first: ShareResponse = client
        .post(format!("{}/api/share", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first.newly_unlocked, vec!["share-1".to_string()]);
    assert!(first.persisted);

    let second: ShareResponse = client
        .post(format!("{}/api/share", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(second.newly_unlocked.is_empty());

    let badges: BadgesResponse = client
        .get(format!("{}/api/badges", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let share = badges
        .badges
        .iter()
        .find(|badge| badge.id == "share-1")
        .expect("missing share badge");
    assert!(share.unlocked);
    assert!(badges
        .badges
        .iter()
        .filter(|badge| badge.id != "share-1")
        .all(|badge| !badge.unlocked));
}

#[tokio::test]
async fn http_stats_reflect_todays_entry() {
    let server = spawn_server().await;
    let client = &*CLIENT;

    let response = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&serde_json::json!({ "text": VALID_TEXT }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.summary.total_entries, 1);
    assert_eq!(stats.summary.current_day, 2);
    assert_eq!(stats.last_14_days.len(), 14);
    let today = stats.last_14_days.last().unwrap();
    assert_eq!(today.entries, 1);
    assert!(!today.date.is_empty());
}

#[tokio::test]
async fn http_reset_discards_all_progress() {
    let server = spawn_server().await;
    let client = &*CLIENT;

    let submit = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&serde_json::json!({ "text": VALID_TEXT }))
        .send()
        .await
        .unwrap();
    assert!(submit.status().is_success());

    let reset = client
        .post(format!("{}/api/reset", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(reset.status().is_success());

    let snapshot = get_challenge(client, &server.base_url).await;
    assert_eq!(snapshot.day, 1);
    assert_eq!(snapshot.streak, 0);
    assert_eq!(snapshot.points, 0);
    assert_eq!(snapshot.entries_count, 0);
    assert!(!snapshot.submitted_today);

    let journal: JournalResponse = client
        .get(format!("{}/api/journal", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(journal.entries.is_empty());
}

#[tokio::test]
async fn http_index_serves_the_app_shell() {
    let server = spawn_server().await;
    let client = &*CLIENT;

    let response = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("30-Day Gratitude Challenge"));
    assert!(body.contains("1 / 30"));
}
