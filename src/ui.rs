use crate::models::ChallengeSnapshot;

pub fn render_index(snapshot: &ChallengeSnapshot) -> String {
    INDEX_HTML
        .replace("{{DAY}}", &snapshot.day.to_string())
        .replace("{{TOTAL}}", &snapshot.total_days.to_string())
        .replace("{{STREAK}}", &snapshot.streak.to_string())
        .replace("{{POINTS}}", &snapshot.points.to_string())
        .replace("{{ENTRIES}}", &snapshot.entries_count.to_string())
        .replace("{{PROMPT}}", &snapshot.prompt)
        .replace(
            "{{SUBMITTED}}",
            if snapshot.submitted_today { "true" } else { "false" },
        )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>30-Day Gratitude Challenge</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f1e7;
      --bg-2: #f9d9c0;
      --ink: #2b2a28;
      --accent: #e0694f;
      --accent-2: #3c5a52;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(60, 90, 82, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #fdeede 60%, #f7f1e8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(60, 90, 82, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.streak {
      color: var(--accent);
    }

    .prompt-card {
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(60, 90, 82, 0.08);
      display: grid;
      gap: 14px;
    }

    .prompt-card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .prompt-text {
      margin: 0;
      font-style: italic;
      color: #50645e;
    }

    textarea {
      width: 100%;
      min-height: 120px;
      border-radius: 14px;
      border: 1px solid rgba(60, 90, 82, 0.2);
      padding: 14px;
      font-family: inherit;
      font-size: 1rem;
      resize: vertical;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .btn-submit {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(224, 105, 79, 0.3);
    }

    .btn-share {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(60, 90, 82, 0.3);
    }

    .btn-reset {
      background: transparent;
      color: #a14434;
      border: 1px solid rgba(161, 68, 52, 0.4);
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .badges {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 12px;
    }

    .badge {
      background: white;
      border-radius: 16px;
      padding: 14px;
      border: 1px solid rgba(60, 90, 82, 0.08);
      display: grid;
      gap: 4px;
      opacity: 0.45;
    }

    .badge.unlocked {
      opacity: 1;
      border-color: rgba(224, 105, 79, 0.5);
    }

    .badge .name {
      font-weight: 600;
      color: var(--accent-2);
    }

    .badge .desc {
      font-size: 0.85rem;
      color: #6f6a65;
    }

    .journal {
      display: grid;
      gap: 12px;
    }

    .journal-entry {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(60, 90, 82, 0.08);
    }

    .journal-entry .meta {
      font-size: 0.85rem;
      color: #8b857d;
      margin-bottom: 6px;
    }

    .journal-entry .prompt {
      font-size: 0.9rem;
      font-style: italic;
      color: #50645e;
      margin: 0 0 6px;
    }

    .journal-entry .text {
      margin: 0;
    }

    .quote {
      text-align: center;
      color: #50645e;
      font-style: italic;
    }

    .quote .author {
      display: block;
      margin-top: 6px;
      font-style: normal;
      font-size: 0.9rem;
      color: #8b857d;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
      text-align: center;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body data-submitted="{{SUBMITTED}}">
  <main class="app">
    <header>
      <h1>30-Day Gratitude Challenge</h1>
      <p class="subtitle">One entry a day. Keep the streak alive, collect the badges.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Day</span>
        <span id="day" class="value">{{DAY}} / {{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Streak</span>
        <span id="streak" class="value streak">{{STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Points</span>
        <span id="points" class="value">{{POINTS}}</span>
      </div>
      <div class="stat">
        <span class="label">Entries</span>
        <span id="entries" class="value">{{ENTRIES}}</span>
      </div>
    </section>

    <section class="prompt-card">
      <h2>Today's prompt</h2>
      <p id="prompt" class="prompt-text">{{PROMPT}}</p>
      <form id="entry-form">
        <textarea id="entry-text" placeholder="Write at least 10 characters..." minlength="10" required></textarea>
        <div class="actions" style="margin-top: 12px;">
          <button class="btn-submit" id="submit-btn" type="submit">Save today's entry</button>
          <button class="btn-share" id="share-btn" type="button">Share the challenge</button>
          <button class="btn-reset" id="reset-btn" type="button">Reset challenge</button>
        </div>
      </form>
    </section>

    <section>
      <h2>Badges</h2>
      <div class="badges" id="badges"></div>
    </section>

    <section>
      <h2>Journal</h2>
      <div class="journal" id="journal"></div>
    </section>

    <p class="quote" id="quote"></p>

    <div class="status" id="status"></div>
    <p class="hint">Entries are kept per calendar day (UTC). One entry per day; missing a day resets the streak.</p>
  </main>

  <script>
    const dayEl = document.getElementById('day');
    const streakEl = document.getElementById('streak');
    const pointsEl = document.getElementById('points');
    const entriesEl = document.getElementById('entries');
    const promptEl = document.getElementById('prompt');
    const statusEl = document.getElementById('status');
    const badgesEl = document.getElementById('badges');
    const journalEl = document.getElementById('journal');
    const quoteEl = document.getElementById('quote');
    const entryForm = document.getElementById('entry-form');
    const entryText = document.getElementById('entry-text');
    const submitBtn = document.getElementById('submit-btn');
    const shareBtn = document.getElementById('share-btn');
    const resetBtn = document.getElementById('reset-btn');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateChallenge = (data) => {
      dayEl.textContent = `${data.day} / ${data.total_days}`;
      streakEl.textContent = data.streak;
      pointsEl.textContent = data.points;
      entriesEl.textContent = data.entries_count;
      promptEl.textContent = data.prompt;
      submitBtn.disabled = data.submitted_today;
      submitBtn.textContent = data.submitted_today
        ? 'Already saved today'
        : "Save today's entry";
    };

    const renderBadges = (badges) => {
      badgesEl.innerHTML = '';
      badges.forEach((badge) => {
        const card = document.createElement('div');
        card.className = badge.unlocked ? 'badge unlocked' : 'badge';
        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = badge.name;
        const desc = document.createElement('span');
        desc.className = 'desc';
        desc.textContent = badge.description;
        card.append(name, desc);
        badgesEl.append(card);
      });
    };

    const renderJournal = (entries) => {
      journalEl.innerHTML = '';
      if (!entries.length) {
        const empty = document.createElement('p');
        empty.className = 'hint';
        empty.textContent = 'No entries yet. Today is a good day to start.';
        journalEl.append(empty);
        return;
      }
      entries.forEach((entry) => {
        const card = document.createElement('div');
        card.className = 'journal-entry';
        const meta = document.createElement('div');
        meta.className = 'meta';
        meta.textContent = `Day ${entry.day} — ${entry.date.slice(0, 10)}`;
        const prompt = document.createElement('p');
        prompt.className = 'prompt';
        prompt.textContent = entry.prompt;
        const text = document.createElement('p');
        text.className = 'text';
        text.textContent = entry.text;
        card.append(meta, prompt, text);
        journalEl.append(card);
      });
    };

    const loadChallenge = async () => {
      const res = await fetch('/api/challenge');
      if (!res.ok) {
        throw new Error('Unable to load challenge');
      }
      updateChallenge(await res.json());
    };

    const loadBadges = async () => {
      const res = await fetch('/api/badges');
      if (!res.ok) {
        throw new Error('Unable to load badges');
      }
      renderBadges((await res.json()).badges);
    };

    const loadJournal = async () => {
      const res = await fetch('/api/journal');
      if (!res.ok) {
        throw new Error('Unable to load journal');
      }
      renderJournal((await res.json()).entries);
    };

    const loadQuote = async () => {
      const res = await fetch('/api/quote');
      if (!res.ok) {
        return;
      }
      const quote = await res.json();
      quoteEl.innerHTML = '';
      quoteEl.append(`“${quote.text}”`);
      const author = document.createElement('span');
      author.className = 'author';
      author.textContent = `— ${quote.author}`;
      quoteEl.append(author);
    };

    const refresh = async () => {
      await Promise.all([loadChallenge(), loadBadges(), loadJournal()]);
    };

    entryForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      setStatus('Saving...', 'info');
      try {
        const res = await fetch('/api/entries', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ text: entryText.value })
        });
        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }
        const data = await res.json();
        entryText.value = '';
        await refresh();
        if (data.newly_unlocked.length) {
          setStatus(`Saved! Badge unlocked: ${data.newly_unlocked.join(', ')}`, 'ok');
        } else if (!data.persisted) {
          setStatus('Saved in memory only; storage is unavailable.', 'error');
        } else {
          setStatus('Saved', 'ok');
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    shareBtn.addEventListener('click', async () => {
      try {
        const res = await fetch('/api/share', { method: 'POST' });
        if (!res.ok) {
          throw new Error('Share failed');
        }
        const data = await res.json();
        await loadBadges();
        setStatus(
          data.newly_unlocked.length ? 'Thanks for sharing! Badge unlocked.' : 'Thanks for sharing!',
          'ok'
        );
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    resetBtn.addEventListener('click', async () => {
      if (!window.confirm('Reset the challenge? All entries will be lost.')) {
        return;
      }
      try {
        const res = await fetch('/api/reset', { method: 'POST' });
        if (!res.ok) {
          throw new Error('Reset failed');
        }
        await refresh();
        setStatus('Challenge reset', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    if (document.body.dataset.submitted === 'true') {
      submitBtn.disabled = true;
      submitBtn.textContent = 'Already saved today';
    }

    refresh().catch((err) => setStatus(err.message, 'error'));
    loadQuote();
  </script>
</body>
</html>
"#;
