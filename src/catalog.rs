use chrono::{Datelike, NaiveDate};

/// How a badge is earned. Streak and entry-count badges are evaluated after
/// every accepted submission; share badges only when the user shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Streak(u32),
    EntryCount(u32),
    Share,
}

#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: BadgeKind,
}

impl Badge {
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            BadgeKind::Streak(_) => "streak",
            BadgeKind::EntryCount(_) => "entries",
            BadgeKind::Share => "share",
        }
    }

    pub fn milestone(&self) -> Option<u32> {
        match self.kind {
            BadgeKind::Streak(m) | BadgeKind::EntryCount(m) => Some(m),
            BadgeKind::Share => None,
        }
    }
}

pub const BADGES: &[Badge] = &[
    Badge {
        id: "entry-1",
        name: "First Step",
        description: "Completed your first entry.",
        kind: BadgeKind::EntryCount(1),
    },
    Badge {
        id: "streak-3",
        name: "Consistent Heart",
        description: "Maintained a 3-day streak.",
        kind: BadgeKind::Streak(3),
    },
    Badge {
        id: "streak-7",
        name: "Weekly Warrior",
        description: "Maintained a 7-day streak.",
        kind: BadgeKind::Streak(7),
    },
    Badge {
        id: "entry-10",
        name: "Journaler",
        description: "Completed 10 entries.",
        kind: BadgeKind::EntryCount(10),
    },
    Badge {
        id: "streak-21",
        name: "New Habit",
        description: "Maintained a 21-day streak.",
        kind: BadgeKind::Streak(21),
    },
    Badge {
        id: "streak-30",
        name: "Gratitude Master",
        description: "Maintained a 30-day streak.",
        kind: BadgeKind::Streak(30),
    },
    Badge {
        id: "share-1",
        name: "Ambassador",
        description: "Shared the challenge with someone.",
        kind: BadgeKind::Share,
    },
];

/// One writing prompt per challenge day. Days past the end of the list fall
/// back to the last prompt.
pub const PROMPTS: &[&str] = &[
    "What made you smile today?",
    "Name a person you are grateful for, and why.",
    "What is something about your home you appreciate?",
    "Describe a small pleasure you enjoyed recently.",
    "What skill or ability are you thankful to have?",
    "Recall a kindness someone showed you this week.",
    "What part of nature are you grateful for today?",
    "Which memory always lifts your spirits?",
    "What is something your body did for you today?",
    "Name a food or meal you felt thankful for.",
    "What challenge taught you something valuable?",
    "Who made your life easier recently, and how?",
    "What piece of music or art are you grateful for?",
    "Describe a comfort you often take for granted.",
    "What opportunity are you thankful to have had?",
    "Which friendship are you most grateful for?",
    "What did you learn recently that you appreciate?",
    "Name something in your daily routine you enjoy.",
    "What tool or object makes your days better?",
    "Recall a moment of laughter from this week.",
    "What tradition or ritual are you grateful for?",
    "Who believed in you when it mattered?",
    "What about your work or studies are you thankful for?",
    "Describe a place that makes you feel at peace.",
    "What mistake are you grateful to have made?",
    "Name a book or story that changed you for the better.",
    "What act of generosity have you witnessed lately?",
    "Which quality in yourself are you thankful for?",
    "What are you looking forward to, and why?",
    "Looking back on the month, what are you most grateful for?",
];

pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "Gratitude turns what we have into enough.",
        author: "Aesop",
    },
    Quote {
        text: "Wear gratitude like a cloak, and it will feed every corner of your life.",
        author: "Rumi",
    },
    Quote {
        text: "When you are grateful, fear disappears and abundance appears.",
        author: "Anthony Robbins",
    },
    Quote {
        text: "Gratitude is not only the greatest of virtues, but the parent of all the others.",
        author: "Cicero",
    },
    Quote {
        text: "The root of joy is gratefulness.",
        author: "David Steindl-Rast",
    },
    Quote {
        text: "Enjoy the little things, for one day you may look back and realize they were the big things.",
        author: "Robert Brault",
    },
    Quote {
        text: "Gratitude is the fairest blossom which springs from the soul.",
        author: "Henry Ward Beecher",
    },
];

pub fn prompt_for_day(day: u32) -> &'static str {
    let index = day.saturating_sub(1) as usize;
    PROMPTS
        .get(index)
        .copied()
        .unwrap_or(PROMPTS[PROMPTS.len() - 1])
}

/// Quote of the day: stable for a given date, cycles through the catalog.
pub fn quote_of_the_day(today: NaiveDate) -> &'static Quote {
    &QUOTES[today.ordinal0() as usize % QUOTES.len()]
}
