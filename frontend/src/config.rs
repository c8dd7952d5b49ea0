use log::Level;

/// The intro ticks once per word of this line before the riddle shows up.
pub const INTRO_CADENCE: [&str; 6] = ["Only", "the", "brightest", "minds", "will", "enter"];

/// Headline words revealed one per intro tick, the first one right away.
pub const HEADLINE_WORDS: [&str; 3] = ["UNLOCK", "YOUR", "OPPORTUNITY"];

/// Milliseconds between two intro words.
pub const WORD_INTERVAL_MS: u32 = 800;

/// Pause after the last word before the riddle panel shows up.
pub const RIDDLE_DELAY_MS: u32 = 100;

/// How long the hint toast stays on screen.
pub const HINT_DURATION_MS: u32 = 3_000;

/// Compared case-insensitively, untrimmed.
pub const SECRET_ANSWER: &str = "ecell";

pub const RHYMING_HINT: &str = "Not a phone, not a jail,\nBut a 'cell' where ideas sail!";
pub const META_HINT: &str = "Take the first letters of each clue.";

/// Misses before the meta hint takes over from the rhyming one.
pub const MISSES_BEFORE_META_HINT: u32 = 2;

pub const INCORRECT_HEADING: &str =
    "Incorrect answer. Provide the correct answer to gain entry to Illuminate.";

pub const RIDDLE_VERSE: [&str; 3] = [
    "I am the home where ideas grow,",
    "I connect students and startups, you know.",
    "Your answer will reveal the truth.",
];

// First letters spell the answer.
pub const RIDDLE_CLUES: [&str; 5] = [
    "Eager to empower young minds.",
    "Connecting innovation with collaboration.",
    "Entrepreneurship is in my DNA.",
    "Leaders of tomorrow start here.",
    "Learn, build, and grow with me.",
];

pub const INVITE_URL: &str = "https://chat.whatsapp.com/LwAzAUmGAITC625WqO6f29";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/ecell_.jec?igsh=ejZoc2NyN3JzYWRr";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/e-cell-jec-iitb/";
pub const X_URL: &str = "https://x.com/IedcE56917";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
