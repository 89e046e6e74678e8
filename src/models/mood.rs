use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_warn;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    #[serde(rename = "Very Happy")]
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    #[serde(rename = "Very Sad")]
    VerySad,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::VerySad,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label in any case and with or without separators:
/// `Very Sad`, `very-sad`, `VerySad` and `very_sad` all parse.
impl FromStr for Mood {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "veryhappy" => Ok(Mood::VeryHappy),
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            "verysad" => Ok(Mood::VerySad),
            _ => bail!("Unknown mood '{}'. Expected one of: Very Happy, Happy, Neutral, Sad, Very Sad", s.trim()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub mood: Mood,
    pub timestamp: DateTime<Utc>,
}

/// Chronological, append-only record of mood submissions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mood. Timestamps never go backwards: an instant earlier than
    /// the last entry is stored as the last entry's instant.
    pub fn record(&mut self, mood: Mood, at: DateTime<Utc>) -> &MoodEntry {
        let timestamp = match self.entries.last() {
            Some(last) if at < last.timestamp => {
                log_warn!(
                    "mood timestamp {} precedes last entry {}; clamping",
                    at,
                    last.timestamp
                );
                last.timestamp
            }
            _ => at,
        };

        self.entries.push(MoodEntry { mood, timestamp });
        &self.entries[self.entries.len() - 1]
    }

    pub fn last(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
