use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const USAGE_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AddictionLevel {
    Low,
    Medium,
    High,
}

impl AddictionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddictionLevel::Low => "Low",
            AddictionLevel::Medium => "Medium",
            AddictionLevel::High => "High",
        }
    }

    /// Rule-of-thumb risk banding over daily figures.
    /// Low needs every figure under its calm bound; any single figure over
    /// its alarm bound is High; everything in between is Medium.
    pub fn classify(screen_minutes: u32, unlocks: u32, social_minutes: u32) -> Self {
        if screen_minutes < 4 * 60 && unlocks < 100 && social_minutes < 2 * 60 {
            AddictionLevel::Low
        } else if screen_minutes > 8 * 60 || unlocks > 200 || social_minutes > 5 * 60 {
            AddictionLevel::High
        } else {
            AddictionLevel::Medium
        }
    }
}

impl Default for AddictionLevel {
    fn default() -> Self {
        AddictionLevel::Medium
    }
}

/// Read-only usage figures handed to the responder for one request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub screen_time_minutes: u32,
    pub unlock_count: u32,
    pub addiction_level: AddictionLevel,
}

impl MetricsSnapshot {
    pub fn new(screen_time_minutes: u32, unlock_count: u32, addiction_level: AddictionLevel) -> Self {
        Self {
            screen_time_minutes,
            unlock_count,
            addiction_level,
        }
    }

    /// Screen time as shown to the user, e.g. `5h 30m`.
    pub fn screen_time_label(&self) -> String {
        format_duration(self.screen_time_minutes)
    }
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            screen_time_minutes: 330,
            unlock_count: 120,
            addiction_level: AddictionLevel::Medium,
        }
    }
}

/// Foreground time of one package inside a usage window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppUsage {
    pub package: String,
    pub foreground_ms: u64,
}

/// Raw per-app usage for a window, as a platform usage-statistics query
/// would return it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub apps: Vec<AppUsage>,
    pub unlock_count: u32,
    pub social_media_minutes: u32,
}

impl UsageReport {
    /// Empty report covering the 24 hours that end at `end`.
    pub fn trailing_day(end: DateTime<Utc>) -> Self {
        Self {
            window_start: end - Duration::hours(USAGE_WINDOW_HOURS),
            window_end: end,
            apps: Vec::new(),
            unlock_count: 0,
            social_media_minutes: 0,
        }
    }

    pub fn record_app(&mut self, package: impl Into<String>, foreground_ms: u64) {
        self.apps.push(AppUsage {
            package: package.into(),
            foreground_ms,
        });
    }

    /// Sum of foreground time across apps, truncated to whole minutes.
    pub fn total_screen_time_minutes(&self) -> u32 {
        let total_ms: u64 = self
            .apps
            .iter()
            .fold(0u64, |acc, app| acc.saturating_add(app.foreground_ms));
        u32::try_from(total_ms / 1000 / 60).unwrap_or(u32::MAX)
    }

    pub fn into_snapshot(self) -> MetricsSnapshot {
        let screen_time_minutes = self.total_screen_time_minutes();
        let addiction_level = AddictionLevel::classify(
            screen_time_minutes,
            self.unlock_count,
            self.social_media_minutes,
        );
        MetricsSnapshot {
            screen_time_minutes,
            unlock_count: self.unlock_count,
            addiction_level,
        }
    }
}

pub fn format_duration(total_minutes: u32) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
