use serde::{Deserialize, Serialize};

/// Thresholds the responder compares usage figures against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponderConfig {
    /// Daily screen time above this many minutes is called out as too much.
    pub healthy_screen_time_minutes: u32,

    /// Daily unlocks above this count are called out as too frequent.
    pub unlock_threshold: u32,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            healthy_screen_time_minutes: 300,
            unlock_threshold: 100,
        }
    }
}
