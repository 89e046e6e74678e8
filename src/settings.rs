use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, sync::Arc, time::Duration};

use crate::metrics::{MetricsSnapshot, Permission, StaticMetricsSource, UsageReport};
use crate::responder::{IntentResponder, RandomChooser, ResponderConfig};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub const DEFAULT_SETTINGS_FILE: &str = "unplug.json";
pub const SETTINGS_PATH_ENV: &str = "UNPLUG_SETTINGS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub responder: ResponderConfig,
    /// How long the bot "types" before a reply appears.
    pub reply_delay_ms: u64,
    /// Figures reported by the built-in metrics source.
    pub metrics: MetricsSnapshot,
    /// Raw per-app usage. When present it replaces `metrics`.
    pub usage: Option<UsageReport>,
    pub usage_permission_granted: bool,
    /// Fixes the filler sequence when set.
    pub chooser_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            responder: ResponderConfig::default(),
            reply_delay_ms: 1000,
            metrics: MetricsSnapshot::default(),
            usage: None,
            usage_permission_granted: true,
            chooser_seed: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. A missing file gives defaults; a file
    /// that does not parse is reported and also gives defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log_info!("no settings at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        match serde_json::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                log_warn!("ignoring malformed settings at {}: {}", path.display(), err);
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn build_responder(&self) -> IntentResponder {
        let responder = IntentResponder::new(self.responder.clone());
        match self.chooser_seed {
            Some(seed) => responder.with_chooser(Arc::new(RandomChooser::seeded(seed))),
            None => responder,
        }
    }

    pub fn metrics_source(&self) -> StaticMetricsSource {
        let permission = if self.usage_permission_granted {
            Permission::Granted
        } else {
            Permission::Denied
        };
        let source = match &self.usage {
            Some(report) => StaticMetricsSource::from_report(report.clone()),
            None => StaticMetricsSource::new(self.metrics),
        };
        source.with_permission(permission)
    }
}
