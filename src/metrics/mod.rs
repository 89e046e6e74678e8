mod types;

pub use types::{format_duration, AddictionLevel, AppUsage, MetricsSnapshot, UsageReport};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Whether the user has granted access to usage statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    Granted,
    Denied,
}

/// Supplies usage figures. Callers must check `permission()` first and show a
/// permission prompt instead of querying when access is denied.
pub trait MetricsSource: Send + Sync {
    fn permission(&self) -> Permission;

    fn snapshot(&self) -> Result<MetricsSnapshot>;
}

/// A source that always reports the same figures.
#[derive(Debug, Clone)]
pub struct StaticMetricsSource {
    snapshot: MetricsSnapshot,
    permission: Permission,
}

impl StaticMetricsSource {
    pub fn new(snapshot: MetricsSnapshot) -> Self {
        Self {
            snapshot,
            permission: Permission::Granted,
        }
    }

    pub fn from_report(report: UsageReport) -> Self {
        Self::new(report.into_snapshot())
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }
}

impl MetricsSource for StaticMetricsSource {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn snapshot(&self) -> Result<MetricsSnapshot> {
        if self.permission == Permission::Denied {
            bail!("usage access has not been granted");
        }
        Ok(self.snapshot)
    }
}
