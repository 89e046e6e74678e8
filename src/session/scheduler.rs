use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::metrics::MetricsSnapshot;

use super::state::PendingReply;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Delivers pending replies after a fixed presentation delay. The delay is
/// cosmetic: the reply is computed when the delay ends, and cancelling the
/// token while a reply waits abandons it without writing anything.
pub struct ReplyScheduler {
    delay: Duration,
    cancel_token: CancellationToken,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Handle that cancels every pending and future delivery.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// `None` when the delivery was cancelled.
    pub async fn deliver(&self, pending: PendingReply<'_>, metrics: &MetricsSnapshot) -> Option<String> {
        tokio::select! {
            biased;
            _ = self.cancel_token.cancelled() => {
                log_info!("reply delivery cancelled");
                pending.abandon();
                None
            }
            _ = tokio::time::sleep(self.delay) => Some(pending.deliver(metrics)),
        }
    }
}
