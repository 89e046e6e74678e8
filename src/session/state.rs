use std::sync::Arc;

use uuid::Uuid;

use crate::metrics::MetricsSnapshot;
use crate::models::{Mood, MoodLog, Transcript};
use crate::responder::{templates, IntentResponder};

use super::flow::{is_blank, record_mood};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// One user's conversation: an independent mood log and transcript sharing
/// nothing with other sessions except the (stateless) responder.
pub struct Session {
    id: String,
    responder: Arc<IntentResponder>,
    mood_log: MoodLog,
    transcript: Transcript,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplyRequest {
    Chat(String),
    Mood(Mood),
}

/// A submission whose user side is already in the transcript and whose bot
/// reply has not been written yet.
///
/// It holds the session mutably, so no other submission can start until it
/// is delivered or dropped. Dropping it (or calling [`abandon`](Self::abandon))
/// leaves the session exactly as it was after the user side was recorded.
#[must_use = "a pending reply does nothing unless delivered"]
pub struct PendingReply<'a> {
    session: &'a mut Session,
    request: ReplyRequest,
}

impl Session {
    pub fn new(responder: Arc<IntentResponder>) -> Self {
        let id = Uuid::new_v4().to_string();
        log_info!("session {} started", id);
        Self {
            id,
            responder,
            mood_log: MoodLog::new(),
            transcript: Transcript::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mood_log(&self) -> &MoodLog {
        &self.mood_log
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Record the user's message. `None` when the message is blank.
    pub fn submit_chat(&mut self, message: &str) -> Option<PendingReply<'_>> {
        if is_blank(message) {
            log_debug!("session {}: blank chat message ignored", self.id);
            return None;
        }

        self.transcript.push_user(message);
        Some(PendingReply {
            session: self,
            request: ReplyRequest::Chat(message.to_string()),
        })
    }

    /// Log the mood and the user's statement. `None` when no mood was picked.
    pub fn submit_mood(&mut self, mood: Option<Mood>) -> Option<PendingReply<'_>> {
        let Some(mood) = mood else {
            log_debug!("session {}: mood submission without a mood ignored", self.id);
            return None;
        };

        record_mood(mood, &mut self.mood_log, &mut self.transcript, self.responder.clock());
        Some(PendingReply {
            session: self,
            request: ReplyRequest::Mood(mood),
        })
    }
}

impl<'a> PendingReply<'a> {
    /// Compute the bot reply against `metrics`, append it and return it.
    pub fn deliver(self, metrics: &MetricsSnapshot) -> String {
        let session = self.session;
        let reply = match self.request {
            ReplyRequest::Chat(message) => {
                session
                    .responder
                    .respond(&message, metrics, &session.mood_log)
            }
            ReplyRequest::Mood(mood) => templates::mood_encouragement(mood, metrics),
        };

        session.transcript.push_bot(reply.clone());
        reply
    }

    pub fn abandon(self) {
        log_debug!("session {}: pending reply abandoned", self.session.id);
    }
}
