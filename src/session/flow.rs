//! One-shot submission flows. Each call appends to the mood log and the
//! transcript and never touches entries already there.

use crate::clock::Clock;
use crate::metrics::MetricsSnapshot;
use crate::models::{Mood, MoodLog, Transcript};
use crate::responder::{templates, IntentResponder};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// First half of a mood submission: the mood is logged and the user's
/// statement added to the transcript.
pub fn record_mood(mood: Mood, mood_log: &mut MoodLog, transcript: &mut Transcript, clock: &dyn Clock) {
    mood_log.record(mood, clock.now());
    transcript.push_user(templates::mood_statement(mood));
}

/// Log a mood and answer it. `None` (no mood picked) changes nothing and
/// returns `false`.
pub fn submit_mood(
    mood: Option<Mood>,
    mood_log: &mut MoodLog,
    transcript: &mut Transcript,
    responder: &IntentResponder,
    metrics: &MetricsSnapshot,
) -> bool {
    let Some(mood) = mood else {
        log_debug!("mood submission ignored: no mood selected");
        return false;
    };

    record_mood(mood, mood_log, transcript, responder.clock());
    transcript.push_bot(templates::mood_encouragement(mood, metrics));
    true
}

pub fn is_blank(message: &str) -> bool {
    message.trim().is_empty()
}

/// Add a chat message and the bot's reply. Blank messages change nothing
/// and return `false`.
pub fn submit_chat(
    message: &str,
    mood_log: &MoodLog,
    transcript: &mut Transcript,
    responder: &IntentResponder,
    metrics: &MetricsSnapshot,
) -> bool {
    if is_blank(message) {
        log_debug!("chat submission ignored: blank message");
        return false;
    }

    transcript.push_user(message);
    let reply = responder.respond(message, metrics, mood_log);
    transcript.push_bot(reply);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::metrics::AddictionLevel;
    use crate::models::Sender;
    use crate::responder::FixedChooser;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn responder() -> (IntentResponder, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 10, 18, 30, 0).unwrap(),
        ));
        let responder = IntentResponder::default()
            .with_clock(clock.clone())
            .with_chooser(Arc::new(FixedChooser(0)));
        (responder, clock)
    }

    #[test]
    fn test_submit_mood_without_selection_is_noop() {
        let (responder, _) = responder();
        let mut log = MoodLog::new();
        let mut transcript = Transcript::new();

        let applied = submit_mood(None, &mut log, &mut transcript, &responder, &MetricsSnapshot::default());

        assert!(!applied);
        assert!(log.is_empty());
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_submit_mood_appends_log_and_two_lines() {
        let (responder, clock) = responder();
        let mut log = MoodLog::new();
        let mut transcript = Transcript::new();
        let metrics = MetricsSnapshot::new(330, 120, AddictionLevel::Medium);

        assert!(submit_mood(Some(Mood::VerySad), &mut log, &mut transcript, &responder, &metrics));

        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().mood, Mood::VerySad);
        assert_eq!(log.last().unwrap().timestamp, clock.now());

        let entries = transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sender, Sender::User);
        assert_eq!(entries[0].text, "I'm feeling very sad right now.");
        assert_eq!(entries[1].sender, Sender::Bot);
        assert!(entries[1].text.contains("reducing screen time can help improve mood."));
    }

    #[test]
    fn test_submit_chat_blank_is_noop() {
        let (responder, _) = responder();
        let mut transcript = Transcript::new();
        for blank in ["", "   ", "\t\n"] {
            assert!(!submit_chat(blank, &MoodLog::new(), &mut transcript, &responder, &MetricsSnapshot::default()));
        }
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_submit_chat_appends_message_and_reply() {
        let (responder, _) = responder();
        let mut transcript = Transcript::new();
        let metrics = MetricsSnapshot::default();

        assert!(submit_chat("Give me some tips", &MoodLog::new(), &mut transcript, &responder, &metrics));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].text, "Give me some tips");
        assert_eq!(transcript.entries()[1].text, templates::TIPS);
    }
}
