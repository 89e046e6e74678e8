use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use unplug_lib::responder::templates;
use unplug_lib::{
    submit_chat, submit_mood, AddictionLevel, FixedChooser, IntentResponder, ManualClock,
    MetricsSnapshot, Mood, MoodLog, Sender, Session, Transcript, TranscriptEntry,
};

fn responder(clock: Arc<ManualClock>, choice: usize) -> IntentResponder {
    IntentResponder::default()
        .with_clock(clock)
        .with_chooser(Arc::new(FixedChooser(choice)))
}

fn start_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 9, 14, 20, 0, 0).unwrap(),
    ))
}

#[test]
fn dashboard_conversation() {
    let clock = start_clock();
    let responder = responder(clock.clone(), 0);
    let metrics = MetricsSnapshot::new(330, 120, AddictionLevel::Medium);
    let mut mood_log = MoodLog::new();
    let mut transcript = Transcript::new();

    assert!(submit_chat("How's my screen time?", &mood_log, &mut transcript, &responder, &metrics));
    let reply = &transcript.last().unwrap().text;
    assert!(reply.contains("above recommended"));
    assert!(reply.contains("5h 30m"));

    assert!(submit_chat("What's my addiction level?", &mood_log, &mut transcript, &responder, &metrics));
    assert_eq!(transcript.last().unwrap().text, templates::ADDICTION_MEDIUM);

    let before = transcript.len();
    assert!(submit_mood(Some(Mood::VerySad), &mut mood_log, &mut transcript, &responder, &metrics));
    assert_eq!(transcript.len(), before + 2);
    assert!(transcript.entries()[before + 1]
        .text
        .contains("reducing screen time can help improve mood."));

    clock.advance(Duration::minutes(12));
    assert!(submit_chat("how am I feeling?", &mood_log, &mut transcript, &responder, &metrics));
    assert!(transcript
        .last()
        .unwrap()
        .text
        .contains("very sad (12 minutes ago)"));
}

#[test]
fn unlock_count_within_threshold_is_reasonable() {
    let responder = responder(start_clock(), 0);
    for unlocks in [0, 1, 57, 100] {
        let metrics = MetricsSnapshot::new(60, unlocks, AddictionLevel::Low);
        let reply = responder.respond("unlock count?", &metrics, &MoodLog::new());
        assert!(reply.contains("reasonable"), "{unlocks}: {reply}");
    }
}

#[test]
fn high_screen_time_always_flagged() {
    let responder = responder(start_clock(), 0);
    for minutes in [301, 330, 480, 1440] {
        let metrics = MetricsSnapshot::new(minutes, 0, AddictionLevel::Low);
        let reply = responder.respond("tell me about my screen time", &metrics, &MoodLog::new());
        assert!(reply.contains("above recommended"));
        assert!(reply.contains(&hours_label(minutes)));
    }
}

fn hours_label(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[test]
fn histories_are_append_only() {
    let clock = start_clock();
    let responder = Arc::new(responder(clock.clone(), 3));
    let mut session = Session::new(responder);
    let metrics = MetricsSnapshot::default();

    enum Step {
        Chat(&'static str),
        Mood(Option<Mood>),
        AbandonedChat(&'static str),
    }

    let steps = [
        Step::Chat("hi"),
        Step::Mood(Some(Mood::Happy)),
        Step::Chat(""),
        Step::Mood(None),
        Step::AbandonedChat("screen time?"),
        Step::Chat("mood"),
        Step::Mood(Some(Mood::Sad)),
        Step::Chat("   "),
        Step::Chat("any tips?"),
    ];

    let mut transcript_snapshot: Vec<TranscriptEntry> = Vec::new();
    let mut mood_snapshot = Vec::new();

    for step in steps {
        clock.advance(Duration::seconds(45));
        match step {
            Step::Chat(text) => {
                if let Some(pending) = session.submit_chat(text) {
                    pending.deliver(&metrics);
                }
            }
            Step::Mood(mood) => {
                if let Some(pending) = session.submit_mood(mood) {
                    pending.deliver(&metrics);
                }
            }
            Step::AbandonedChat(text) => {
                if let Some(pending) = session.submit_chat(text) {
                    pending.abandon();
                }
            }
        }

        let transcript = session.transcript().entries();
        assert!(transcript.len() >= transcript_snapshot.len());
        assert_eq!(&transcript[..transcript_snapshot.len()], &transcript_snapshot[..]);
        transcript_snapshot = transcript.to_vec();

        let moods = session.mood_log().entries();
        assert!(moods.len() >= mood_snapshot.len());
        assert_eq!(&moods[..mood_snapshot.len()], &mood_snapshot[..]);
        assert!(moods.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        mood_snapshot = moods.to_vec();
    }

    // hi(2) + happy(2) + abandoned(1) + mood(2) + sad(2) + tips(2)
    assert_eq!(transcript_snapshot.len(), 11);
    assert_eq!(mood_snapshot.len(), 2);
    assert_eq!(transcript_snapshot[1].text, templates::FILLERS[3]);
    assert_eq!(transcript_snapshot[4].sender, Sender::User);
    assert_eq!(transcript_snapshot[5].sender, Sender::User);
    assert!(transcript_snapshot[6].text.starts_with("Your last recorded mood was happy"));
}
