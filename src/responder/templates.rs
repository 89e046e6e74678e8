//! Reply wording. Every string the bot can say lives here.

use crate::metrics::MetricsSnapshot;
use crate::models::Mood;

pub const ADDICTION_HIGH: &str = "I notice your addiction risk is high. Let's work on some strategies: 1) Set app timers 2) Take regular breaks 3) Find offline activities you enjoy";

pub const ADDICTION_MEDIUM: &str = "Your addiction level is moderate. To improve, try: 1) No phone during meals 2) Keep phone away while sleeping 3) Use focus mode when working";

pub const ADDICTION_LOW: &str = "You're maintaining a healthy relationship with your phone. Great job!";

pub const TIPS: &str = "Here are some tips to maintain digital wellbeing:\n1) Use Night Light mode\n2) Take regular screen breaks\n3) Enable Do Not Disturb during work\n4) Practice mindful usage";

pub const NO_MOOD_YET: &str = "You haven't shared your mood yet. Try using the mood tracker above!";

pub const FILLERS: [&str; 4] = [
    "How can I help you manage your smartphone usage better?",
    "Would you like some tips for digital wellbeing?",
    "I'm here to help you maintain a healthy relationship with technology.",
    "Let me know if you'd like to discuss your usage patterns.",
];

pub fn screen_time_high(screen_time: &str) -> String {
    format!(
        "Your screen time of {} is above recommended levels. Try setting app limits or using grayscale mode to reduce usage.",
        screen_time
    )
}

pub fn screen_time_healthy(screen_time: &str) -> String {
    format!(
        "Your screen time of {} is within healthy limits. Keep maintaining a good digital balance!",
        screen_time
    )
}

pub fn unlocks_frequent(unlocks: u32) -> String {
    format!(
        "You've unlocked your phone {} times today. That's quite frequent! Try keeping your phone face-down or in another room when focusing.",
        unlocks
    )
}

pub fn unlocks_reasonable(unlocks: u32) -> String {
    format!(
        "Your unlock count of {} is reasonable. Remember, fewer checks often mean better focus!",
        unlocks
    )
}

pub fn last_mood(mood: Mood, minutes_ago: i64) -> String {
    format!(
        "Your last recorded mood was {} ({} minutes ago). Would you like to update how you're feeling now?",
        mood.label().to_lowercase(),
        minutes_ago
    )
}

/// The line added on the user's behalf when they submit a mood.
pub fn mood_statement(mood: Mood) -> String {
    format!("I'm feeling {} right now.", mood.label().to_lowercase())
}

/// The bot's answer to a mood submission.
pub fn mood_encouragement(mood: Mood, metrics: &MetricsSnapshot) -> String {
    match mood {
        Mood::VeryHappy => format!(
            "That's wonderful to hear! Your positive mood combined with a screen time of {} suggests a good balance. Keep it up! 🌟",
            metrics.screen_time_label()
        ),
        Mood::Happy => format!(
            "Good to hear you're happy! Would you like some tips to maintain this positive state while managing your {} daily phone checks?",
            metrics.unlock_count
        ),
        Mood::Neutral => format!(
            "A neutral mood is perfectly okay. I notice you've spent {} on your phone today. Would you like to try some engaging offline activities?",
            metrics.screen_time_label()
        ),
        Mood::Sad => "I'm sorry you're feeling sad. Sometimes excessive phone use can affect our mood. Would you like to try some mood-lifting activities away from screens?".to_string(),
        Mood::VerySad => format!(
            "I'm here to support you. Your current screen time is {}. Research shows reducing screen time can help improve mood. Would you like to talk about it?",
            metrics.screen_time_label()
        ),
    }
}
