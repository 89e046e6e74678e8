pub mod mood;
pub mod transcript;

pub use mood::{Mood, MoodEntry, MoodLog};
pub use transcript::{Sender, Transcript, TranscriptEntry};
