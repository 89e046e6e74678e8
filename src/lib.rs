pub mod cli;
pub mod clock;
pub mod metrics;
pub mod models;
pub mod responder;
pub mod session;
pub mod settings;
mod utils;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

pub use clock::{Clock, ManualClock, SystemClock};
pub use metrics::{AddictionLevel, MetricsSnapshot, MetricsSource, Permission, UsageReport};
pub use models::{Mood, MoodEntry, MoodLog, Sender, Transcript, TranscriptEntry};
pub use responder::{Chooser, FixedChooser, Intent, IntentResponder, RandomChooser, ResponderConfig, Rule};
pub use session::{submit_chat, submit_mood, PendingReply, ReplyScheduler, Session};
pub use settings::Settings;

use cli::Command;

pub const PERMISSION_DENIED_MESSAGE: &str = "Permission not granted. Please grant usage access.";

/// Open a session only when usage access is granted. `None` means the caller
/// must show [`PERMISSION_DENIED_MESSAGE`] and not talk to the responder.
pub fn start_session(settings: &Settings, source: &dyn MetricsSource) -> Option<Session> {
    if source.permission() == Permission::Denied {
        warn!("usage access denied; assistant not started");
        return None;
    }
    Some(Session::new(Arc::new(settings.build_responder())))
}

/// Terminal front end: a chat loop over stdin/stdout with one session.
pub async fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Unplug starting up...");

    let settings_path = std::env::var(settings::SETTINGS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(settings::DEFAULT_SETTINGS_FILE));
    let settings = Settings::load(&settings_path)?;

    let source = settings.metrics_source();
    let Some(mut session) = start_session(&settings, &source) else {
        println!("{}", PERMISSION_DENIED_MESSAGE);
        return Ok(());
    };
    let scheduler = ReplyScheduler::new(settings.reply_delay());

    let shutdown = scheduler.cancel_token();
    {
        let token = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
    }

    println!("Hi! I'm your digital wellbeing assistant.");
    println!("Ask me about your screen time, usage patterns, or tips for better digital habits!");
    for suggestion in cli::SUGGESTIONS {
        println!("  - {}", suggestion);
    }
    println!("{}", cli::usage());

    let mut lines = cli::spawn_line_reader(std::io::BufReader::new(std::io::stdin()));

    loop {
        print!("> ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let line = tokio::select! {
            line = lines.recv() => line.transpose().context("failed to read from stdin")?,
            _ = shutdown.cancelled() => None,
        };
        let Some(line) = line else {
            break;
        };

        let command = match cli::parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{}", cli::usage()),
            Command::Metrics => {
                let metrics = source.snapshot()?;
                println!(
                    "Screen time: {}\nUnlocks: {}\nAddiction level: {}",
                    metrics.screen_time_label(),
                    metrics.unlock_count,
                    metrics.addiction_level.as_str()
                );
            }
            Command::History => {
                let json = serde_json::to_string_pretty(session.transcript())?;
                println!("{}", json);
            }
            Command::Chat(message) => {
                let Some(pending) = session.submit_chat(&message) else {
                    continue;
                };
                let metrics = source.snapshot()?;
                match scheduler.deliver(pending, &metrics).await {
                    Some(reply) => println!("bot: {}", reply),
                    None => break,
                }
            }
            Command::Mood(None) => println!("Pick a mood first."),
            Command::Mood(Some(mood)) => {
                let Some(pending) = session.submit_mood(Some(mood)) else {
                    continue;
                };
                println!("you: {}", responder::templates::mood_statement(mood));
                let metrics = source.snapshot()?;
                match scheduler.deliver(pending, &metrics).await {
                    Some(reply) => println!("bot: {}", reply),
                    None => break,
                }
                println!("{} moods tracked", session.mood_log().len());
            }
        }
    }

    info!(
        "session {} ended with {} messages and {} moods",
        session.id(),
        session.transcript().len(),
        session.mood_log().len()
    );
    Ok(())
}
