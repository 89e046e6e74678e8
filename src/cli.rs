use anyhow::Result;
use std::io::BufRead;
use std::thread;
use tokio::sync::mpsc;

use crate::models::Mood;

const LINE_BUFFER: usize = 16;

/// Shown before the first message.
pub const SUGGESTIONS: [&str; 4] = [
    "How's my screen time?",
    "What's my addiction level?",
    "Give me some tips",
    "How many times did I unlock?",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Chat(String),
    /// `/mood` with no label is a submission with nothing selected.
    Mood(Option<Mood>),
    Metrics,
    History,
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Empty);
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(Command::Chat(line.trim_end_matches(['\r', '\n']).to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "mood" if arg.is_empty() => Command::Mood(None),
        "mood" => Command::Mood(Some(arg.parse()?)),
        "metrics" => Command::Metrics,
        "history" => Command::History,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        // Unknown slash commands are ordinary chat.
        _ => Command::Chat(trimmed.to_string()),
    };
    Ok(command)
}

pub fn usage() -> String {
    let moods: Vec<&str> = Mood::ALL.iter().map(Mood::label).collect();
    format!(
        "Commands:\n  /mood <{}>\n  /metrics\n  /history\n  /help\n  /quit\nAnything else is sent to the assistant.",
        moods.join(" | ")
    )
}

/// Read lines on a dedicated OS thread and forward them over a channel.
///
/// The thread is detached, so a read blocked on an idle terminal never holds
/// up runtime shutdown. The channel closes at end of input, on a read error
/// (after forwarding it), or once the receiver is dropped.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<std::io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}
