//! Interactive conversation loop.

use std::borrow::Cow;
use std::io::{self, BufRead, IsTerminal, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use rift_query::session::{Exchange, export_json, export_markdown, export_text};
use rift_query::{Assistant, SessionContext};

/// Options for `rift chat`.
pub struct ChatOptions {
    pub typing_delay_ms: u64,
    pub transcript: Option<PathBuf>,
    pub max_history: usize,
}

const EXIT_WORDS: &[&str] = &["exit", "quit", "bye"];

fn timestamp() -> String {
    Local::now().format("[%H:%M:%S]").to_string()
}

fn print_banner(assistant: &Assistant) {
    println!("  {} Rift champion assistant", "Starting".bold());
    println!(
        "  {} champions loaded. Ask about abilities, items, runes, matchups, role or tips.",
        assistant.knowledge_base().len()
    );
    println!(
        "  Type 'help' for examples, 'history' for recent questions, \
         'reset' to change subject, 'exit' to quit.\n"
    );
}

/// Print text one character at a time. A zero delay prints it at once.
fn type_out(text: &str, delay: Duration) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if delay.is_zero() {
        return writeln!(stdout, "{text}");
    }
    for c in text.chars() {
        write!(stdout, "{c}")?;
        stdout.flush()?;
        thread::sleep(delay);
    }
    writeln!(stdout)
}

fn print_history(exchanges: &[Exchange]) {
    if exchanges.is_empty() {
        println!("  No questions yet.\n");
        return;
    }
    for exchange in exchanges {
        let time = exchange.timestamp.with_timezone(&Local).format("%H:%M:%S");
        println!("  {} {}", format!("[{time}]").dimmed(), exchange.input);
    }
    println!();
}

fn write_transcript(path: &Path, exchanges: &[Exchange]) -> Result<(), String> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("md") | Some("markdown") => export_markdown(exchanges),
        Some("json") => export_json(exchanges).map_err(|e| e.to_string())?,
        _ => export_text(exchanges),
    };
    std::fs::write(path, contents)
        .map_err(|e| format!("cannot write transcript {}: {e}", path.display()))
}

pub fn run(assistant: &Assistant, options: ChatOptions) -> Result<(), String> {
    let delay = if io::stdout().is_terminal() {
        Duration::from_millis(options.typing_delay_ms)
    } else {
        Duration::ZERO
    };

    let mut session = SessionContext::new();
    print_banner(assistant);

    let outcome = converse(assistant, &mut session, options.max_history, delay);

    // Save whatever was said, even if the loop ended on an I/O error.
    let saved = match &options.transcript {
        Some(path) => write_transcript(path, session.recent(options.max_history)).map(|()| {
            println!("  Transcript saved to {}", path.display());
        }),
        None => Ok(()),
    };

    outcome.and(saved)
}

fn converse(
    assistant: &Assistant,
    session: &mut SessionContext,
    max_history: usize,
    delay: Duration,
) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return Ok(()), // EOF
            Ok(_) => {}
            Err(e) => return Err(format!("cannot read input: {e}")),
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!("input was not valid UTF-8; invalid bytes replaced");
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let lower = input.to_lowercase();
        if EXIT_WORDS.contains(&lower.as_str()) {
            println!("Goodbye!");
            return Ok(());
        }
        if lower == "history" {
            print_history(session.recent(max_history));
            continue;
        }
        if lower == "reset" {
            session.reset();
            println!("  Okay, starting fresh.\n");
            continue;
        }

        let reply = panic::catch_unwind(AssertUnwindSafe(|| assistant.respond(input, session)));
        println!("{} {}", timestamp().dimmed(), "Bot:".green().bold());
        match reply {
            Ok(text) => type_out(&text, delay).map_err(|e| e.to_string())?,
            Err(_) => {
                tracing::error!(input, "answering failed");
                println!(
                    "{}",
                    "Sorry, something went wrong answering that. Please try another question."
                        .yellow()
                );
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchanges() -> Vec<Exchange> {
        let mut session = SessionContext::new();
        session.record(Some("Ahri"), "ahri role", "Ahri's role: Mid");
        session.history().to_vec()
    }

    #[test]
    fn transcript_format_follows_extension() {
        let dir = tempfile::tempdir().unwrap();

        let md = dir.path().join("session.md");
        write_transcript(&md, &exchanges()).unwrap();
        assert!(std::fs::read_to_string(&md).unwrap().starts_with("# Rift Session"));

        let json = dir.path().join("session.json");
        write_transcript(&json, &exchanges()).unwrap();
        assert!(std::fs::read_to_string(&json).unwrap().trim_start().starts_with('['));

        let txt = dir.path().join("session.log");
        write_transcript(&txt, &exchanges()).unwrap();
        assert!(std::fs::read_to_string(&txt).unwrap().starts_with("Rift Session"));
    }
}
