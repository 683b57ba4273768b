//! Per-conversation state: the last champion discussed and the exchange log.
//!
//! Each conversation owns its own `SessionContext`; the knowledge base is
//! shared read-only between them. History is append-only here. Capping,
//! pruning and persisting it is up to whoever stores the transcript.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One question and the answer given to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// When the answer was produced.
    pub timestamp: DateTime<Utc>,
    /// What the user asked.
    pub input: String,
    /// What the assistant answered.
    pub response: String,
}

/// Conversation state threaded through entity resolution.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    last_entity: Option<String>,
    history: Vec<Exchange>,
}

impl SessionContext {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session that already has a champion in focus.
    pub fn with_last_entity(entity: impl Into<String>) -> Self {
        Self {
            last_entity: Some(entity.into()),
            history: Vec::new(),
        }
    }

    /// The champion a pronoun currently refers to.
    pub fn last_entity(&self) -> Option<&str> {
        self.last_entity.as_deref()
    }

    /// All exchanges, oldest first.
    pub fn history(&self) -> &[Exchange] {
        &self.history
    }

    /// The most recent `limit` exchanges, oldest first.
    pub fn recent(&self, limit: usize) -> &[Exchange] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    /// Record a completed query.
    ///
    /// `entity` is the champion the query resolved to, if any; it becomes
    /// the new pronoun target. An unresolved query keeps the old target.
    pub fn record(&mut self, entity: Option<&str>, input: &str, response: &str) {
        if let Some(entity) = entity {
            self.last_entity = Some(entity.to_string());
        }
        self.history.push(Exchange {
            timestamp: Utc::now(),
            input: input.to_string(),
            response: response.to_string(),
        });
    }

    /// Forget the pronoun target. History is kept.
    pub fn reset(&mut self) {
        self.last_entity = None;
    }
}

/// Clock time of an exchange in the local zone, as shown during the chat.
fn local_time(exchange: &Exchange) -> String {
    exchange.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Render exchanges as markdown.
pub fn export_markdown(exchanges: &[Exchange]) -> String {
    let mut out = String::from("# Rift Session\n\n");
    for exchange in exchanges {
        let time = local_time(exchange);
        out.push_str(&format!("**[{time}] You:** {}\n\n", exchange.input));
        out.push_str(&format!("**Bot:**\n\n{}\n\n", exchange.response));
    }
    out
}

/// Render exchanges as plain text.
pub fn export_text(exchanges: &[Exchange]) -> String {
    let mut out = String::from("Rift Session\n============\n\n");
    for exchange in exchanges {
        let time = local_time(exchange);
        out.push_str(&format!("[{time}] You: {}\n", exchange.input));
        out.push_str(&format!("[{time}] Bot:\n{}\n\n", exchange.response));
    }
    out
}

/// Render exchanges as pretty-printed JSON.
pub fn export_json(exchanges: &[Exchange]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(exchanges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let ctx = SessionContext::new();
        assert!(ctx.last_entity().is_none());
        assert!(ctx.history().is_empty());
    }

    #[test]
    fn record_sets_focus_and_appends() {
        let mut ctx = SessionContext::new();
        ctx.record(Some("Ahri"), "ahri ult", "Ahri's R ability: Spirit Rush");
        ctx.record(None, "hello", "Hello!");
        assert_eq!(ctx.last_entity(), Some("Ahri"));
        assert_eq!(ctx.history().len(), 2);
        assert_eq!(ctx.history()[1].input, "hello");
    }

    #[test]
    fn reset_keeps_history() {
        let mut ctx = SessionContext::with_last_entity("Zed");
        ctx.record(None, "hi", "Hello!");
        ctx.reset();
        assert!(ctx.last_entity().is_none());
        assert_eq!(ctx.history().len(), 1);
    }

    #[test]
    fn recent_takes_the_tail() {
        let mut ctx = SessionContext::new();
        for i in 0..5 {
            ctx.record(None, &format!("q{i}"), "a");
        }
        let tail: Vec<_> = ctx.recent(2).iter().map(|e| e.input.as_str()).collect();
        assert_eq!(tail, vec!["q3", "q4"]);
        assert_eq!(ctx.recent(10).len(), 5);
    }

    #[test]
    fn exports_include_every_exchange() {
        let mut ctx = SessionContext::new();
        ctx.record(Some("Ahri"), "ahri role", "Ahri's role: Mid");
        let md = export_markdown(ctx.history());
        assert!(md.starts_with("# Rift Session"));
        assert!(md.contains("You:** ahri role"));
        assert!(md.contains("Ahri's role: Mid"));

        let text = export_text(ctx.history());
        assert!(text.contains("You: ahri role"));

        let json = export_json(ctx.history()).unwrap();
        let back: Vec<Exchange> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx.history());
    }

    #[test]
    fn exports_use_local_clock_time() {
        let timestamp = DateTime::parse_from_rfc3339("2024-05-01T23:30:15Z")
            .unwrap()
            .with_timezone(&Utc);
        let exchanges = vec![Exchange {
            timestamp,
            input: "zed role".into(),
            response: "Zed's role: Mid".into(),
        }];
        let shown = timestamp.with_timezone(&Local).format("%H:%M:%S").to_string();

        assert!(export_markdown(&exchanges).contains(&format!("**[{shown}] You:** zed role")));
        assert!(export_text(&exchanges).contains(&format!("[{shown}] You: zed role")));
    }
}
