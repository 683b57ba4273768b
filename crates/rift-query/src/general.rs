//! Replies for questions that name no champion.

use rift_kb::KnowledgeBase;

use crate::resolver::{suggest, tokenize};

const GREETINGS: &[&str] = &["hi", "hello", "hey", "heya", "yo", "greetings", "howdy"];
const HELP_WORDS: &[&str] = &["help", "commands", "usage"];
const THANKS: &[&str] = &["thanks", "thank", "thx", "ty"];

/// How many "did you mean" names to offer.
const SUGGESTION_LIMIT: usize = 3;

/// Answer a question that did not resolve to any champion.
pub fn general_response(text: &str, kb: &KnowledgeBase) -> String {
    let tokens = tokenize(text);

    if mentions(&tokens, HELP_WORDS) {
        return help_text(kb);
    }
    if mentions(&tokens, GREETINGS) {
        return "Hello! Ask me about any champion's abilities, items, runes, matchups, role or tips."
            .to_string();
    }
    if mentions(&tokens, THANKS) {
        return "You're welcome! Anything else about a champion?".to_string();
    }

    let mut out = format!(
        "I'm not sure which champion you mean. Try asking something like \"What is {}'s ult?\"",
        example_name(kb)
    );
    let hints = suggest(text, kb, SUGGESTION_LIMIT);
    if !hints.is_empty() {
        out.push_str(&format!("\nDid you mean: {}?", hints.join(", ")));
    }
    out
}

fn mentions(tokens: &[String], words: &[&str]) -> bool {
    tokens.iter().any(|t| words.contains(&t.as_str()))
}

fn example_name(kb: &KnowledgeBase) -> &str {
    kb.keys().next().unwrap_or("Ahri")
}

/// The list of supported question forms.
///
/// Mirrors the classifier's rules, in precedence order.
pub fn help_text(kb: &KnowledgeBase) -> String {
    let name = example_name(kb);
    let lines = [
        "Here's what you can ask about a champion:".to_string(),
        format!("- Item check: \"Is Infinity Edge good on {name}?\", \"Should I buy Zhonya's Hourglass on {name}?\""),
        format!("- One ability: \"{name} passive\", \"{name} q\", \"What is {name}'s ult?\""),
        format!("- All abilities: \"What are {name}'s abilities?\""),
        format!("- Items: \"{name} items\", or a build variant: \"{name} ap build\""),
        format!("- Runes: \"{name} runes\", \"{name} on-hit runes\""),
        format!("- Matchups: \"Who does {name} counter?\", \"{name} vs\""),
        format!("- Role: \"What lane is {name}?\""),
        format!("- Tips: \"Any tips for {name}?\""),
        format!("- Combo: \"{name} combo\""),
        format!("Just a name (\"{name}\") gives an overview. Say \"it\" to mean the last champion, e.g. \"what runes does it take?\""),
        "In chat: \"history\" lists recent questions, \"reset\" forgets the current champion, \"exit\" or \"quit\" ends the session.".to_string(),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rift_kb::EntityRecord;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new()
            .with("Ahri", EntityRecord::default())
            .unwrap()
            .with("Annie", EntityRecord::default())
            .unwrap()
    }

    #[test]
    fn greeting() {
        assert!(general_response("Hey there!", &kb()).starts_with("Hello!"));
    }

    #[test]
    fn help_listing() {
        let out = general_response("help", &kb());
        assert!(out.starts_with("Here's what you can ask"));
        assert!(out.contains("\"Ahri ap build\""));
        assert!(out.contains("Who does Ahri counter?"));
        assert!(out.ends_with(
            "In chat: \"history\" lists recent questions, \"reset\" forgets the current champion, \"exit\" or \"quit\" ends the session."
        ));
    }

    #[test]
    fn thanks() {
        assert!(general_response("thanks!", &kb()).starts_with("You're welcome"));
    }

    #[test]
    fn fallback_with_suggestion() {
        let out = general_response("tell me about annnnnnie", &kb());
        assert!(out.starts_with("I'm not sure which champion you mean."));
        assert!(out.ends_with("Did you mean: Annie?"));
    }

    #[test]
    fn fallback_without_suggestion() {
        let out = general_response("", &kb());
        assert_eq!(
            out,
            "I'm not sure which champion you mean. Try asking something like \"What is Ahri's ult?\""
        );
    }

    #[test]
    fn empty_kb_still_answers() {
        let out = general_response("what", &KnowledgeBase::new());
        assert!(out.contains("Ahri's ult"));
    }
}
