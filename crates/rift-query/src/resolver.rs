//! Champion name resolution with exact, fuzzy and pronoun matching.

use std::sync::LazyLock;

use regex::Regex;
use rift_kb::KnowledgeBase;
use strsim::normalized_levenshtein;

use crate::config::QueryConfig;
use crate::session::SessionContext;

/// Word-character tokens; punctuation never sticks to a name.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Slack for float rounding when comparing a score with the threshold.
const SCORE_EPSILON: f64 = 1e-9;

/// Minimum score for a name to be offered as a suggestion.
const SUGGEST_THRESHOLD: f64 = 0.5;

/// Split text into lower-cased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Similarity of two strings on a 0.0-1.0 scale (normalized edit distance).
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Whether a similarity score is good enough for the threshold.
pub fn clears_threshold(score: f64, threshold: f64) -> bool {
    score + SCORE_EPSILON >= threshold
}

/// Find the champion a question is about.
///
/// 1. A champion name spelled out in full always wins; among several,
///    the first in knowledge-base order.
/// 2. Otherwise each token, in order, is fuzzy-matched against every name;
///    the first token with a match above the threshold decides.
/// 3. Otherwise, if the question uses a pronoun such as "it", the last
///    champion discussed in this session.
///
/// Returns the name as spelled in the knowledge base.
pub fn resolve<'a>(
    text: &str,
    kb: &'a KnowledgeBase,
    context: &SessionContext,
    config: &QueryConfig,
) -> Option<&'a str> {
    let tokens = tokenize(text);

    if let Some(key) = exact_match(&tokens, kb) {
        return Some(key);
    }

    if let Some(key) = tokens
        .iter()
        .find_map(|token| fuzzy_match(token, kb, config.fuzzy_threshold))
    {
        return Some(key);
    }

    let has_pronoun = tokens
        .iter()
        .any(|token| config.pronouns.iter().any(|p| p.eq_ignore_ascii_case(token)));
    if has_pronoun {
        return context.last_entity().and_then(|last| kb.canonical_key(last));
    }

    None
}

/// First name, in knowledge-base order, whose tokens appear contiguously
/// in the input tokens.
fn exact_match<'a>(tokens: &[String], kb: &'a KnowledgeBase) -> Option<&'a str> {
    kb.keys().find(|key| {
        let key_tokens = tokenize(key);
        !key_tokens.is_empty()
            && tokens
                .windows(key_tokens.len())
                .any(|window| window == key_tokens.as_slice())
    })
}

/// Best-scoring name for one token, if it clears the threshold.
///
/// Ties go to the name that comes first in the knowledge base.
pub fn fuzzy_match<'a>(token: &str, kb: &'a KnowledgeBase, threshold: f64) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for key in kb.keys() {
        let score = similarity(token, &key.to_lowercase());
        if !clears_threshold(score, threshold) {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((key, score));
        }
    }
    best.map(|(key, _)| key)
}

/// Names that loosely resemble any word of the input, best first.
///
/// Used to offer "did you mean" hints when nothing resolved.
pub fn suggest<'a>(text: &str, kb: &'a KnowledgeBase, limit: usize) -> Vec<&'a str> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() >= 3)
        .collect();

    let mut scored: Vec<(&str, f64)> = kb
        .keys()
        .filter_map(|key| {
            let key_lower = key.to_lowercase();
            tokens
                .iter()
                .map(|token| {
                    if key_lower.starts_with(token.as_str()) {
                        1.0
                    } else {
                        similarity(token, &key_lower)
                    }
                })
                .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
                .filter(|score| *score >= SUGGEST_THRESHOLD)
                .map(|score| (key, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(limit).map(|(key, _)| key).collect()
}
