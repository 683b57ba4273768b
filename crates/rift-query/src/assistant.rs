//! The question-answering pipeline.

use std::sync::Arc;

use rift_kb::KnowledgeBase;

use crate::config::QueryConfig;
use crate::general::general_response;
use crate::intent::{Intent, IntentClassifier};
use crate::render::render;
use crate::resolver::resolve;
use crate::session::SessionContext;

/// The result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// The champion the question resolved to.
    pub entity: Option<String>,
    /// The classified intent, when a champion was found.
    pub intent: Option<Intent>,
    /// The rendered reply. Never empty.
    pub text: String,
}

/// Answers champion questions against a shared knowledge base.
///
/// One `Assistant` can serve many conversations; each conversation keeps
/// its own [`SessionContext`].
#[derive(Debug, Clone)]
pub struct Assistant {
    kb: Arc<KnowledgeBase>,
    config: QueryConfig,
    classifier: IntentClassifier,
}

impl Assistant {
    /// Create an assistant over a loaded knowledge base.
    pub fn new(kb: Arc<KnowledgeBase>, config: QueryConfig) -> Self {
        let classifier = IntentClassifier::new(&config);
        Self {
            kb,
            config,
            classifier,
        }
    }

    /// The knowledge base being queried.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// The active configuration.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Answer a question without touching the session.
    pub fn answer(&self, text: &str, context: &SessionContext) -> Answer {
        let resolved = resolve(text, &self.kb, context, &self.config)
            .and_then(|key| self.kb.get(key).map(|record| (key, record)));

        let Some((entity, record)) = resolved else {
            tracing::debug!(input = text, "no champion resolved");
            return Answer {
                entity: None,
                intent: None,
                text: general_response(text, &self.kb),
            };
        };

        let intent = self.classifier.classify(text, record);
        tracing::debug!(input = text, entity, intent = %intent, "classified question");

        Answer {
            entity: Some(entity.to_string()),
            text: render(entity, &intent, record),
            intent: Some(intent),
        }
    }

    /// Answer a question and record the exchange in the session.
    pub fn respond(&self, text: &str, context: &mut SessionContext) -> String {
        let answer = self.answer(text, context);
        context.record(answer.entity.as_deref(), text, &answer.text);
        answer.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rift_kb::AbilitySlot;

    const CHAMPIONS: &str = r#"{
        "Ahri": {
            "role": "Mid",
            "tips": "Land charm before committing.",
            "abilities": {
                "passive": "Essence Theft",
                "Q": "Orb of Deception",
                "W": "Fox-Fire",
                "E": "Charm",
                "R": "Spirit Rush"
            },
            "recommended_items": {
                "ad": ["Infinity Edge", "The Collector"],
                "ap": ["Luden's Companion", "Rabadon's Deathcap"]
            },
            "recommended_runes": ["Electrocute", "Taste of Blood"],
            "matchups": {"strong_against": ["Lux"], "weak_against": ["Zed"]}
        },
        "Zed": {
            "role": "Mid",
            "recommended_items": ["Youmuu's Ghostblade"]
        },
        "Lux": {}
    }"#;

    fn assistant() -> Assistant {
        let kb = KnowledgeBase::from_json_str(CHAMPIONS).unwrap();
        Assistant::new(Arc::new(kb), QueryConfig::default())
    }

    #[test]
    fn ult_question() {
        let out = assistant().respond("What is Ahri's ult?", &mut SessionContext::new());
        assert!(out.contains("Ahri's R ability: Spirit Rush"));
    }

    #[test]
    fn legality_question() {
        let out = assistant().respond("is infinity edge good on ahri", &mut SessionContext::new());
        assert!(out.starts_with("Yes!"));
        assert!(out.contains("ad build"));
    }

    #[test]
    fn ability_keyword_beats_build() {
        let answer = assistant().answer("Ahri r build", &SessionContext::new());
        assert_eq!(answer.intent, Some(Intent::SingleAbility(AbilitySlot::R)));
    }

    #[test]
    fn follow_up_uses_pronoun() {
        let bot = assistant();
        let mut ctx = SessionContext::new();
        bot.respond("tell me about zed", &mut ctx);
        let out = bot.respond("what items does it build", &mut ctx);
        assert_eq!(out, "Recommended items for Zed: Youmuu's Ghostblade");
        assert_eq!(ctx.last_entity(), Some("Zed"));
        assert_eq!(ctx.history().len(), 2);
    }

    #[test]
    fn unresolved_question_keeps_focus() {
        let bot = assistant();
        let mut ctx = SessionContext::with_last_entity("Ahri");
        let out = bot.respond("hello", &mut ctx);
        assert!(out.starts_with("Hello!"));
        assert_eq!(ctx.last_entity(), Some("Ahri"));
        assert_eq!(ctx.history().len(), 1);
    }

    #[test]
    fn answer_does_not_record() {
        let bot = assistant();
        let ctx = SessionContext::new();
        let answer = bot.answer("ahri runes", &ctx);
        assert_eq!(answer.entity.as_deref(), Some("Ahri"));
        assert_eq!(answer.intent.as_ref().map(Intent::category), Some("runes"));
        assert!(ctx.history().is_empty());
    }

    #[test]
    fn typo_in_name() {
        let out = assistant().respond("ahrii matchups", &mut SessionContext::new());
        assert_eq!(out, "Ahri matchups:\n- Strong against: Lux\n- Weak against: Zed");
    }

    #[test]
    fn sparse_record_falls_back() {
        let bot = assistant();
        let mut ctx = SessionContext::new();
        assert_eq!(
            bot.respond("lux abilities", &mut ctx),
            "No detailed ability info available for Lux."
        );
        assert_eq!(
            bot.respond("lux matchups", &mut ctx),
            "Sorry, I don't have matchup info for Lux."
        );
    }

    #[test]
    fn every_input_gets_a_reply() {
        let bot = assistant();
        let mut ctx = SessionContext::new();
        for input in ["", "   ", "?!?", "it", "r", "is  good on", "ahri\u{0}", "ÄÖÜ ahri ß"] {
            let out = bot.respond(input, &mut ctx);
            assert!(!out.is_empty(), "empty reply for {input:?}");
        }
    }

    #[test]
    fn independent_sessions() {
        let bot = assistant();
        let mut first = SessionContext::new();
        let mut second = SessionContext::new();
        bot.respond("zed role", &mut first);
        let out = bot.respond("what lane is it", &mut second);
        assert!(out.starts_with("I'm not sure which champion"));
        assert_eq!(first.last_entity(), Some("Zed"));
        assert!(second.last_entity().is_none());
    }

    proptest! {
        #[test]
        fn any_input_gets_a_reply(input in "\\PC{0,40}", focus in proptest::option::of("Ahri|Zed|Lux")) {
            let bot = assistant();
            let mut ctx = match focus {
                Some(name) => SessionContext::with_last_entity(name),
                None => SessionContext::new(),
            };
            let out = bot.respond(&input, &mut ctx);
            prop_assert!(!out.is_empty());
            prop_assert_eq!(ctx.history().len(), 1);
        }
    }
}
