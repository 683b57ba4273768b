//! Intent classification: which fact about a champion a question wants.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use rift_kb::{AbilitySlot, BuildCollection, EntityRecord};

use crate::config::{QueryConfig, VariantKeyword};
use crate::resolver::tokenize;

/// What a question asks about a champion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// "Is X good on Y?" / "Should I buy X on Y?"
    ItemLegality {
        /// The item named in the question, trimmed.
        item: String,
    },
    /// One ability.
    SingleAbility(AbilitySlot),
    /// All five abilities.
    Abilities,
    /// Recommended items, optionally for one build variant.
    Items {
        /// Build variant label, if the question named one.
        variant: Option<String>,
    },
    /// Recommended runes, optionally for one build variant.
    Runes {
        /// Build variant label, if the question named one.
        variant: Option<String>,
    },
    /// Strong and weak matchups.
    Matchups,
    /// Role or lane.
    Role,
    /// Gameplay tips.
    Tips,
    /// Ability combo.
    Combo,
    /// Nothing specific; summarize.
    Overview,
}

impl Intent {
    /// Category name, as used in logs and `--explain` output.
    pub fn category(&self) -> &'static str {
        match self {
            Self::ItemLegality { .. } => "item-legality",
            Self::SingleAbility(_) => "single-ability",
            Self::Abilities => "abilities",
            Self::Items { .. } => "items",
            Self::Runes { .. } => "runes",
            Self::Matchups => "matchups",
            Self::Role => "role",
            Self::Tips => "tips",
            Self::Combo => "combo",
            Self::Overview => "overview",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemLegality { item } => write!(f, "item-legality ({item})"),
            Self::SingleAbility(slot) => write!(f, "single-ability ({slot})"),
            Self::Items { variant: Some(v) } | Self::Runes { variant: Some(v) } => {
                write!(f, "{} ({v})", self.category())
            }
            _ => f.write_str(self.category()),
        }
    }
}

static LEGALITY_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\bis\s+(.+?)\s+good\s+on\b").unwrap(),
        Regex::new(r"(?i)\bshould\s+i\s+buy\s+(.+?)\s+on\b").unwrap(),
    ]
});

/// Ability words in precedence order. The earliest entry present wins.
const ABILITY_KEYWORDS: &[(&str, AbilitySlot)] = &[
    ("passive", AbilitySlot::Passive),
    ("q", AbilitySlot::Q),
    ("w", AbilitySlot::W),
    ("e", AbilitySlot::E),
    ("r", AbilitySlot::R),
    ("ult", AbilitySlot::R),
    ("ultimate", AbilitySlot::R),
];

static ABILITIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(abilit(y|ies)|skills?|spells?)\b").unwrap());
static ITEMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(items?|builds?|buy|purchase)\b").unwrap());
static RUNES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(runes?|keystones?)\b").unwrap());
static MATCHUPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(matchups?|versus|vs|counters?|against)\b").unwrap());
static ROLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(role|position|lane)\b").unwrap());
static TIPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(tips?|advice|help|guide)\b").unwrap());
static COMBO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(combos?|rotation|sequence)\b").unwrap());

/// Build a whole-word matcher for a keyword in which `-`, `_` and spaces
/// are interchangeable (and optional).
fn keyword_regex(keyword: &str) -> Option<Regex> {
    let parts: Vec<String> = keyword
        .split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(regex::escape)
        .collect();
    if parts.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", parts.join(r"[-_\s]?"))).ok()
}

/// Classifies questions using ordered pattern rules.
///
/// Rules are checked top to bottom and the first match wins:
/// item legality, single ability, all abilities, items, runes, matchups,
/// role, tips, combo. Anything else is an overview.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    variants: Vec<(Regex, String)>,
}

impl IntentClassifier {
    /// Compile the variant keyword table from a config.
    pub fn new(config: &QueryConfig) -> Self {
        Self::with_keywords(&config.variant_keywords)
    }

    /// Compile a variant keyword table.
    pub fn with_keywords(keywords: &[VariantKeyword]) -> Self {
        let variants = keywords
            .iter()
            .filter_map(|entry| {
                let re = keyword_regex(&entry.keyword);
                if re.is_none() {
                    tracing::warn!(keyword = %entry.keyword, "ignoring unusable variant keyword");
                }
                re.map(|re| (re, entry.label.clone()))
            })
            .collect();
        Self { variants }
    }

    /// Classify a question about the champion described by `record`.
    pub fn classify(&self, text: &str, record: &EntityRecord) -> Intent {
        if let Some(item) = legality_item(text) {
            return Intent::ItemLegality { item };
        }

        if let Some(slot) = ability_slot(text) {
            return Intent::SingleAbility(slot);
        }

        if ABILITIES_RE.is_match(text) {
            return Intent::Abilities;
        }

        if ITEMS_RE.is_match(text) {
            return Intent::Items {
                variant: self.variant(text, &record.recommended_items),
            };
        }

        if RUNES_RE.is_match(text) {
            return Intent::Runes {
                variant: self.variant(text, &record.recommended_runes),
            };
        }

        if MATCHUPS_RE.is_match(text) {
            Intent::Matchups
        } else if ROLE_RE.is_match(text) {
            Intent::Role
        } else if TIPS_RE.is_match(text) {
            Intent::Tips
        } else if COMBO_RE.is_match(text) {
            Intent::Combo
        } else {
            Intent::Overview
        }
    }

    /// Build variant named in the text.
    ///
    /// The keyword table is checked first, in order; then the variant
    /// labels the champion's own collection uses.
    fn variant(&self, text: &str, collection: &BuildCollection) -> Option<String> {
        if let Some((_, label)) = self.variants.iter().find(|(re, _)| re.is_match(text)) {
            return Some(label.clone());
        }

        collection
            .variant_labels()
            .into_iter()
            .find(|label| keyword_regex(label).is_some_and(|re| re.is_match(text)))
            .map(str::to_string)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(&QueryConfig::default())
    }
}

/// The item named by an "is X good on" / "should I buy X on" question.
fn legality_item(text: &str) -> Option<String> {
    LEGALITY_RES.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|item| !item.is_empty())
    })
}

/// The ability slot a question names as a whole word, if any.
fn ability_slot(text: &str) -> Option<AbilitySlot> {
    let tokens = tokenize(text);
    ABILITY_KEYWORDS
        .iter()
        .find(|(keyword, _)| tokens.iter().any(|t| t == keyword))
        .map(|(_, slot)| *slot)
}
