use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five ability slots every champion has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilitySlot {
    /// The innate passive.
    Passive,
    /// First basic ability.
    Q,
    /// Second basic ability.
    W,
    /// Third basic ability.
    E,
    /// Ultimate.
    R,
}

impl AbilitySlot {
    /// All slots in display order.
    pub const ALL: [AbilitySlot; 5] = [Self::Passive, Self::Q, Self::W, Self::E, Self::R];

    /// Human-readable slot label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passive => "Passive",
            Self::Q => "Q",
            Self::W => "W",
            Self::E => "E",
            Self::R => "R",
        }
    }
}

impl fmt::Display for AbilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ability descriptions keyed by slot. Any slot may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Abilities {
    /// Passive description.
    #[serde(default, alias = "Passive", skip_serializing_if = "Option::is_none")]
    pub passive: Option<String>,
    /// Q description.
    #[serde(default, rename = "Q", alias = "q", skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// W description.
    #[serde(default, rename = "W", alias = "w", skip_serializing_if = "Option::is_none")]
    pub w: Option<String>,
    /// E description.
    #[serde(default, rename = "E", alias = "e", skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    /// R description.
    #[serde(default, rename = "R", alias = "r", skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
}

impl Abilities {
    /// Description for a slot. Blank descriptions count as missing.
    pub fn get(&self, slot: AbilitySlot) -> Option<&str> {
        let value = match slot {
            AbilitySlot::Passive => &self.passive,
            AbilitySlot::Q => &self.q,
            AbilitySlot::W => &self.w,
            AbilitySlot::E => &self.e,
            AbilitySlot::R => &self.r,
        };
        non_blank(value.as_deref())
    }

    /// Set the description for a slot.
    pub fn set(&mut self, slot: AbilitySlot, description: impl Into<String>) {
        let value = Some(description.into());
        match slot {
            AbilitySlot::Passive => self.passive = value,
            AbilitySlot::Q => self.q = value,
            AbilitySlot::W => self.w = value,
            AbilitySlot::E => self.e = value,
            AbilitySlot::R => self.r = value,
        }
    }

    /// Whether no slot has a description.
    pub fn is_empty(&self) -> bool {
        AbilitySlot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }
}

/// Recommended items or runes, either as one flat list or grouped by
/// build variant (e.g. `"ap"`, `"on_hit"`, `"jungle"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildCollection {
    /// A single list with no variants.
    Flat(Vec<String>),
    /// Lists keyed by variant label, iterated in label order.
    Variants(BTreeMap<String, Vec<String>>),
}

impl Default for BuildCollection {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

/// Where a name was found inside a [`BuildCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMatch<'a> {
    /// The name as spelled in the knowledge base.
    pub name: &'a str,
    /// The variant that lists it, for variant-keyed collections.
    pub variant: Option<&'a str>,
}

impl BuildCollection {
    /// Whether the collection lists nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flat(list) => list.is_empty(),
            Self::Variants(map) => map.values().all(Vec::is_empty),
        }
    }

    /// Whether the collection is keyed by variant.
    pub fn is_variant_keyed(&self) -> bool {
        matches!(self, Self::Variants(_))
    }

    /// Variant labels in iteration order. Empty for flat collections.
    pub fn variant_labels(&self) -> Vec<&str> {
        match self {
            Self::Flat(_) => Vec::new(),
            Self::Variants(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Look up one variant's list.
    ///
    /// Labels compare case-insensitively, and `-`, `_` and spaces are
    /// interchangeable, so `"on-hit"` finds `"on_hit"`.
    pub fn variant(&self, label: &str) -> Option<(&str, &[String])> {
        let wanted = normalize_label(label);
        match self {
            Self::Flat(_) => None,
            Self::Variants(map) => map
                .iter()
                .find(|(key, _)| normalize_label(key) == wanted)
                .map(|(key, list)| (key.as_str(), list.as_slice())),
        }
    }

    /// Every listed name, across all variants, in iteration order.
    pub fn all(&self) -> Vec<&str> {
        match self {
            Self::Flat(list) => list.iter().map(String::as_str).collect(),
            Self::Variants(map) => map.values().flatten().map(String::as_str).collect(),
        }
    }

    /// Case-insensitive exact search across all variants.
    pub fn find(&self, name: &str) -> Option<BuildMatch<'_>> {
        let wanted = name.trim().to_lowercase();
        match self {
            Self::Flat(list) => list
                .iter()
                .find(|entry| entry.to_lowercase() == wanted)
                .map(|entry| BuildMatch {
                    name: entry,
                    variant: None,
                }),
            Self::Variants(map) => map.iter().find_map(|(label, list)| {
                list.iter()
                    .find(|entry| entry.to_lowercase() == wanted)
                    .map(|entry| BuildMatch {
                        name: entry,
                        variant: Some(label.as_str()),
                    })
            }),
        }
    }
}

/// Normalize a variant label for comparison.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// Champions this one is strong or weak against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matchups {
    /// Champions this one beats.
    #[serde(default)]
    pub strong_against: Vec<String>,
    /// Champions that beat this one.
    #[serde(default)]
    pub weak_against: Vec<String>,
}

impl Matchups {
    /// Whether both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.strong_against.is_empty() && self.weak_against.is_empty()
    }
}

/// Everything the knowledge base knows about one champion.
///
/// Every field may be absent in the source; absent fields deserialize to
/// their empty state and are rendered with fallback text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Usual lane or position.
    #[serde(default)]
    pub role: Option<String>,
    /// Free-text gameplay tips.
    #[serde(default)]
    pub tips: Option<String>,
    /// Preferred ability combo.
    #[serde(default)]
    pub combo: Option<String>,
    /// Ability descriptions.
    #[serde(default)]
    pub abilities: Abilities,
    /// Recommended items.
    #[serde(default)]
    pub recommended_items: BuildCollection,
    /// Recommended runes.
    #[serde(default)]
    pub recommended_runes: BuildCollection,
    /// Matchup information.
    #[serde(default)]
    pub matchups: Matchups,
}

impl EntityRecord {
    /// Role, if present and not blank.
    pub fn role(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    /// Tips, if present and not blank.
    pub fn tips(&self) -> Option<&str> {
        non_blank(self.tips.as_deref())
    }

    /// Combo, if present and not blank.
    pub fn combo(&self) -> Option<&str> {
        non_blank(self.combo.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
