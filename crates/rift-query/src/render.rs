//! Response assembly: turn a champion record and an intent into text.
//!
//! Every renderer is total. Missing data produces a fallback sentence,
//! never an error.

use rift_kb::{AbilitySlot, BuildCollection, EntityRecord, Matchups};

use crate::intent::Intent;

/// Placeholder for an empty matchup side.
pub const EMPTY_SIDE: &str = "N/A";

/// Render the answer for `intent` about the champion `entity`.
pub fn render(entity: &str, intent: &Intent, record: &EntityRecord) -> String {
    match intent {
        Intent::ItemLegality { item } => render_legality(entity, item, &record.recommended_items),
        Intent::SingleAbility(slot) => render_ability(entity, *slot, record),
        Intent::Abilities => render_abilities(entity, record),
        Intent::Items { variant } => render_builds(
            entity,
            &record.recommended_items,
            variant.as_deref(),
            BuildKind::Items,
        ),
        Intent::Runes { variant } => render_builds(
            entity,
            &record.recommended_runes,
            variant.as_deref(),
            BuildKind::Runes,
        ),
        Intent::Matchups => render_matchups(entity, &record.matchups),
        Intent::Role => match record.role() {
            Some(role) => format!("{entity}'s role: {role}"),
            None => no_info("role", entity),
        },
        Intent::Tips => match record.tips() {
            Some(tips) => format!("Tips for {entity}: {tips}"),
            None => no_info("tips", entity),
        },
        Intent::Combo => match record.combo() {
            Some(combo) => format!("{entity}'s combo: {combo}"),
            None => no_info("combo", entity),
        },
        Intent::Overview => render_overview(entity, record),
    }
}

fn no_info(topic: &str, entity: &str) -> String {
    format!("No {topic} information available for {entity}.")
}

/// Collapse whitespace and strip quotes and trailing punctuation from an
/// item name taken from a question.
fn normalize_item(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| matches!(c, '"' | '`' | '?' | '!' | '.' | ','))
        .trim()
        .to_string()
}

fn render_legality(entity: &str, raw_item: &str, items: &BuildCollection) -> String {
    let item = normalize_item(raw_item);
    match items.find(&item) {
        Some(hit) => match hit.variant {
            Some(variant) => format!(
                "Yes! {} is part of {entity}'s recommended {variant} build.",
                hit.name
            ),
            None => format!("Yes! {} is one of {entity}'s recommended items.", hit.name),
        },
        None => {
            let mut out = format!("{item} isn't among {entity}'s recommended items.");
            let all = items.all();
            if !all.is_empty() {
                out.push_str(&format!(" Recommended items: {}.", all.join(", ")));
            }
            out
        }
    }
}

fn render_ability(entity: &str, slot: AbilitySlot, record: &EntityRecord) -> String {
    match record.abilities.get(slot) {
        Some(description) => format!("{entity}'s {slot} ability: {description}"),
        None => format!("No info available for {entity}'s {slot} ability."),
    }
}

fn render_abilities(entity: &str, record: &EntityRecord) -> String {
    if record.abilities.is_empty() {
        return format!("No detailed ability info available for {entity}.");
    }

    let mut out = format!("{entity}'s abilities:");
    for slot in AbilitySlot::ALL {
        let description = record.abilities.get(slot).unwrap_or("No info available");
        out.push_str(&format!("\n- {slot}: {description}"));
    }
    out
}

#[derive(Debug, Clone, Copy)]
enum BuildKind {
    Items,
    Runes,
}

impl BuildKind {
    fn singular(self) -> &'static str {
        match self {
            Self::Items => "item",
            Self::Runes => "rune",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Runes => "runes",
        }
    }
}

fn join_or_placeholder(list: &[String]) -> String {
    if list.is_empty() {
        EMPTY_SIDE.to_string()
    } else {
        list.join(", ")
    }
}

fn render_builds(
    entity: &str,
    collection: &BuildCollection,
    variant: Option<&str>,
    kind: BuildKind,
) -> String {
    if let Some(wanted) = variant {
        return match collection.variant(wanted) {
            Some((label, list)) if !list.is_empty() => {
                format!(
                    "{entity}'s {label} {} build: {}",
                    kind.singular(),
                    list.join(", ")
                )
            }
            _ => format!(
                "Sorry, I don't have {wanted} {} build info for {entity}.",
                kind.singular()
            ),
        };
    }

    if collection.is_empty() {
        return format!(
            "Sorry, I don't have {} recommendations for {entity}.",
            kind.singular()
        );
    }

    match collection {
        BuildCollection::Flat(list) => {
            format!("Recommended {} for {entity}: {}", kind.plural(), list.join(", "))
        }
        BuildCollection::Variants(map) => {
            let mut out = format!("Recommended {} for {entity}:", kind.plural());
            for (label, list) in map {
                out.push_str(&format!("\n- {label}: {}", join_or_placeholder(list)));
            }
            out
        }
    }
}

/// The strong and weak sides of a matchup, with [`EMPTY_SIDE`] for an
/// empty side.
pub fn matchup_lines(matchups: &Matchups) -> (String, String) {
    (
        join_or_placeholder(&matchups.strong_against),
        join_or_placeholder(&matchups.weak_against),
    )
}

fn render_matchups(entity: &str, matchups: &Matchups) -> String {
    if matchups.is_empty() {
        return format!("Sorry, I don't have matchup info for {entity}.");
    }
    let (strong, weak) = matchup_lines(matchups);
    format!("{entity} matchups:\n- Strong against: {strong}\n- Weak against: {weak}")
}

fn render_overview(entity: &str, record: &EntityRecord) -> String {
    let role = record.role().unwrap_or("No information available");
    let tips = record.tips().unwrap_or("No information available");
    format!(
        "{entity}\nRole: {role}\nTips: {tips}\n\n\
         Ask me about {entity}'s abilities, items, runes or matchups."
    )
}
