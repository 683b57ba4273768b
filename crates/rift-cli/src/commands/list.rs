use comfy_table::{ContentArrangement, Table};
use rift_kb::{AbilitySlot, BuildCollection};
use rift_query::Assistant;

fn coverage(collection: &BuildCollection) -> String {
    if collection.is_empty() {
        "-".to_string()
    } else if collection.is_variant_keyed() {
        collection.variant_labels().join(", ")
    } else {
        collection.all().len().to_string()
    }
}

pub fn run(assistant: &Assistant) -> Result<(), String> {
    let kb = assistant.knowledge_base();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Role", "Abilities", "Items", "Runes", "Matchups"]);

    for (name, record) in kb.iter() {
        let abilities = AbilitySlot::ALL
            .iter()
            .filter(|slot| record.abilities.get(**slot).is_some())
            .count();
        let matchups = record.matchups.strong_against.len() + record.matchups.weak_against.len();

        table.add_row(vec![
            name.to_string(),
            record.role().unwrap_or("-").to_string(),
            format!("{abilities}/5"),
            coverage(&record.recommended_items),
            coverage(&record.recommended_runes),
            matchups.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} champions", kb.len());

    Ok(())
}
