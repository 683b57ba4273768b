use std::path::Path;

use colored::Colorize;
use rift_query::Assistant;

pub fn run(assistant: &Assistant, kb_path: &Path) -> Result<(), String> {
    let kb = assistant.knowledge_base();

    let mut gaps: Vec<String> = Vec::new();
    for (name, record) in kb.iter() {
        let mut missing = Vec::new();
        if record.role().is_none() {
            missing.push("role");
        }
        if record.abilities.is_empty() {
            missing.push("abilities");
        }
        if record.recommended_items.is_empty() {
            missing.push("items");
        }
        if record.recommended_runes.is_empty() {
            missing.push("runes");
        }
        if record.matchups.is_empty() {
            missing.push("matchups");
        }
        if !missing.is_empty() {
            gaps.push(format!("{name}: no {}", missing.join(", ")));
        }
    }

    for gap in &gaps {
        println!("  {} {gap}", "warning:".yellow());
    }

    println!(
        "  {} {} champions in {} ({} with gaps)",
        "OK".green().bold(),
        kb.len(),
        kb_path.display(),
        gaps.len()
    );
    Ok(())
}
