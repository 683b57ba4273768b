use colored::Colorize;
use rift_query::render::render;
use rift_query::resolver::resolve;
use rift_query::{Assistant, Intent, SessionContext};

pub fn run(assistant: &Assistant, name: &str) -> Result<(), String> {
    let kb = assistant.knowledge_base();

    let entity = resolve(name, kb, &SessionContext::new(), assistant.config())
        .ok_or_else(|| format!("champion not found: \"{name}\""))?;
    let record = kb
        .get(entity)
        .ok_or_else(|| format!("champion not found: \"{name}\""))?;

    println!("  {}", entity.bold());
    println!();

    let sections = [
        Intent::Role,
        Intent::Abilities,
        Intent::Items { variant: None },
        Intent::Runes { variant: None },
        Intent::Matchups,
        Intent::Combo,
        Intent::Tips,
    ];
    for intent in &sections {
        println!("  {}", intent.category().dimmed());
        for line in render(entity, intent, record).lines() {
            println!("  {line}");
        }
        println!();
    }

    Ok(())
}
