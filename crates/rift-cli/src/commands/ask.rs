use colored::Colorize;
use rift_query::{Assistant, SessionContext};

pub fn run(assistant: &Assistant, question: &str, explain: bool) -> Result<(), String> {
    let answer = assistant.answer(question, &SessionContext::new());

    if explain {
        let entity = answer.entity.as_deref().unwrap_or("(none)");
        let intent = answer
            .intent
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "general".to_string());
        println!("  {} {}", "champion:".dimmed(), entity);
        println!("  {} {}", "category:".dimmed(), intent);
        println!();
    }

    println!("{}", answer.text);
    Ok(())
}
