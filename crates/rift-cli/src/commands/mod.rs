pub mod ask;
pub mod chat;
pub mod check;
pub mod list;
pub mod show;

use std::path::Path;
use std::sync::Arc;

use rift_kb::load_knowledge_base;
use rift_query::{Assistant, QueryConfig, load_config};

/// Load the knowledge base and optional config, failing fast on either.
pub fn load_assistant(kb_path: &Path, config_path: Option<&Path>) -> Result<Assistant, String> {
    let kb = load_knowledge_base(kb_path).map_err(|e| e.to_string())?;
    let config = match config_path {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => QueryConfig::default(),
    };
    tracing::debug!(champions = kb.len(), path = %kb_path.display(), "knowledge base loaded");
    Ok(Assistant::new(Arc::new(kb), config))
}
