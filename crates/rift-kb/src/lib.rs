//! Champion knowledge base for Rift.
//!
//! Defines the per-champion record (abilities, builds, runes, matchups,
//! role, tips) and the [`KnowledgeBase`] that maps champion names to
//! records. A knowledge base is loaded once from JSON and never mutated
//! afterwards; the query engine only reads it.

/// The knowledge base container and its JSON loader.
pub mod base;
/// Error types for loading a knowledge base.
pub mod error;
/// Champion records and the value types they are built from.
pub mod record;

/// Re-export the knowledge base and loader.
pub use base::{KnowledgeBase, load_knowledge_base};
/// Re-export error types.
pub use error::{KbError, KbResult};
/// Re-export record types.
pub use record::{Abilities, AbilitySlot, BuildCollection, BuildMatch, EntityRecord, Matchups};
