//! Question answering over the Rift champion knowledge base.
//!
//! A question flows through four stages: the [resolver] finds the champion
//! it is about (exact name, fuzzy name, or "it" for the last champion
//! discussed), the [intent] classifier decides which fact is wanted, the
//! [render] stage writes the reply, and the [session] records the exchange.
//! Questions that name no champion get a [general] reply instead.
//!
//! Answering never fails: every input produces a non-empty reply.

/// The end-to-end pipeline.
pub mod assistant;
/// Query engine configuration.
pub mod config;
/// Error types for configuration loading.
pub mod error;
/// Replies for questions without a champion.
pub mod general;
/// Intent classification.
pub mod intent;
/// Response assembly.
pub mod render;
/// Champion name resolution.
pub mod resolver;
/// Per-conversation state.
pub mod session;

/// Re-export the pipeline entry points.
pub use assistant::{Answer, Assistant};
/// Re-export configuration types and the loader.
pub use config::{QueryConfig, VariantKeyword, load_config};
/// Re-export error types.
pub use error::{ConfigError, ConfigResult};
/// Re-export intent types.
pub use intent::{Intent, IntentClassifier};
/// Re-export session types.
pub use session::{Exchange, SessionContext};
