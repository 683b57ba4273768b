use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{KbError, KbResult};
use crate::record::EntityRecord;

/// Champion records keyed by name.
///
/// Names compare case-insensitively but keep their original spelling.
/// Iteration follows insertion order (file order when loaded from JSON).
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<(String, EntityRecord)>,

    // Index
    by_name_lower: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a knowledge base from a JSON object of `name -> record`.
    pub fn from_json_str(source: &str) -> KbResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        let Value::Object(map) = value else {
            return Err(KbError::NotAnObject);
        };

        let mut kb = Self::new();
        for (name, raw) in map {
            let record = serde_json::from_value(raw).map_err(|source| KbError::InvalidEntity {
                name: name.clone(),
                source,
            })?;
            kb.insert(name, record)?;
        }

        if kb.is_empty() {
            return Err(KbError::Empty);
        }
        Ok(kb)
    }

    /// Add a record. Fails if the name already exists in any casing.
    pub fn insert(&mut self, name: impl Into<String>, record: EntityRecord) -> KbResult<()> {
        let name = name.into();
        let name_lower = name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(KbError::DuplicateKey(name));
        }
        self.by_name_lower.insert(name_lower, self.entries.len());
        self.entries.push((name, record));
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert) for tests and fixtures.
    pub fn with(mut self, name: impl Into<String>, record: EntityRecord) -> KbResult<Self> {
        self.insert(name, record)?;
        Ok(self)
    }

    /// Look up a record by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&EntityRecord> {
        self.index_of(name).map(|i| &self.entries[i].1)
    }

    /// The stored spelling of a name, ignoring case on input.
    pub fn canonical_key(&self, name: &str) -> Option<&str> {
        self.index_of(name).map(|i| self.entries[i].0.as_str())
    }

    /// Whether a name is present, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of champions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no champions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }
}

/// Read and parse a knowledge base file.
pub fn load_knowledge_base(path: &Path) -> KbResult<KnowledgeBase> {
    let source = std::fs::read_to_string(path).map_err(|source| KbError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    KnowledgeBase::from_json_str(&source)
}
