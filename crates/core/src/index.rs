//! The in-memory concept corpus.

use crate::error::{IndexError, IndexResult};
use setu_types::Concept;
use std::collections::HashMap;

/// Immutable, loaded concept corpus.
///
/// Built once from the loader's output and then shared read-only (typically
/// behind an `Arc`) between the matcher and the mapping engine. A "refresh"
/// of reference data is a new index, never a mutation of this one.
#[derive(Debug, Default)]
pub struct ConceptIndex {
    concepts: Vec<Concept>,
    by_key: HashMap<(String, String), usize>,
}

impl ConceptIndex {
    /// Build an index, enforcing that `(system, code)` is unique.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DuplicateConcept`] on the first duplicate key.
    /// Duplicates are a corpus defect and must surface at load time.
    pub fn build(concepts: Vec<Concept>) -> IndexResult<Self> {
        let mut by_key = HashMap::with_capacity(concepts.len());
        for (position, concept) in concepts.iter().enumerate() {
            let key = (concept.system.clone(), concept.code.clone());
            if by_key.insert(key, position).is_some() {
                return Err(IndexError::DuplicateConcept {
                    system: concept.system.clone(),
                    code: concept.code.clone(),
                });
            }
        }
        Ok(Self { concepts, by_key })
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Iterate concepts in corpus order (the order they were loaded in).
    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    /// Look up a concept by its `(system, code)` identity.
    pub fn get(&self, system: &str, code: &str) -> Option<&Concept> {
        let key = (system.to_string(), code.to_string());
        self.by_key.get(&key).map(|&position| &self.concepts[position])
    }

    /// Find the first concept with the given code, in corpus order,
    /// regardless of system.
    pub fn find_code(&self, code: &str) -> Option<&Concept> {
        self.concepts.iter().find(|concept| concept.code == code)
    }
}
