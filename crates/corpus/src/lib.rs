//! Corpus loading boundary for the setu terminology service.
//!
//! This crate owns the **wire models** and **translation helpers** for the
//! static reference documents the core consumes:
//! - the concept corpus (JSON array of concept records)
//! - the curated mapping table (JSON object keyed by source code)
//!
//! It is the "external loader" collaborator: everything is validated
//! strictly here, before the core is ever invoked, so a corpus defect
//! fails fast and loudly at load time and never surfaces mid-search.
//! The core itself performs no I/O.

pub mod wire;

pub use wire::{parse_concepts, parse_mapping_table};

use setu_types::{Concept, EquivalenceParseError, MappingCandidate};
use std::path::Path;

/// Errors returned by the corpus boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus schema mismatch at {path}: {source}")]
    Schema {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("mapping entry for {source_code}: {source}")]
    InvalidEquivalence {
        source_code: String,
        #[source]
        source: EquivalenceParseError,
    },

    #[error("confidence out of range for {code}: {value}")]
    ConfidenceOutOfRange { code: String, value: f64 },
}

/// Type alias for Results that can fail with a [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Load and validate a concept corpus from a JSON file.
pub fn load_concepts(path: impl AsRef<Path>) -> CorpusResult<Vec<Concept>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let concepts = parse_concepts(&text)?;
    tracing::debug!("loaded {} concept(s) from {}", concepts.len(), path.display());
    Ok(concepts)
}

/// Load and validate a curated mapping table from a JSON file.
///
/// Entries are returned as `(source code, candidates)` pairs in a
/// deterministic (sorted-by-code) order; candidate order within a code is
/// the table's ranking and is preserved.
pub fn load_mapping_table(
    path: impl AsRef<Path>,
) -> CorpusResult<Vec<(String, Vec<MappingCandidate>)>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let entries = parse_mapping_table(&text)?;
    tracing::debug!(
        "loaded mapping entries for {} source code(s) from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}
