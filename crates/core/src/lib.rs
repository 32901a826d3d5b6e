//! # Setu Core
//!
//! Core matching logic for the setu terminology service: harmonising
//! NAMASTE traditional-medicine codes with ICD-11 (MMS and the Traditional
//! Medicine Module).
//!
//! This crate contains pure, deterministic operations over an immutable
//! concept corpus:
//! - Multi-strategy scored search (exact, synonym, substring, fuzzy,
//!   cross-field) with ranked, capped results
//! - Cross-system mapping proposals from a curated table plus bounded
//!   generated suggestions
//!
//! **No I/O concerns**: corpus loading and validation live in
//! `setu-corpus`; transports and user interfaces belong to the surrounding
//! service layer. Everything here is callable concurrently without locks —
//! the corpus is read-only after [`ConceptIndex::build`].

pub mod constants;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod mapping;
pub mod search;

pub use error::{IndexError, IndexResult};
pub use index::ConceptIndex;
pub use mapping::{MappingEngine, MappingTable};
pub use search::Matcher;

use setu_types::{MappingCandidate, ScoredResult, SystemFilter};
use std::sync::Arc;

/// Terminology operations over one loaded corpus - no transport concerns.
///
/// Thin facade wiring a [`Matcher`] and a [`MappingEngine`] to the same
/// shared index, exposing the two operations callers need.
#[derive(Debug)]
pub struct TerminologyService {
    matcher: Matcher,
    engine: MappingEngine,
}

impl TerminologyService {
    /// Create a service over a built index and curated mapping table.
    pub fn new(index: Arc<ConceptIndex>, table: MappingTable) -> Self {
        Self {
            matcher: Matcher::new(Arc::clone(&index)),
            engine: MappingEngine::new(index, table),
        }
    }

    /// Scored search across the corpus. See [`Matcher::search`].
    pub fn search(&self, query: &str, filter: &SystemFilter) -> Vec<ScoredResult> {
        self.matcher.search(query, filter)
    }

    /// Mapping proposals for a source code. See [`MappingEngine::map_code`].
    pub fn map(&self, code: &str, system: Option<&str>) -> Vec<MappingCandidate> {
        self.engine.map_code(code, system)
    }
}
