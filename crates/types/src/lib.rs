//! Shared vocabulary for the setu terminology service.
//!
//! This crate defines the domain-level records exchanged between the
//! matching core, the corpus loader, and any surrounding service layer:
//! concepts, scored search results, and cross-system mapping candidates.
//!
//! Types here are plain data with serialisation for the outbound
//! (response) direction only. Inbound parsing and validation of corpus
//! documents is owned by the `setu-corpus` boundary crate.

pub mod concept;
pub mod mapping;
pub mod system;

pub use concept::{Concept, ConceptProperty, MatchSpan, MatchType, ScoredResult};
pub use mapping::{Equivalence, EquivalenceParseError, MappingCandidate, MappingMethod};
pub use system::{SystemFilter, SystemTag};
