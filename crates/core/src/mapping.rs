//! Cross-system mapping proposals.
//!
//! The engine concatenates curated table entries (authoritative, always
//! first) with a bounded number of generated synonym suggestions. It only
//! proposes; accept/reject decisions belong to the surrounding curation
//! workflow, which tracks each candidate as Proposed until a curator
//! resolves it to Accepted or Rejected.

use crate::constants::{
    MAX_SUGGESTED_MAPPINGS, SUGGESTED_TARGET_SYSTEM, SUGGESTION_CONFIDENCE_FLOOR,
    SUGGESTION_CONFIDENCE_SPAN, SUGGESTION_METHOD,
};
use crate::index::ConceptIndex;
use setu_types::{Concept, Equivalence, MappingCandidate, MappingMethod};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;

/// Curated mapping entries, keyed by source concept code.
///
/// Loaded once alongside the corpus and read-only afterwards. Entry order
/// within a key is preserved: it is the table's ranking.
#[derive(Debug, Default)]
pub struct MappingTable {
    entries: HashMap<String, Vec<MappingCandidate>>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, Vec<MappingCandidate>)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Curated candidates for a source code, in table order.
    pub fn get(&self, source_code: &str) -> Option<&[MappingCandidate]> {
        self.entries.get(source_code).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Proposes equivalence-typed mappings for a source concept.
#[derive(Debug)]
pub struct MappingEngine {
    index: Arc<ConceptIndex>,
    table: MappingTable,
}

impl MappingEngine {
    pub fn new(index: Arc<ConceptIndex>, table: MappingTable) -> Self {
        Self { index, table }
    }

    /// Propose mapping candidates for a source concept.
    ///
    /// Curated entries come first, in table order, followed by up to
    /// [`MAX_SUGGESTED_MAPPINGS`] generated synonym suggestions. A source
    /// with no curated entries and no synonyms yields an empty list —
    /// "no mapping available" is a valid terminal state, not an error.
    pub fn map_concept(&self, source: &Concept) -> Vec<MappingCandidate> {
        let mut candidates: Vec<MappingCandidate> = self
            .table
            .get(&source.code)
            .map(|curated| curated.to_vec())
            .unwrap_or_default();

        candidates.extend(suggest_from_synonyms(source));

        tracing::debug!(
            "mapping {} proposed {} candidate(s)",
            source.code,
            candidates.len()
        );
        candidates
    }

    /// Propose mappings for a source identified by code.
    ///
    /// With a system URI the lookup is exact; without one the first concept
    /// carrying the code (in corpus order) is used. An unknown code yields
    /// an empty list.
    pub fn map_code(&self, code: &str, system: Option<&str>) -> Vec<MappingCandidate> {
        let source = match system {
            Some(system) => self.index.get(system, code),
            None => self.index.find_code(code),
        };
        match source {
            Some(concept) => self.map_concept(concept),
            None => Vec::new(),
        }
    }
}

/// Generate low-confidence suggestions from the source's synonyms, one per
/// synonym up to the cap.
///
/// Placeholder codes and confidences are derived from a digest of the
/// source code, synonym position, and synonym text, so repeated calls
/// produce identical output. The codes are placeholders for the curation
/// queue; collision with a real code is possible in principle but
/// astronomically unlikely.
fn suggest_from_synonyms(source: &Concept) -> Vec<MappingCandidate> {
    source
        .synonyms
        .iter()
        .take(MAX_SUGGESTED_MAPPINGS)
        .enumerate()
        .map(|(position, synonym)| {
            let digest = suggestion_digest(&source.code, position, synonym);
            MappingCandidate {
                target_code: format!("GEN-{}", hex::encode_upper(&digest[..3])),
                target_system: SUGGESTED_TARGET_SYSTEM.to_string(),
                target_display: format!("{synonym} (suggested match)"),
                confidence: SUGGESTION_CONFIDENCE_FLOOR
                    + f64::from(digest[3]) / 256.0 * SUGGESTION_CONFIDENCE_SPAN,
                equivalence: Equivalence::Related,
                method: MappingMethod::from_label(SUGGESTION_METHOD),
            }
        })
        .collect()
}

fn suggestion_digest(source_code: &str, position: usize, synonym: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(source_code.as_bytes());
    hasher.update([0u8]);
    // Position keeps codes distinct even if a corpus repeats a synonym.
    hasher.update((position as u64).to_be_bytes());
    hasher.update(synonym.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMASTE: &str = "https://terminology.ayush.gov.in/namaste";
    const MMS: &str = "http://id.who.int/icd/release/11/2022-02/mms";
    const TM2: &str = "http://id.who.int/icd/release/11/2022-02/tm2";

    fn jwara() -> Concept {
        Concept {
            code: "NAM-0001".into(),
            system: NAMASTE.into(),
            display: "Jwara (Fever)".into(),
            definition: None,
            synonyms: vec!["Santapa".into(), "Taapa".into(), "Ushmata".into()],
            category: None,
            properties: vec![],
        }
    }

    fn curated_for_jwara() -> Vec<MappingCandidate> {
        vec![
            MappingCandidate {
                target_code: "MG22".into(),
                target_system: MMS.into(),
                target_display: "Fever, unspecified".into(),
                confidence: 0.94,
                equivalence: Equivalence::Equivalent,
                method: MappingMethod::from_label("lexical-semantic"),
            },
            MappingCandidate {
                target_code: "TM2:A01.1".into(),
                target_system: TM2.into(),
                target_display: "Heat pattern fever".into(),
                confidence: 0.89,
                equivalence: Equivalence::Related,
                method: MappingMethod::from_label("semantic-traditional"),
            },
        ]
    }

    fn engine(concepts: Vec<Concept>, table: MappingTable) -> MappingEngine {
        let index = ConceptIndex::build(concepts).expect("test corpus builds");
        MappingEngine::new(Arc::new(index), table)
    }

    #[test]
    fn curated_entries_come_first_in_table_order() {
        let table =
            MappingTable::from_entries([("NAM-0001".to_string(), curated_for_jwara())]);
        let engine = engine(vec![jwara()], table);

        let candidates = engine.map_concept(&jwara());
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0].target_code, "MG22");
        assert_eq!(candidates[1].target_code, "TM2:A01.1");
        // generated suggestions follow, one per synonym up to the cap
        assert!(candidates[2].target_code.starts_with("GEN-"));
        assert!(candidates[3].target_code.starts_with("GEN-"));
        assert_eq!(candidates[2].method.as_str(), "synonym-heuristic");
    }

    #[test]
    fn suggestions_are_capped_and_bounded() {
        let engine = engine(vec![jwara()], MappingTable::new());
        let candidates = engine.map_concept(&jwara());
        // three synonyms, but only two suggestions
        assert_eq!(candidates.len(), MAX_SUGGESTED_MAPPINGS);
        for candidate in &candidates {
            assert!(candidate.confidence >= SUGGESTION_CONFIDENCE_FLOOR);
            assert!(candidate.confidence < 0.85);
            assert_eq!(candidate.equivalence, Equivalence::Related);
            assert_eq!(candidate.target_system, SUGGESTED_TARGET_SYSTEM);
        }
        assert_ne!(candidates[0].target_code, candidates[1].target_code);
    }

    #[test]
    fn suggestions_are_deterministic() {
        let engine = engine(vec![jwara()], MappingTable::new());
        let first = engine.map_concept(&jwara());
        let second = engine.map_concept(&jwara());
        assert_eq!(first, second);
    }

    #[test]
    fn no_curated_entries_and_no_synonyms_yields_empty() {
        let bare = Concept {
            code: "NAM-9999".into(),
            system: NAMASTE.into(),
            display: "Aparichita".into(),
            definition: None,
            synonyms: vec![],
            category: None,
            properties: vec![],
        };
        let engine = engine(vec![bare.clone()], MappingTable::new());
        assert!(engine.map_concept(&bare).is_empty());
    }

    #[test]
    fn unknown_code_yields_empty() {
        let engine = engine(vec![jwara()], MappingTable::new());
        assert!(engine.map_code("NAM-0404", None).is_empty());
        assert!(engine.map_code("NAM-0001", Some(MMS)).is_empty());
    }

    #[test]
    fn map_code_resolves_through_the_index() {
        let table =
            MappingTable::from_entries([("NAM-0001".to_string(), curated_for_jwara())]);
        let engine = engine(vec![jwara()], table);

        let by_code = engine.map_code("NAM-0001", None);
        let by_identity = engine.map_code("NAM-0001", Some(NAMASTE));
        assert_eq!(by_code, by_identity);
        assert_eq!(by_code[0].target_code, "MG22");
    }
}
