//! Strict JSON wire models for corpus documents.
//!
//! These are the exact structures serialised in `data/*.json`. All structs
//! use `#[serde(deny_unknown_fields)]` for strict validation, and parsing
//! goes through `serde_path_to_error` so a schema mismatch names the
//! failing field path.

use crate::{CorpusError, CorpusResult};
use serde::Deserialize;
use setu_types::{Concept, ConceptProperty, Equivalence, MappingCandidate, MappingMethod};
use std::collections::BTreeMap;

/// Wire representation of a concept record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConceptWire {
    code: String,
    system: String,
    display: String,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    properties: Vec<PropertyWire>,
}

/// Wire representation of a concept property.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyWire {
    code: String,
    #[serde(rename = "valueString", default)]
    value_string: Option<String>,
    #[serde(rename = "valueCode", default)]
    value_code: Option<String>,
    #[serde(rename = "valueBoolean", default)]
    value_boolean: Option<bool>,
}

/// Wire representation of a curated mapping candidate.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingCandidateWire {
    #[serde(rename = "targetCode")]
    target_code: String,
    #[serde(rename = "targetSystem")]
    target_system: String,
    #[serde(rename = "targetDisplay")]
    target_display: String,
    confidence: f64,
    equivalence: String,
    method: String,
}

/// Parse a concept corpus document: a JSON array of concept records.
pub fn parse_concepts(json_text: &str) -> CorpusResult<Vec<Concept>> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);
    let wires: Vec<ConceptWire> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(schema_error)?;
    Ok(wires.into_iter().map(wire_to_concept).collect())
}

/// Parse a curated mapping table document: a JSON object keyed by source
/// concept code, each value an array of candidate records in table order.
///
/// Unknown equivalence labels and confidences outside `[0, 1]` are
/// load-time errors; `method` accepts any label (unrecognised ones are
/// preserved as provenance).
pub fn parse_mapping_table(
    json_text: &str,
) -> CorpusResult<Vec<(String, Vec<MappingCandidate>)>> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);
    let wires: BTreeMap<String, Vec<MappingCandidateWire>> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(schema_error)?;

    let mut entries = Vec::with_capacity(wires.len());
    for (source_code, candidates) in wires {
        let candidates = candidates
            .into_iter()
            .map(|wire| wire_to_candidate(&source_code, wire))
            .collect::<CorpusResult<Vec<_>>>()?;
        entries.push((source_code, candidates));
    }
    Ok(entries)
}

fn schema_error(err: serde_path_to_error::Error<serde_json::Error>) -> CorpusError {
    let path = err.path().to_string();
    let path = if path.is_empty() { "<root>".to_string() } else { path };
    CorpusError::Schema {
        path,
        source: err.into_inner(),
    }
}

fn wire_to_concept(wire: ConceptWire) -> Concept {
    Concept {
        code: wire.code,
        system: wire.system,
        display: wire.display,
        definition: wire.definition,
        synonyms: wire.synonyms,
        category: wire.category,
        properties: wire
            .properties
            .into_iter()
            .map(|p| ConceptProperty {
                code: p.code,
                value_string: p.value_string,
                value_code: p.value_code,
                value_boolean: p.value_boolean,
            })
            .collect(),
    }
}

fn wire_to_candidate(
    source_code: &str,
    wire: MappingCandidateWire,
) -> CorpusResult<MappingCandidate> {
    let equivalence: Equivalence =
        wire.equivalence
            .parse()
            .map_err(|source| CorpusError::InvalidEquivalence {
                source_code: source_code.to_string(),
                source,
            })?;

    if !(0.0..=1.0).contains(&wire.confidence) {
        return Err(CorpusError::ConfidenceOutOfRange {
            code: wire.target_code,
            value: wire.confidence,
        });
    }

    Ok(MappingCandidate {
        target_code: wire.target_code,
        target_system: wire.target_system,
        target_display: wire.target_display,
        confidence: wire.confidence,
        equivalence,
        method: MappingMethod::from_label(&wire.method),
    })
}
