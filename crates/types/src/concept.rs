//! Concept records and scored search results.

use crate::system::SystemTag;
use serde::Serialize;

/// A key/value annotation on a concept (dosha involvement, severity,
/// native-script term, and so on).
///
/// Only `value_string` participates in matching; the other value slots are
/// carried for fidelity with the corpus format.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptProperty {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,
}

/// A single coding-system entry.
///
/// `(system, code)` uniquely identifies a concept within a loaded corpus;
/// the index enforces this at build time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Code, unique within its system.
    pub code: String,
    /// Coding-system URI.
    pub system: String,
    /// Preferred human-readable label.
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Alternate labels. Order is display-only and does not affect matching.
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<ConceptProperty>,
}

impl Concept {
    /// The coding-system tag this concept's URI classifies into.
    pub fn system_tag(&self) -> SystemTag {
        SystemTag::classify(&self.system)
    }
}

/// The best (highest-priority) reason a concept matched a query.
///
/// Variants are ordered by priority: `Exact > Synonym > Fuzzy > Semantic`.
/// The derived ordering reflects that, so `max` picks the better label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Residual cross-field relevance (definition/property hits alone).
    Semantic,
    /// Edit-distance similarity to the display label.
    Fuzzy,
    /// Substring hit on an alternate label.
    Synonym,
    /// Substring hit on the display label itself.
    Exact,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Synonym => "synonym",
            MatchType::Fuzzy => "fuzzy",
            MatchType::Semantic => "semantic",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte range of the matched query within the lowercased display label.
///
/// Presentation-only: a renderer can mark this span. Offsets are into
/// `display.to_lowercase()`, which coincides with the display itself for
/// ASCII labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// A concept scored against a query.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    #[serde(flatten)]
    pub concept: Concept,
    /// Match score in `[0, 1]`.
    pub confidence: f64,
    pub match_type: MatchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_span: Option<MatchSpan>,
}
