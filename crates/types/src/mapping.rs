//! Cross-system mapping candidates.

use serde::Serialize;

/// Error raised when an equivalence label is not one of the known values.
#[derive(Debug, thiserror::Error)]
#[error("unknown equivalence label: {0}")]
pub struct EquivalenceParseError(pub String);

/// Semantic relationship of a mapping target to its source concept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Equivalence {
    Equivalent,
    Broader,
    Narrower,
    Related,
    Wider,
    Inexact,
}

impl Equivalence {
    pub fn as_str(self) -> &'static str {
        match self {
            Equivalence::Equivalent => "equivalent",
            Equivalence::Broader => "broader",
            Equivalence::Narrower => "narrower",
            Equivalence::Related => "related",
            Equivalence::Wider => "wider",
            Equivalence::Inexact => "inexact",
        }
    }
}

impl std::fmt::Display for Equivalence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Equivalence {
    type Err = EquivalenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equivalent" => Ok(Equivalence::Equivalent),
            "broader" => Ok(Equivalence::Broader),
            "narrower" => Ok(Equivalence::Narrower),
            "related" => Ok(Equivalence::Related),
            "wider" => Ok(Equivalence::Wider),
            "inexact" => Ok(Equivalence::Inexact),
            other => Err(EquivalenceParseError(other.to_string())),
        }
    }
}

/// Strategy tag identifying how a mapping candidate was produced.
///
/// The recognised variants are the labels the matcher itself emits; curated
/// data carries a richer ad hoc vocabulary (`lexical-semantic`,
/// `pattern-matching`, ...) which is preserved verbatim in
/// [`MappingMethod::Other`]. The tag carries provenance only — it never
/// changes scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappingMethod {
    Lexical,
    Synonym,
    Fuzzy,
    Semantic,
    Other(String),
}

impl MappingMethod {
    /// Parse a method label. Never fails: unrecognised labels are kept as
    /// [`MappingMethod::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "lexical" => MappingMethod::Lexical,
            "synonym" => MappingMethod::Synonym,
            "fuzzy" => MappingMethod::Fuzzy,
            "semantic" => MappingMethod::Semantic,
            other => MappingMethod::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MappingMethod::Lexical => "lexical",
            MappingMethod::Synonym => "synonym",
            MappingMethod::Fuzzy => "fuzzy",
            MappingMethod::Semantic => "semantic",
            MappingMethod::Other(label) => label,
        }
    }
}

impl std::fmt::Display for MappingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for MappingMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A proposed link from a source concept to a target concept in another
/// coding system.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingCandidate {
    pub target_code: String,
    pub target_system: String,
    pub target_display: String,
    /// Mapping confidence in `[0, 1]`.
    pub confidence: f64,
    pub equivalence: Equivalence,
    pub method: MappingMethod,
}
