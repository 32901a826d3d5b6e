//! Constants used throughout the setu core crate.
//!
//! Scoring weights, inclusion thresholds, and result caps live here so the
//! matcher, the mapping engine, and their tests agree on one set of values.

/// Maximum number of results a search returns.
pub const RESULT_CAP: usize = 8;

/// A concept is only included when its best score exceeds this.
pub const SCORE_INCLUDE_THRESHOLD: f64 = 0.5;

/// Confidence differences at or below this are treated as ties during
/// ranking, where NAMASTE concepts are preferred.
pub const CONFIDENCE_TIE_WINDOW: f64 = 0.05;

/// Query terms shorter than this are skipped during term-level scoring.
pub const MIN_FUZZY_TERM_LEN: usize = 2;

/// Minimum fuzzy similarity before a term contributes to the score.
pub const FUZZY_MIN_SIMILARITY: f64 = 0.6;

/// Weight applied to a term's fuzzy similarity.
pub const FUZZY_WEIGHT: f64 = 0.8;

/// Score for a definition substring hit.
pub const DEFINITION_SCORE: f64 = 0.85;

/// Score for a synonym substring hit.
pub const SYNONYM_SCORE: f64 = 0.9;

/// Score for a property value containing a query term.
pub const PROPERTY_SCORE: f64 = 0.7;

/// Maximum number of generated mapping suggestions per call.
pub const MAX_SUGGESTED_MAPPINGS: usize = 2;

/// Lower bound of a generated suggestion's confidence.
pub const SUGGESTION_CONFIDENCE_FLOOR: f64 = 0.65;

/// Width of the generated-suggestion confidence band: [0.65, 0.85).
pub const SUGGESTION_CONFIDENCE_SPAN: f64 = 0.2;

/// Method label carried by generated suggestions.
pub const SUGGESTION_METHOD: &str = "synonym-heuristic";

/// Target system URI assigned to generated suggestions.
pub const SUGGESTED_TARGET_SYSTEM: &str = "http://id.who.int/icd/release/11/2022-02/mms";
