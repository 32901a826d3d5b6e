//! Multi-strategy concept search.
//!
//! The matcher walks the whole corpus for every query and scores each
//! concept through a fixed set of independent checks (display substring,
//! definition, synonyms, per-term fuzzy similarity, property values). Checks
//! only ever raise the score and upgrade the match type; a concept is
//! returned when its best score clears the inclusion threshold.

use crate::constants::{
    CONFIDENCE_TIE_WINDOW, DEFINITION_SCORE, FUZZY_MIN_SIMILARITY, FUZZY_WEIGHT,
    MIN_FUZZY_TERM_LEN, PROPERTY_SCORE, RESULT_CAP, SCORE_INCLUDE_THRESHOLD, SYNONYM_SCORE,
};
use crate::fuzzy;
use crate::index::ConceptIndex;
use setu_types::{Concept, MatchSpan, MatchType, ScoredResult, SystemFilter, SystemTag};
use std::cmp::Ordering;
use std::sync::Arc;

/// Scored, ranked search over a loaded concept corpus.
#[derive(Clone, Debug)]
pub struct Matcher {
    index: Arc<ConceptIndex>,
}

impl Matcher {
    pub fn new(index: Arc<ConceptIndex>) -> Self {
        Self { index }
    }

    /// Search the corpus, returning at most [`RESULT_CAP`] ranked results.
    ///
    /// An empty or whitespace-only query returns no results, as does an
    /// empty corpus. This never fails: "no results" is data, not an error.
    pub fn search(&self, query: &str, filter: &SystemFilter) -> Vec<ScoredResult> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() || self.index.is_empty() {
            return Vec::new();
        }

        let terms: Vec<&str> = normalized
            .split_whitespace()
            .filter(|term| term.chars().count() >= MIN_FUZZY_TERM_LEN)
            .collect();

        let mut results: Vec<ScoredResult> = self
            .index
            .iter()
            .filter(|concept| filter.admits(concept.system_tag()))
            .filter_map(|concept| score_concept(concept, &normalized, &terms))
            .collect();

        rank(&mut results);
        results.truncate(RESULT_CAP);

        tracing::debug!("search {:?} returned {} result(s)", normalized, results.len());
        results
    }
}

/// Score one concept against the normalized query and its terms.
///
/// Returns `None` when the best score does not clear the inclusion
/// threshold.
fn score_concept(concept: &Concept, query: &str, terms: &[&str]) -> Option<ScoredResult> {
    let display_lower = concept.display.to_lowercase();
    let mut best = 0.0f64;
    let mut match_type = MatchType::Semantic;
    let mut match_span = None;

    // Whole-query substring on the display label.
    if let Some(start) = display_lower.find(query) {
        best = best.max(1.0);
        match_type = match_type.max(MatchType::Exact);
        match_span = Some(MatchSpan {
            start,
            end: start + query.len(),
        });
    }

    // Whole-query substring on the definition.
    if let Some(definition) = &concept.definition {
        if definition.to_lowercase().contains(query) {
            best = best.max(DEFINITION_SCORE);
            match_type = match_type.max(MatchType::Fuzzy);
        }
    }

    // Whole-query substring on any synonym.
    for synonym in &concept.synonyms {
        if synonym.to_lowercase().contains(query) {
            best = best.max(SYNONYM_SCORE);
            match_type = match_type.max(MatchType::Synonym);
        }
    }

    // Term-level checks. Terms below MIN_FUZZY_TERM_LEN were dropped by the
    // caller and contribute nothing here.
    for term in terms {
        let similarity = fuzzy::similarity(term, &display_lower);
        if similarity > FUZZY_MIN_SIMILARITY {
            best = best.max(similarity * FUZZY_WEIGHT);
            match_type = match_type.max(MatchType::Fuzzy);
        }

        for property in &concept.properties {
            if let Some(value) = &property.value_string {
                if value.to_lowercase().contains(term) {
                    best = best.max(PROPERTY_SCORE);
                }
            }
        }
    }

    if best > SCORE_INCLUDE_THRESHOLD {
        Some(ScoredResult {
            concept: concept.clone(),
            confidence: best.min(1.0),
            match_type,
            match_span,
        })
    } else {
        None
    }
}

/// Pairwise ranking rule: exact matches strictly first; confidences further
/// apart than the tie window order by confidence; within the window NAMASTE
/// concepts are preferred; everything else is an equal pair.
fn compare(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    match (a.match_type == MatchType::Exact, b.match_type == MatchType::Exact) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    if (a.confidence - b.confidence).abs() > CONFIDENCE_TIE_WINDOW {
        // Descending by confidence. Scores are bounded arithmetic on
        // constants, never NaN.
        return b
            .confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal);
    }

    match (
        a.concept.system_tag() == SystemTag::Namaste,
        b.concept.system_tag() == SystemTag::Namaste,
    ) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Stable ranking pass.
///
/// The confidence tie window makes [`compare`] non-transitive, so it cannot
/// be handed to `slice::sort_by` (which requires a total order). A stable
/// insertion pass applies the pairwise rule deterministically and keeps
/// remaining ties in corpus order.
fn rank(results: &mut [ScoredResult]) {
    for i in 1..results.len() {
        let mut j = i;
        while j > 0 && compare(&results[j - 1], &results[j]) == Ordering::Greater {
            results.swap(j - 1, j);
            j -= 1;
        }
    }
}
