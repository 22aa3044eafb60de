//! Type inference from an arbitrary four-function stack.
//!
//! Exact matches against the canonical table win outright. Otherwise
//! every canonical stack is scored by positional agreement, weighted
//! dominant 4, auxiliary 3, tertiary 2, inferior 1, and the best one is
//! reported with a confidence of `score / 10 * 100`.
//!
//! Ties: a candidate sharing the input's dominant beats one that does
//! not; remaining ties go to the first type in `TypeCode::ALL` order
//! (lexicographic).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cognition::canonical_table;
use crate::model::{CognitiveStack, StackPosition, TypeCode};
use crate::Result;

/// Highest possible weighted score (4 + 3 + 2 + 1).
pub const MAX_SCORE: u8 = 10;

/// Outcome of matching a stack against the canonical table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inference {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub exact_match: bool,
    /// Percentage in [0, 100], one decimal place.
    pub confidence: f64,
    pub closest_stack: CognitiveStack,
    /// 1-based positions where the input differs from `closest_stack`.
    pub differences: SmallVec<[u8; 4]>,
}

/// Weighted positional agreement between two stacks.
pub fn weighted_score(stack: &CognitiveStack, candidate: &CognitiveStack) -> u8 {
    StackPosition::ALL
        .into_iter()
        .filter(|pos| stack.get(*pos) == candidate.get(*pos))
        .map(StackPosition::weight)
        .sum()
}

/// Find the best-matching type for `stack`. Always returns a candidate.
pub fn infer_type(stack: &CognitiveStack) -> Inference {
    let table = canonical_table();

    if let Some((code, canonical)) = table.iter().find(|(_, canonical)| canonical == stack) {
        debug!(%stack, type_code = %code, "exact stack match");
        return Inference {
            type_code: *code,
            exact_match: true,
            confidence: 100.0,
            closest_stack: *canonical,
            differences: SmallVec::new(),
        };
    }

    // (score, dominant matches) ordered lexicographically; strict `>` keeps
    // the earliest candidate among full ties.
    let mut best = (&table[0], rank(stack, &table[0].1));
    for entry in &table[1..] {
        let candidate_rank = rank(stack, &entry.1);
        if candidate_rank > best.1 {
            best = (entry, candidate_rank);
        }
    }

    let ((code, closest), (score, _)) = best;
    let differences = StackPosition::ALL
        .into_iter()
        .filter(|pos| stack.get(*pos) != closest.get(*pos))
        .map(|pos| pos.index() as u8 + 1)
        .collect();

    debug!(%stack, type_code = %code, score, "best stack match");
    Inference {
        type_code: *code,
        exact_match: false,
        confidence: confidence(score),
        closest_stack: *closest,
        differences,
    }
}

/// Parse four labels and infer a type from them.
pub fn infer_type_str<S: AsRef<str>>(labels: &[S]) -> Result<Inference> {
    Ok(infer_type(&CognitiveStack::parse(labels)?))
}

fn rank(stack: &CognitiveStack, candidate: &CognitiveStack) -> (u8, bool) {
    (weighted_score(stack, candidate), stack.dominant() == candidate.dominant())
}

fn confidence(score: u8) -> f64 {
    let percent = f64::from(score) / f64::from(MAX_SCORE) * 100.0;
    (percent * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_match() {
        let result = infer_type_str(&["Ni", "Fe", "Ti", "Se"]).unwrap();
        assert_eq!(result.type_code.as_str(), "INFJ");
        assert!(result.exact_match);
        assert_eq!(result.confidence, 100.0);
        assert!(result.differences.is_empty());
    }

    #[test]
    fn test_swapped_tail_scores_seventy() {
        let result = infer_type_str(&["Ni", "Fe", "Se", "Ti"]).unwrap();
        assert_eq!(result.type_code.as_str(), "INFJ");
        assert!(!result.exact_match);
        assert_eq!(result.confidence, 70.0);
        assert_eq!(result.closest_stack.to_string(), "Ni-Fe-Ti-Se");
        assert_eq!(result.differences.as_slice(), &[3, 4]);
    }

    #[test]
    fn test_dominant_breaks_score_ties() {
        // Si-Ni-Ne-Fi scores 4 against ENTJ (aux Ni + inferior Fi) and 4
        // against ISFJ/ISTJ (dominant Si). Table order alone would pick
        // ENTJ; the dominant match wins instead.
        let result = infer_type_str(&["Si", "Ni", "Ne", "Fi"]).unwrap();
        assert_eq!(result.type_code.as_str(), "ISFJ");
        assert_eq!(result.confidence, 40.0);
        assert_eq!(result.closest_stack.to_string(), "Si-Fe-Ti-Ne");
        assert_eq!(result.differences.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_full_ties_go_to_table_order() {
        // INFP and ISFP both score 4 through dominant Fi.
        let result = infer_type_str(&["Fi", "Fe", "Ne", "Ti"]).unwrap();
        assert_eq!(result.type_code.as_str(), "INFP");
        assert_eq!(result.confidence, 40.0);

        // ESFP and ESTP both score 4 through dominant Se.
        let result = infer_type_str(&["Se", "Ne", "Ti", "Fi"]).unwrap();
        assert_eq!(result.type_code.as_str(), "ESFP");
    }

    #[test]
    fn test_higher_score_beats_dominant_alone() {
        // ENTJ: Te + Se = 6, ESTJ: Te = 4.
        let result = infer_type_str(&["Te", "Fe", "Se", "Si"]).unwrap();
        assert_eq!(result.type_code.as_str(), "ENTJ");
        assert_eq!(result.confidence, 60.0);
        assert_eq!(result.differences.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_repeated_labels_are_accepted() {
        let result = infer_type_str(&["Fe", "Fe", "Fe", "Fe"]).unwrap();
        assert!(!result.exact_match);
        assert_eq!(result.type_code.as_str(), "ENFJ");
        assert_eq!(result.confidence, 40.0);
    }

    #[test]
    fn test_weighted_score_bounds() {
        let a = CognitiveStack::parse(&["Ni", "Fe", "Ti", "Se"]).unwrap();
        let b = CognitiveStack::parse(&["Se", "Ti", "Fe", "Ni"]).unwrap();
        assert_eq!(weighted_score(&a, &a), MAX_SCORE);
        assert_eq!(weighted_score(&a, &b), 0);
    }

    #[test]
    fn test_validation_errors() {
        assert!(infer_type_str(&["Ni", "Fe", "Ti"]).is_err());
        let err = infer_type_str(&["Ni", "Fe", "Ti", "Zz"]).unwrap_err();
        assert!(err.to_string().contains("Zz"));
    }

    #[test]
    fn test_case_normalized_input() {
        let result = infer_type_str(&["ti", "SE", "nI", "fe"]).unwrap();
        assert_eq!(result.type_code.as_str(), "ISTP");
        assert!(result.exact_match);
    }
}
