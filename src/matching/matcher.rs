//! Token-overlap name matching
//!
//! Deliberately crude: it only has to survive formatting drift between a
//! free-text "manager" column and the roster's name column.

use super::normalize::normalize;
use crate::graph::EmployeeRecord;

/// A candidate must score strictly above this to count as a match
pub const MATCH_THRESHOLD: f64 = 0.7;

/// Similarity of two names in `[0, 1]`
///
/// 1.0 when the normalized names are equal. Otherwise the number of tokens
/// of `a` that appear in `b`, divided by the larger token count. Each token
/// of `a` is counted at most once.
pub fn similarity(a: &str, b: &str) -> f64 {
    let na = normalize(a);
    let nb = normalize(b);

    if na == nb {
        return 1.0;
    }

    let tokens_a: Vec<&str> = na.split_whitespace().collect();
    let tokens_b: Vec<&str> = nb.split_whitespace().collect();

    let matches = tokens_a
        .iter()
        .filter(|ta| tokens_b.iter().any(|tb| tb == *ta))
        .count();

    let max_len = tokens_a.len().max(tokens_b.len());
    if max_len == 0 {
        return 0.0;
    }
    matches as f64 / max_len as f64
}

/// Best-scoring candidate for `query`, if any scores above [`MATCH_THRESHOLD`]
///
/// Ties keep the first candidate in iteration order.
pub fn find_best_match<'a>(query: &str, candidates: &'a [EmployeeRecord]) -> Option<&'a EmployeeRecord> {
    let mut best: Option<&EmployeeRecord> = None;
    let mut best_score = MATCH_THRESHOLD;

    for candidate in candidates {
        let score = similarity(query, &candidate.name);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(name: &str) -> EmployeeRecord {
        EmployeeRecord::new(name, "Ops", "Clerk", "Paris", "")
    }

    #[test]
    fn test_identity_scores_one() {
        for name in ["John Smith", "a", "Mary Ann Lee"] {
            assert_eq!(similarity(name, name), 1.0);
        }
    }

    #[test]
    fn test_reordered_names_score_one() {
        assert_eq!(similarity("Smith John", "John Smith"), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // "john" matches, "smith" does not: 1 / 2
        assert_eq!(similarity("John Smith", "John Smyth"), 0.5);
        // 2 of 3 tokens
        let s = similarity("Mary Ann Lee", "Mary Lee");
        assert!((s - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_query_tokens_each_count_once() {
        // both "lee" tokens in the query find the single "lee" in the candidate
        assert_eq!(similarity("Lee Lee", "Lee Kim"), 1.0);
    }

    #[test]
    fn test_disjoint_and_empty() {
        assert_eq!(similarity("Jon Smyth", "John Smith"), 0.0);
        assert_eq!(similarity("", "John"), 0.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_find_best_match_rejects_below_threshold() {
        let roster = vec![emp("John Smith"), emp("Jane Doe")];
        assert!(find_best_match("Jon Smyth", &roster).is_none());
        // 0.5 is not enough
        assert!(find_best_match("John Smyth", &roster).is_none());
    }

    #[test]
    fn test_find_best_match_accepts_reordered() {
        let roster = vec![emp("Jane Doe"), emp("John Smith")];
        let found = find_best_match("Smith John", &roster).unwrap();
        assert_eq!(found.name, "John Smith");
    }

    #[test]
    fn test_threshold_is_strict() {
        // 3 of 4 tokens = 0.75 passes; 7 of 10 = 0.7 does not
        let roster = vec![emp("a b c d")];
        assert!(find_best_match("a b c x", &roster).is_some());

        let roster = vec![emp("a b c d e f g h i j")];
        assert!(find_best_match("a b c d e f g x y z", &roster).is_none());
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let first = emp("John Smith").with_employee_id("1");
        let second = emp("Smith John").with_employee_id("2");
        let roster = vec![first, second];
        let found = find_best_match("john smith", &roster).unwrap();
        assert_eq!(found.employee_id.as_deref(), Some("1"));
    }
}
