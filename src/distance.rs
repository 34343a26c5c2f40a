//! Levenshtein edit distance and the near-match heuristic built on it.
//!
//! Similarity is used only to decide whether two list entries are "the same
//! logical entry, edited". A wrong call surfaces as a modified row instead of
//! an add/remove pair in the UI; the underlying sets stay correct either way.

/// Default similarity threshold for near-match classification.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Minimum number of single-character insertions, deletions, and
/// substitutions needed to turn `s1` into `s2`.
///
/// Standard dynamic-programming formulation, kept to two rows so space is
/// linear in the shorter dimension of the table.
pub fn distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Iterate over the longer string, keep rows sized by the shorter one.
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr = vec![0usize; inner.len() + 1];

    for (i, oc) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ic) in inner.iter().enumerate() {
            let substitution = prev[j] + usize::from(oc != ic);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[inner.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max(len)`.
///
/// Two empty strings are fully similar.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let longest = s1.chars().count().max(s2.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance(s1, s2) as f64 / longest as f64
}

/// Whether two strings are the same logical entry under `threshold`.
///
/// Exact equality short-circuits without computing the distance table.
pub fn are_similar(s1: &str, s2: &str, threshold: f64) -> bool {
    s1 == s2 || similarity(s1, s2) >= threshold
}

#[cfg(test)]
mod tests {
    use super::{are_similar, distance, similarity, DEFAULT_SIMILARITY_THRESHOLD};

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance("ads.example.com", "ads.example.com"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance("kitten", "sitting"), distance("sitting", "kitten"));
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn distance_from_empty_is_length() {
        assert_eq!(distance("", "tracker"), 7);
        assert_eq!(distance("tracker", ""), 7);
    }

    #[test]
    fn distance_counts_multibyte_chars_not_bytes() {
        assert_eq!(distance("zürich", "zurich"), 1);
    }

    #[test]
    fn similarity_is_bounded_and_reflexive() {
        assert_eq!(similarity("ads.example.com", "ads.example.com"), 1.0);
        assert_eq!(similarity("", ""), 1.0);

        let s = similarity("google.com", "instagram.com");
        assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn near_matches_pass_the_default_threshold() {
        // One substitution in a 16-char string: similarity 0.9375.
        assert!(are_similar(
            "cdn1.example.com",
            "cdn2.example.com",
            DEFAULT_SIMILARITY_THRESHOLD
        ));
    }

    #[test]
    fn unrelated_domains_fail_the_default_threshold() {
        assert!(!are_similar(
            "instagram.com",
            "google.com",
            DEFAULT_SIMILARITY_THRESHOLD
        ));
        assert!(!are_similar(
            "instagram.com",
            "twitter.com",
            DEFAULT_SIMILARITY_THRESHOLD
        ));
    }

    #[test]
    fn exact_match_passes_any_threshold() {
        assert!(are_similar("x", "x", 2.0));
    }
}
