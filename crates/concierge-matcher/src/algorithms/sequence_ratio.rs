//! Normalized edit-similarity ratio.
//!
//! `ratio(a, b) = 2·LCS(a, b) / (|a| + |b|)`, equivalently
//! `1 − indel_distance / (|a| + |b|)` where only insertions and deletions are
//! counted. Computed on lowercased characters. Symmetric, bounded to `[0, 1]`,
//! and 1.0 exactly when the lowercased strings are equal.

use concierge_core::ISimilarity;

/// Case-insensitive normalized indel similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl ISimilarity for IndelRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        ratio(a, b)
    }
}

/// Similarity ratio in `[0, 1]`. Two empty strings score 1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();
    ratio_chars(&a, &b)
}

/// Ratio over already-normalized character slices.
pub fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * lcs_len(a, b) as f64 / total as f64
}

/// Length of the longest common subsequence, two-row DP.
pub fn lcs_len(a: &[char], b: &[char]) -> usize {
    // Iterate over the longer string so the rows stay short.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];
    for &x in outer {
        for (j, &y) in inner.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[inner.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(ratio("book a room", "book a room"), 1.0);
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert_eq!(ratio("Book A Room", "book a room"), 1.0);
    }

    #[test]
    fn typo_scores_high() {
        // LCS 11 over 11 + 12 characters.
        let r = ratio("book a rooom", "book a room");
        assert!((r - 22.0 / 23.0).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(ratio("xyzxyz", "hello"), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn lcs_of_known_pair() {
        let a: Vec<char> = "ABCBDAB".chars().collect();
        let b: Vec<char> = "BDCABA".chars().collect();
        assert_eq!(lcs_len(&a, &b), 4);
        assert_eq!(lcs_len(&b, &a), 4);
    }
}
