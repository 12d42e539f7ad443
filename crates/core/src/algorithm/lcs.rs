//! Longest-common-subsequence aligner
//!
//! Classic dynamic-programming LCS over exact token equality. The full
//! (n+1)x(m+1) matrix is materialized on every call, so time and memory are
//! O(n*m); fine for interactive-size text blocks, a scaling limit for bulk
//! documents.

use crate::algorithm::DiffAlgorithm;
use crate::diff::AnnotatedToken;
use crate::tokenizers::Token;

/// LCS alignment with a fixed tie-break policy
///
/// Token comparison is exact string equality: case-sensitive and
/// whitespace-sensitive. When the matrix scores tie during backtrace, the
/// revised side is consumed first (the token is marked added). The policy
/// picks one of several equally-optimal diffs and is part of the observable
/// contract, so it must not be changed.
#[derive(Debug, Clone, Default)]
pub struct LcsAlgorithm;

impl LcsAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LcsAlgorithm {
    fn align(
        &self,
        original: &[Token],
        revised: &[Token],
    ) -> (Vec<AnnotatedToken>, Vec<AnnotatedToken>) {
        let n = original.len();
        let m = revised.len();

        log::trace!("building {}x{} alignment matrix", n + 1, m + 1);

        // Prefix LCS lengths, base row and column zero
        let mut matrix = vec![vec![0usize; m + 1]; n + 1];

        for i in 1..=n {
            for j in 1..=m {
                if original[i - 1].text == revised[j - 1].text {
                    matrix[i][j] = matrix[i - 1][j - 1] + 1;
                } else {
                    matrix[i][j] = matrix[i - 1][j].max(matrix[i][j - 1]);
                }
            }
        }

        // Backtrace from (n, m); emits in reverse order
        let mut annotated_original = Vec::with_capacity(n);
        let mut annotated_revised = Vec::with_capacity(m);
        let mut i = n;
        let mut j = m;

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && original[i - 1].text == revised[j - 1].text {
                annotated_original.push(AnnotatedToken::unchanged(&original[i - 1]));
                annotated_revised.push(AnnotatedToken::unchanged(&revised[j - 1]));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || matrix[i][j - 1] >= matrix[i - 1][j]) {
                annotated_revised.push(AnnotatedToken::added(&revised[j - 1]));
                j -= 1;
            } else {
                annotated_original.push(AnnotatedToken::removed(&original[i - 1]));
                i -= 1;
            }
        }

        annotated_original.reverse();
        annotated_revised.reverse();

        (annotated_original, annotated_revised)
    }

    fn name(&self) -> &str {
        "lcs"
    }

    fn clone_box(&self) -> Box<dyn DiffAlgorithm> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangeKind;
    use crate::span::CharSpan;

    fn tokens(texts: &[&str]) -> Vec<Token> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Token::new(t.to_string(), CharSpan::point(i), i))
            .collect()
    }

    fn kinds(annotated: &[AnnotatedToken]) -> Vec<ChangeKind> {
        annotated.iter().map(|t| t.kind).collect()
    }

    fn texts(annotated: &[AnnotatedToken]) -> Vec<&str> {
        annotated.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_identity() {
        let seq = tokens(&["a", " ", "b"]);
        let (first, second) = LcsAlgorithm::new().align(&seq, &seq);

        assert!(first.iter().all(|t| t.kind == ChangeKind::Unchanged));
        assert!(second.iter().all(|t| t.kind == ChangeKind::Unchanged));
        assert_eq!(texts(&first), vec!["a", " ", "b"]);
        assert_eq!(texts(&second), vec!["a", " ", "b"]);
    }

    #[test]
    fn test_total_difference() {
        let left = tokens(&["a", "b"]);
        let right = tokens(&["x", "y", "z"]);
        let (first, second) = LcsAlgorithm::new().align(&left, &right);

        assert!(first.iter().all(|t| t.kind == ChangeKind::Removed));
        assert!(second.iter().all(|t| t.kind == ChangeKind::Added));
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_empty_sequences() {
        let (first, second) = LcsAlgorithm::new().align(&[], &[]);
        assert!(first.is_empty());
        assert!(second.is_empty());

        let seq = tokens(&["a"]);
        let (first, second) = LcsAlgorithm::new().align(&seq, &[]);
        assert_eq!(kinds(&first), vec![ChangeKind::Removed]);
        assert!(second.is_empty());

        let (first, second) = LcsAlgorithm::new().align(&[], &seq);
        assert!(first.is_empty());
        assert_eq!(kinds(&second), vec![ChangeKind::Added]);
    }

    #[test]
    fn test_single_substitution() {
        let left = tokens(&["the", " ", "cat"]);
        let right = tokens(&["the", " ", "dog"]);
        let (first, second) = LcsAlgorithm::new().align(&left, &right);

        assert_eq!(
            kinds(&first),
            vec![ChangeKind::Unchanged, ChangeKind::Unchanged, ChangeKind::Removed]
        );
        assert_eq!(
            kinds(&second),
            vec![ChangeKind::Unchanged, ChangeKind::Unchanged, ChangeKind::Added]
        );
    }

    // Regression fixture for the tie-break policy: "A B C" vs "C B A" has
    // several optimal alignments; the policy must keep "C" and rebuild the
    // rest around it.
    #[test]
    fn test_tie_break_fixture() {
        let left = tokens(&["A", " ", "B", " ", "C"]);
        let right = tokens(&["C", " ", "B", " ", "A"]);
        let (first, second) = LcsAlgorithm::new().align(&left, &right);

        assert_eq!(
            kinds(&first),
            vec![
                ChangeKind::Removed,
                ChangeKind::Removed,
                ChangeKind::Removed,
                ChangeKind::Removed,
                ChangeKind::Unchanged,
            ]
        );
        assert_eq!(
            kinds(&second),
            vec![
                ChangeKind::Unchanged,
                ChangeKind::Added,
                ChangeKind::Added,
                ChangeKind::Added,
                ChangeKind::Added,
            ]
        );
        assert_eq!(texts(&first), vec!["A", " ", "B", " ", "C"]);
        assert_eq!(texts(&second), vec!["C", " ", "B", " ", "A"]);
    }

    #[test]
    fn test_coverage_and_unchanged_subsequence() {
        let left = tokens(&["a", " ", "b", " ", "c", " ", "d"]);
        let right = tokens(&["a", " ", "x", " ", "c", " ", "d", " ", "e"]);
        let (first, second) = LcsAlgorithm::new().align(&left, &right);

        // Every input token appears exactly once, in order
        assert_eq!(texts(&first), vec!["a", " ", "b", " ", "c", " ", "d"]);
        assert_eq!(
            texts(&second),
            vec!["a", " ", "x", " ", "c", " ", "d", " ", "e"]
        );

        // The unchanged subsequences are identical on both sides
        let unchanged_first: Vec<&str> = first
            .iter()
            .filter(|t| t.is_unchanged())
            .map(|t| t.text.as_str())
            .collect();
        let unchanged_second: Vec<&str> = second
            .iter()
            .filter(|t| t.is_unchanged())
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(unchanged_first, unchanged_second);
    }

    #[test]
    fn test_determinism() {
        let left = tokens(&["a", "b", "a", "b"]);
        let right = tokens(&["b", "a", "b", "a"]);
        let algo = LcsAlgorithm::new();

        let run1 = algo.align(&left, &right);
        let run2 = algo.align(&left, &right);
        assert_eq!(run1, run2);
    }
}
