/// Cosine similarity between two precomputed embedding vectors.
///
/// Mismatched lengths score 0.0 rather than erroring: embedding models get
/// swapped upstream and a stale vector must only ever cost relevance.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = [0.5, 0.2, -0.3];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposite_vectors_score_minus_one() {
        let a = [1.0, 2.0];
        let b = [-1.0, -2.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn mismatched_lengths_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn zero_magnitude_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        let empty: [f32; 0] = [];
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn similarity_stays_in_unit_range(
                a in proptest::collection::vec(-100.0f32..100.0, 1..32),
                b in proptest::collection::vec(-100.0f32..100.0, 1..32),
            ) {
                let len = a.len().min(b.len());
                let score = cosine_similarity(&a[..len], &b[..len]);
                prop_assert!((-1.0001..=1.0001).contains(&score));
            }

            #[test]
            fn mismatched_lengths_always_zero(
                a in proptest::collection::vec(-100.0f32..100.0, 1..16),
                b in proptest::collection::vec(-100.0f32..100.0, 17..32),
            ) {
                prop_assert_eq!(cosine_similarity(&a, &b), 0.0);
            }
        }
    }
}
