// Cosine distance between two frequency vectors.
//
// The angle is in radians: 0.0 for vectors pointing the same way, π/2 for
// vectors with no shared vocabulary. Whenever the cosine is undefined (no
// target, an empty side, a zero-length vector) the answer is π/2 as well.

use std::f64::consts::FRAC_PI_2;

use num_bigint::BigUint;
use num_traits::Zero;

use super::algebra::{even_shift, exact_dot, squared_norm, to_f64};
use super::frequency::{Frequencies, FrequencyVector};

/// Cosine distance in radians, always within `[0, π/2]`.
///
/// | condition                                  | result              |
/// |--------------------------------------------|---------------------|
/// | `b` is `None`                              | π/2                 |
/// | `a` built from empty input, or `b` empty   | π/2                 |
/// | either side has zero magnitude             | π/2                 |
/// | `a` and `b` are proportional               | 0.0 exactly         |
/// | otherwise                                  | `acos(dot / norms)` |
pub fn distance(a: &FrequencyVector, b: Option<&Frequencies>) -> f64 {
    match cosine(a, b) {
        Some(c) => c.clamp(-1.0, 1.0).acos(),
        None => FRAC_PI_2,
    }
}

/// Cosine similarity in `[0, 1]`; 0.0 wherever [`distance`] reports π/2
/// because the cosine is undefined.
pub fn cosine_similarity(a: &FrequencyVector, b: Option<&Frequencies>) -> f64 {
    cosine(a, b).map_or(0.0, |c| c.clamp(0.0, 1.0))
}

fn cosine(a: &FrequencyVector, b: Option<&Frequencies>) -> Option<f64> {
    let b = b?;
    if a.line_count() == 0 || b.is_empty() {
        return None;
    }

    let norm_a = squared_norm(a.frequencies());
    let norm_b = squared_norm(b);
    if norm_a.is_zero() || norm_b.is_zero() {
        return None;
    }

    let dot = exact_dot(a.frequencies(), b);
    let norms = norm_a * norm_b;
    // Cauchy-Schwarz holds with equality exactly when the vectors are
    // proportional; checking it in integers avoids any rounding.
    if &dot * &dot == norms {
        return Some(1.0);
    }
    Some(ratio(&dot, &norms))
}

/// `dot / sqrt(norms)` with a single rounding per operand, even when the
/// integers are too wide for `f64`.
fn ratio(dot: &BigUint, norms: &BigUint) -> f64 {
    let shift = even_shift(norms.bits());
    let numerator = to_f64(&(dot >> (shift / 2)));
    let denominator = to_f64(&(norms >> shift)).sqrt();
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(text: &str) -> FrequencyVector {
        FrequencyVector::from_text(Some(text))
    }

    #[test]
    fn test_identical_documents_are_zero() {
        let a = vector("the quick brown fox jumps over the lazy dog");
        assert_eq!(distance(&a, Some(a.frequencies())), 0.0);
    }

    #[test]
    fn test_proportional_documents_are_zero() {
        let a = vector("red red blue");
        let b = vector("red blue red red blue red");
        assert_eq!(distance(&a, Some(b.frequencies())), 0.0);
        assert_eq!(cosine_similarity(&a, Some(b.frequencies())), 1.0);
    }

    #[test]
    fn test_disjoint_documents_are_orthogonal() {
        let a = vector("apple banana");
        let b = vector("carrot daikon");
        assert_eq!(distance(&a, Some(b.frequencies())), FRAC_PI_2);
        assert_eq!(cosine_similarity(&a, Some(b.frequencies())), 0.0);
    }

    #[test]
    fn test_missing_target_is_orthogonal() {
        assert_eq!(distance(&vector("anything"), None), FRAC_PI_2);
    }

    #[test]
    fn test_empty_sides_are_orthogonal() {
        let a = vector("some words");
        let empty = FrequencyVector::from_text(None);
        assert_eq!(distance(&a, Some(empty.frequencies())), FRAC_PI_2);
        assert_eq!(distance(&empty, Some(a.frequencies())), FRAC_PI_2);
    }

    #[test]
    fn test_line_without_words_is_orthogonal_not_nan() {
        let digits = vector("123 456");
        let a = vector("words here");
        assert_eq!(distance(&digits, Some(a.frequencies())), FRAC_PI_2);
    }

    #[test]
    fn test_zero_counts_in_target_are_orthogonal() {
        let a = vector("word");
        let mut target = Frequencies::new();
        target.insert("word".to_string(), BigUint::zero());
        assert_eq!(distance(&a, Some(&target)), FRAC_PI_2);
    }

    #[test]
    fn test_partial_overlap_value() {
        // a = (1, 1, 0), b = (0, 1, 1): cos = 1/2, angle = π/3
        let a = vector("x y");
        let b = vector("y z");
        let d = distance(&a, Some(b.frequencies()));
        assert!((d - std::f64::consts::FRAC_PI_3).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn test_ratio_with_wide_integers() {
        // dot = 2^600, norms = 2^1400: ratio = 2^600 / 2^700 = 2^-100
        let dot = BigUint::from(1u8) << 600u32;
        let norms = BigUint::from(1u8) << 1400u32;
        let r = ratio(&dot, &norms);
        assert!((r - 2f64.powi(-100)).abs() < 1e-40, "got {r}");
    }
}
