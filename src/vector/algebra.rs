// Vector algebra over word-frequency mappings.
//
// Sums of squares and dot products are accumulated exactly in big integers.
// Conversion to floating point happens once, at the very end, so a norm or a
// dot product is only ever rounded a single time.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::frequency::Frequencies;

/// Values up to this many bits convert to `f64` (and survive squaring back)
/// without leaving the finite range.
const F64_SAFE_BITS: u64 = 1000;

/// Exact sum of squared counts.
pub fn squared_norm(frequencies: &Frequencies) -> BigUint {
    frequencies.values().map(|count| count * count).sum()
}

/// Exact dot product of two mappings.
///
/// Walks the smaller mapping and looks each key up in the larger one, so the
/// cost is linear in the smaller side. Keys found on only one side add nothing.
pub fn exact_dot(a: &Frequencies, b: &Frequencies) -> BigUint {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(word, x)| large.get(word).map(|y| x * y))
        .sum()
}

/// Euclidean norm: exact sum of squares, then one square root.
pub fn euclidean_norm(frequencies: &Frequencies) -> f64 {
    sqrt_to_f64(&squared_norm(frequencies))
}

/// Dot product as a float. A missing second mapping contributes nothing.
pub fn dot_product(a: &Frequencies, b: Option<&Frequencies>) -> f64 {
    match b {
        Some(b) => to_f64(&exact_dot(a, b)),
        None => 0.0,
    }
}

/// Number of words present in both mappings.
pub fn shared_vocabulary(a: &Frequencies, b: &Frequencies) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.keys().filter(|word| large.contains_key(*word)).count()
}

/// Convert to the nearest `f64`; anything past `f64::MAX` saturates to infinity.
pub(crate) fn to_f64(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

/// Square root of an exact integer, rounded once to `f64`.
///
/// Very wide values are shifted right by an even number of bits first, and
/// the root is scaled back by the matching power of two.
pub(crate) fn sqrt_to_f64(value: &BigUint) -> f64 {
    if value.is_zero() {
        return 0.0;
    }
    let shift = even_shift(value.bits());
    let root = to_f64(&(value >> shift)).sqrt();
    if shift == 0 {
        root
    } else {
        root * 2f64.powi((shift / 2) as i32)
    }
}

/// Even right-shift that brings a `bits`-wide value under `F64_SAFE_BITS`.
pub(crate) fn even_shift(bits: u64) -> u64 {
    if bits <= F64_SAFE_BITS {
        0
    } else {
        (bits - F64_SAFE_BITS + 1) & !1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs(entries: &[(&str, u64)]) -> Frequencies {
        entries
            .iter()
            .map(|(w, c)| (w.to_string(), BigUint::from(*c)))
            .collect()
    }

    #[test]
    fn test_norm_three_four_five() {
        assert_eq!(euclidean_norm(&freqs(&[("a", 3), ("b", 4)])), 5.0);
    }

    #[test]
    fn test_norm_of_empty_mapping_is_zero() {
        assert_eq!(euclidean_norm(&Frequencies::new()), 0.0);
    }

    #[test]
    fn test_dot_only_shared_keys_contribute() {
        let a = freqs(&[("a", 2), ("b", 3)]);
        let b = freqs(&[("b", 5), ("c", 7)]);
        assert_eq!(dot_product(&a, Some(&b)), 15.0);
        assert_eq!(dot_product(&b, Some(&a)), 15.0);
    }

    #[test]
    fn test_dot_with_missing_mapping_is_zero() {
        assert_eq!(dot_product(&freqs(&[("a", 2)]), None), 0.0);
    }

    #[test]
    fn test_squared_norm_is_exact_beyond_u64() {
        let big = BigUint::from(u64::MAX);
        let mut map = Frequencies::new();
        map.insert("w".to_string(), big.clone());
        assert_eq!(squared_norm(&map), &big * &big);
    }

    #[test]
    fn test_sqrt_of_wide_value_stays_accurate() {
        // (2^700)^2 = 2^1400 needs the shifted path
        let root = BigUint::from(1u8) << 700u32;
        let square = &root * &root;
        let expected = 2f64.powi(700);
        let got = sqrt_to_f64(&square);
        assert!(((got - expected) / expected).abs() < 1e-15, "got {got}");
    }

    #[test]
    fn test_even_shift_is_even() {
        assert_eq!(even_shift(10), 0);
        assert_eq!(even_shift(F64_SAFE_BITS), 0);
        for bits in F64_SAFE_BITS + 1..F64_SAFE_BITS + 6 {
            let shift = even_shift(bits);
            assert_eq!(shift % 2, 0);
            assert!(bits - shift <= F64_SAFE_BITS);
        }
    }

    #[test]
    fn test_shared_vocabulary_counts_common_keys() {
        let a = freqs(&[("a", 1), ("b", 1), ("c", 1)]);
        let b = freqs(&[("b", 9), ("c", 2), ("d", 4)]);
        assert_eq!(shared_vocabulary(&a, &b), 2);
        assert_eq!(shared_vocabulary(&b, &a), 2);
    }
}
