//! Bitwise `f64` identity for structural equality and hashing.
//!
//! Catalog records carry `f64` fields that may be NaN (absent numeric columns
//! parse to NaN rather than failing the row). Structural interning therefore
//! needs an equality under which `NaN == NaN` holds, which plain float
//! comparison does not provide. Comparing bit patterns does, as long as all
//! NaNs are collapsed to one canonical pattern first.

use std::hash::Hasher;

/// Canonical bit pattern for a float. All NaNs map to the same bits; `0.0`
/// and `-0.0` stay distinct.
#[inline]
#[must_use]
pub fn canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

/// Bitwise equality. `NaN == NaN` is true.
#[inline]
#[must_use]
pub fn f64_eq(a: f64, b: f64) -> bool {
    canonical_bits(a) == canonical_bits(b)
}

/// Hash a float consistently with [`f64_eq`].
#[inline]
pub fn hash_f64<H: Hasher>(v: f64, state: &mut H) {
    state.write_u64(canonical_bits(v));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of(v: f64) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_f64(v, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_nan_equals_nan() {
        assert!(f64_eq(f64::NAN, f64::NAN));
        assert!(f64_eq(f64::NAN, -f64::NAN));
        assert_eq!(hash_of(f64::NAN), hash_of(-f64::NAN));
    }

    #[test]
    fn test_ordinary_values() {
        assert!(f64_eq(6_378_137.0, 6_378_137.0));
        assert!(!f64_eq(6_378_137.0, 6_356_752.3));
        assert_eq!(hash_of(0.017_453_292_519_943_295), hash_of(0.017_453_292_519_943_295));
    }

    #[test]
    fn test_signed_zero_distinct() {
        assert!(!f64_eq(0.0, -0.0));
    }
}
