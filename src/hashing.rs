//! Polynomial string hashing

/// Multiplier of the polynomial accumulation
pub const HASH_PRIME: usize = 31;

/// Maps `key` to a bucket index in `0..modulus`.
///
/// Every character code (UTF-16 code unit) is folded in as `h = (31 * h + c) % modulus`,
/// starting from zero. The modulo is applied at every step, so the same key lands in the same
/// bucket regardless of integer width, and a key maps to a different index once `modulus`
/// changes.
///
/// A `modulus` of zero has no valid index and yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
pub fn polynomial_hash(key: &str, modulus: usize) -> usize {
    if modulus == 0 {
        return 0;
    }

    let modulus = modulus as u128;
    let prime = HASH_PRIME as u128;

    // `hash < modulus <= usize::MAX` so `31 * hash + c` always fits in a `u128`
    let hash = key
        .encode_utf16()
        .fold(0_u128, |hash, code| (prime * hash + u128::from(code)) % modulus);

    hash as usize
}
