//! Hash function for the chained suspect table.
//!
//! Polynomial rolling hash over the key bytes: `acc = acc * 31 + byte`,
//! evaluated in 32-bit unsigned wrapping arithmetic and reduced modulo the
//! bucket count at the end. The hash is order dependent, so anagrams land in
//! different buckets more often than with an additive hash.

/// Multiplier of the rolling hash.
pub const HASH_MULTIPLIER: u32 = 31;

/// Number of buckets in the table. Prime to reduce clustering.
pub const BUCKET_COUNT: usize = 13;

/// Computes the raw 32-bit rolling hash of `key`.
pub fn rolling_hash(key: &str) -> u32 {
    key.bytes().fold(0u32, |acc, byte| {
        acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(byte))
    })
}

/// Maps `key` to its bucket index in `[0, BUCKET_COUNT)`.
pub fn bucket_index(key: &str) -> usize {
    (rolling_hash(key) % BUCKET_COUNT as u32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0 ; "empty key")]
    #[test_case("a", 6 ; "single byte")]
    #[test_case("ab", 11 ; "two bytes")]
    #[test_case("Pegadas na lama", 3 ; "pegadas")]
    #[test_case("Chave dourada com brasao", 5 ; "chave")]
    #[test_case("Copo quebrado", 6 ; "copo")]
    #[test_case("Bilhete rasgado com data antiga", 7 ; "bilhete")]
    #[test_case("Diario com anotacoes estranhas", 7 ; "diario collides with bilhete")]
    #[test_case("Carta de amor", 8 ; "carta")]
    fn test_bucket_index(key: &str, expected: usize) {
        assert_eq!(bucket_index(key), expected);
    }

    #[test]
    fn test_rolling_hash_is_order_dependent() {
        assert_eq!(rolling_hash("ab"), 97 * 31 + 98);
        assert_ne!(rolling_hash("ab"), rolling_hash("ba"));
    }

    #[test]
    fn test_long_key_wraps_without_overflow() {
        let key = "x".repeat(4_096);
        assert!(bucket_index(&key) < BUCKET_COUNT);
        assert_eq!(bucket_index(&key), bucket_index(&key));
    }
}
