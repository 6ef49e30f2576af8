//! CKB-flavoured blake2b hashing.

use blake2b_simd::Params as Blake2bParams;

/// Personalization used by the receiving ledger for every default hash.
pub const CKB_HASH_PERSONALIZATION: &[u8; 16] = b"ckb-default-hash";

/// blake2b-256 with the ledger personalization.
pub fn blake2b_256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let hash = Blake2bParams::new()
        .hash_length(32)
        .personal(CKB_HASH_PERSONALIZATION)
        .hash(data.as_ref());

    let mut out = [0u8; 32];
    out.copy_from_slice(hash.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_hash() {
        // Well-known hash of the empty message under the ledger personalization.
        assert_eq!(
            hex::encode(blake2b_256([])),
            "44f4c69744d5f8c55d642062949dcae49bc4e7ef43d388c5a12f42b5633d163e"
        );
    }

    #[test]
    fn test_hash_is_input_sensitive() {
        assert_ne!(blake2b_256(b"a"), blake2b_256(b"b"));
        assert_eq!(blake2b_256(b"a"), blake2b_256(b"a".to_vec()));
    }
}
