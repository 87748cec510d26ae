use sha2::{Digest, Sha256};

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Parent hash of two children.
///
/// The children are hashed as their concatenated lowercase hex renderings rather than raw bytes,
/// so roots agree with note batches published by the browser client.
pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(hex::encode(left).as_bytes());
    hasher.update(hex::encode(right).as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::{hash_pair, sha256};

    #[test]
    fn test_hash_pair_over_hex_concatenation() {
        let left = sha256(b"alice");
        let right = sha256(b"bob");

        let concatenated = format!("{}{}", hex::encode(left), hex::encode(right));
        assert_eq!(hash_pair(&left, &right), sha256(concatenated.as_bytes()));
        assert_eq!(
            hex::encode(hash_pair(&left, &right)),
            "92bb1b1e2b4fe6055b9acef6b11b355bf0c58f15aa7b1cde6e3dabec49d95174"
        );

        // order matters
        assert_ne!(hash_pair(&left, &right), hash_pair(&right, &left));
    }
}
