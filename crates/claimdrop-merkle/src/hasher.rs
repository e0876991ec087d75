use claimdrop::{hash_internal_node, hash_leaf_data};
use rs_merkle::Hasher;

/// Adapts the registry's hashing scheme to `rs_merkle`, so trees built offline produce
/// exactly the roots and proofs `claimdrop::verify_claim` accepts.
///
/// - **Leaf nodes**: `SHA256(0x00 || leaf_data)`
/// - **Internal nodes**: `SHA256(0x01 || min(L, R) || max(L, R))`
/// - **Unpaired node**: carried to the next level as-is, never hashed with itself
#[derive(Clone, Debug)]
pub struct ClaimHasher;

impl Hasher for ClaimHasher {
    type Hash = [u8; 32];

    fn hash(data: &[u8]) -> [u8; 32] {
        hash_leaf_data(data)
    }

    fn concat_and_hash(left: &Self::Hash, right: Option<&Self::Hash>) -> Self::Hash {
        match right {
            Some(right_hash) => hash_internal_node(left, right_hash),
            // If no right sibling, just propagate the left hash
            None => *left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimdrop::{ClaimLeaf, Pubkey};

    #[test]
    fn test_claim_hasher_leaf_consistency() {
        let leaf = ClaimLeaf::new(Pubkey::new_from_array([3u8; 32]), 42);

        assert_eq!(
            ClaimHasher::hash(&leaf.encode()),
            leaf.to_hash(),
            "ClaimHasher should produce the same hash as ClaimLeaf::to_hash"
        );
    }

    #[test]
    fn test_claim_hasher_internal_node_ordering() {
        let hash1 = [1u8; 32];
        let hash2 = [2u8; 32];

        let result1 = ClaimHasher::concat_and_hash(&hash1, Some(&hash2));
        let result2 = ClaimHasher::concat_and_hash(&hash2, Some(&hash1));

        assert_eq!(result1, result2);
        assert_eq!(result1, hash_internal_node(&hash1, &hash2));
    }

    #[test]
    fn test_unpaired_node_is_carried() {
        let hash = [7u8; 32];
        assert_eq!(ClaimHasher::concat_and_hash(&hash, None), hash);
    }
}
