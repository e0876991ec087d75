pub mod claim_tree;
pub mod error;
pub mod hasher;

pub use claim_tree::{create_claim_tree, ClaimTree};
pub use error::{MerkleError, MerkleResult};
pub use hasher::ClaimHasher;

// Re-export the leaf and verifier shared with the registry
pub use claimdrop::{verify_claim, ClaimLeaf, ClaimProof};

// Re-export key types from rs-merkle for convenience
pub use rs_merkle::{MerkleProof, MerkleTree};
