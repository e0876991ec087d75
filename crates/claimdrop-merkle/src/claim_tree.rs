use std::collections::HashMap;

use claimdrop::{max_proof_len, ClaimLeaf, Pubkey};
use rs_merkle::MerkleTree;
use tracing::debug;

use crate::{ClaimHasher, MerkleError, MerkleResult};

/// Builds a claim tree from `(claimant, entitlement)` pairs, keeping input order as
/// leaf order.
pub fn create_claim_tree(claimant_entitlements: &[(Pubkey, u64)]) -> MerkleResult<ClaimTree> {
    let leaves = claimant_entitlements
        .iter()
        .map(|(claimant, entitlement)| ClaimLeaf::new(*claimant, *entitlement))
        .collect();

    ClaimTree::from_leaves(leaves)
}

/// Result of building a merkle tree from claim leaves
#[derive(Clone)]
pub struct ClaimTree {
    /// The underlying merkle tree
    pub tree: MerkleTree<ClaimHasher>,
    /// Mapping from claimant pubkey to their leaf index in the tree
    pub claimant_leaf_index: HashMap<Pubkey, usize>,
    /// The original leaves used to build the tree
    pub leaves: Vec<ClaimLeaf>,
}

impl ClaimTree {
    /// Build a merkle tree from a list of claim leaves.
    ///
    /// Rejects an empty list, a claimant listed twice and a zero entitlement.
    pub fn from_leaves(leaves: Vec<ClaimLeaf>) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyWhitelist);
        }

        let mut claimant_to_index = HashMap::with_capacity(leaves.len());
        for (index, leaf) in leaves.iter().enumerate() {
            if leaf.entitlement == 0 {
                return Err(MerkleError::ZeroEntitlement(leaf.claimant));
            }
            if claimant_to_index.insert(leaf.claimant, index).is_some() {
                return Err(MerkleError::DuplicateClaimant(leaf.claimant));
            }
        }

        let leaf_hashes: Vec<[u8; 32]> = leaves.iter().map(ClaimLeaf::to_hash).collect();
        let tree = MerkleTree::<ClaimHasher>::from_leaves(&leaf_hashes);

        debug!(leaf_count = leaves.len(), "claim tree built");
        Ok(ClaimTree {
            tree,
            claimant_leaf_index: claimant_to_index,
            leaves,
        })
    }

    /// Get the merkle root
    pub fn root(&self) -> MerkleResult<[u8; 32]> {
        self.tree.root().ok_or(MerkleError::MissingMerkleRoot)
    }

    pub fn leaf_count(&self) -> u64 {
        self.leaves.len() as u64
    }

    /// Longest proof any leaf of this tree can have.
    pub fn max_proof_len(&self) -> usize {
        max_proof_len(self.leaf_count())
    }

    /// Generate a merkle proof for a specific claimant
    pub fn proof_for_claimant(&self, claimant: &Pubkey) -> MerkleResult<Vec<[u8; 32]>> {
        let index = self.index_of(claimant)?;
        Ok(self.proof_at(index))
    }

    /// Generate merkle proofs for multiple claimants
    pub fn proofs_for_claimants(
        &self,
        claimants: &[Pubkey],
    ) -> MerkleResult<HashMap<Pubkey, Vec<[u8; 32]>>> {
        let mut proofs = HashMap::with_capacity(claimants.len());

        for claimant in claimants {
            let proof = self.proof_for_claimant(claimant)?;
            proofs.insert(*claimant, proof);
        }

        Ok(proofs)
    }

    /// Get the leaf data for a specific claimant
    pub fn leaf_for_claimant(&self, claimant: &Pubkey) -> MerkleResult<&ClaimLeaf> {
        let index = self.index_of(claimant)?;
        self.leaves
            .get(index)
            .ok_or(MerkleError::ClaimantNotFound(*claimant))
    }

    /// Verify a proof for a given claimant against this tree's root, using the same
    /// fold the registry runs.
    pub fn verify_proof(&self, claimant: &Pubkey, proof: &[[u8; 32]]) -> MerkleResult<bool> {
        let root = self.root()?;
        let leaf = self.leaf_for_claimant(claimant)?;

        Ok(claimdrop::verify_claim(
            &leaf.claimant,
            leaf.entitlement,
            proof,
            &root,
        ))
    }

    /// Every leaf paired with its proof, in leaf order.
    pub fn iter_with_proofs(&self) -> impl Iterator<Item = (&ClaimLeaf, Vec<[u8; 32]>)> + '_ {
        self.leaves
            .iter()
            .enumerate()
            .map(|(index, leaf)| (leaf, self.proof_at(index)))
    }

    fn index_of(&self, claimant: &Pubkey) -> MerkleResult<usize> {
        self.claimant_leaf_index
            .get(claimant)
            .copied()
            .ok_or(MerkleError::ClaimantNotFound(*claimant))
    }

    fn proof_at(&self, index: usize) -> Vec<[u8; 32]> {
        self.tree.proof(&[index]).proof_hashes().to_vec()
    }
}
