/*!
# Distribution Compiler

Turns a whitelist into everything needed to run a distribution:

- the merkle root and leaf count the admin publishes with `update_root`
- the total the vault must be funded with
- one proof per claimant, handed out off-chain

The result is stored as `distribution.json` and tagged with `LEAF_ENCODING_VERSION`
so proofs are never checked against a root built with a different leaf layout.
*/

use crate::{CompilerError, CompilerResult, WhitelistEntry};
use claimdrop::{verify_claim, ClaimLeaf, ClaimRequest, Pubkey, LEAF_ENCODING_VERSION};
use claimdrop_csvs::SummaryRow;
use claimdrop_merkle::ClaimTree;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// One claimant's entry in a compiled distribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompiledClaim {
    #[serde(with = "claimdrop_csvs::serde_helpers::pubkey")]
    pub claimant: Pubkey,
    pub entitlement: u64,
    #[serde(with = "claimdrop_csvs::serde_helpers::hash_vec")]
    pub proof: Vec<[u8; 32]>,
}

impl CompiledClaim {
    pub fn leaf(&self) -> ClaimLeaf {
        ClaimLeaf::new(self.claimant, self.entitlement)
    }

    /// The request this claimant submits to `Distributor::claim_tokens`.
    pub fn to_request(&self) -> ClaimRequest {
        ClaimRequest::new(self.claimant, self.entitlement, self.proof.clone())
    }
}

/// Complete compilation result, serialized as `distribution.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompiledDistribution {
    pub encoding_version: u8,
    pub name: String,
    #[serde(with = "claimdrop_csvs::serde_helpers::hash")]
    pub merkle_root: [u8; 32],
    pub leaf_count: u64,
    pub total_entitlement: u64,
    pub max_proof_len: usize,
    pub claims: Vec<CompiledClaim>,
}

#[derive(Deserialize)]
struct ArtifactHeader {
    encoding_version: u8,
}

impl CompiledDistribution {
    /// Look up the compiled claim for `claimant`.
    pub fn claim_for(&self, claimant: &Pubkey) -> CompilerResult<&CompiledClaim> {
        self.claims
            .iter()
            .find(|claim| claim.claimant == *claimant)
            .ok_or(CompilerError::ClaimantNotFound(*claimant))
    }

    /// Check a compiled claim against this distribution's root.
    pub fn verify(&self, claim: &CompiledClaim) -> bool {
        verify_claim(
            &claim.claimant,
            claim.entitlement,
            &claim.proof,
            &self.merkle_root,
        )
    }

    pub fn summary_row(&self) -> SummaryRow {
        SummaryRow {
            distribution: self.name.clone(),
            merkle_root: self.merkle_root,
            leaf_count: self.leaf_count,
            total_entitlement: self.total_entitlement,
        }
    }

    pub fn merkle_root_hex(&self) -> String {
        hex::encode(self.merkle_root)
    }

    pub fn to_json(&self) -> CompilerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an artifact, refusing one built with a different leaf encoding.
    pub fn from_json(json: &str) -> CompilerResult<Self> {
        let header: ArtifactHeader = serde_json::from_str(json)?;
        if header.encoding_version != LEAF_ENCODING_VERSION {
            return Err(CompilerError::EncodingVersionMismatch {
                expected: LEAF_ENCODING_VERSION,
                found: header.encoding_version,
            });
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> CompilerResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CompilerResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Compile a whitelist into a distribution.
///
/// Leaf order follows whitelist order. Duplicate claimants, zero amounts and an empty
/// whitelist are rejected by the tree builder.
pub fn compile_distribution(
    name: &str,
    entries: &[WhitelistEntry],
) -> CompilerResult<CompiledDistribution> {
    if name.trim().is_empty() {
        return Err(CompilerError::InvalidConfig(
            "distribution name must not be empty".to_string(),
        ));
    }

    let claimant_entitlements: Vec<(Pubkey, u64)> = entries
        .iter()
        .map(|entry| (entry.address, entry.amount))
        .collect();
    let tree = claimdrop_merkle::create_claim_tree(&claimant_entitlements)?;
    let merkle_root = tree.root()?;

    let total_entitlement = entries
        .iter()
        .try_fold(0u64, |acc, entry| acc.checked_add(entry.amount))
        .ok_or(CompilerError::EntitlementOverflow)?;

    let claims = compile_claims(&tree);
    debug!(claims = claims.len(), "proofs generated");

    let distribution = CompiledDistribution {
        encoding_version: LEAF_ENCODING_VERSION,
        name: name.to_string(),
        merkle_root,
        leaf_count: tree.leaf_count(),
        total_entitlement,
        max_proof_len: tree.max_proof_len(),
        claims,
    };

    info!(
        distribution = name,
        leaf_count = distribution.leaf_count,
        total_entitlement,
        merkle_root = %distribution.merkle_root_hex(),
        "distribution compiled"
    );
    Ok(distribution)
}

/// Read a whitelist file (`.csv` or `.json`) and compile it.
pub fn compile_distribution_from_file<P: AsRef<Path>>(
    name: &str,
    whitelist_path: P,
) -> CompilerResult<CompiledDistribution> {
    let entries = crate::read_whitelist(whitelist_path)?;
    compile_distribution(name, &entries)
}

fn compile_claims(tree: &ClaimTree) -> Vec<CompiledClaim> {
    tree.iter_with_proofs()
        .map(|(leaf, proof)| CompiledClaim {
            claimant: leaf.claimant,
            entitlement: leaf.entitlement,
            proof,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimdrop_merkle::MerkleError;
    use tempfile::TempDir;

    fn entries(count: u8) -> Vec<WhitelistEntry> {
        (1..=count)
            .map(|i| WhitelistEntry::new(Pubkey::new_from_array([i; 32]), i as u64 * 10))
            .collect()
    }

    #[test]
    fn test_compile_distribution() {
        let distribution = compile_distribution("genesis", &entries(5)).unwrap();

        assert_eq!(distribution.encoding_version, LEAF_ENCODING_VERSION);
        assert_eq!(distribution.leaf_count, 5);
        assert_eq!(distribution.total_entitlement, 150);
        assert_eq!(distribution.max_proof_len, 3);
        assert_eq!(distribution.claims.len(), 5);

        for claim in &distribution.claims {
            assert!(distribution.verify(claim), "claim for {} should verify", claim.claimant);
            assert!(claim.proof.len() <= distribution.max_proof_len);
        }
    }

    #[test]
    fn test_claim_lookup() {
        let distribution = compile_distribution("genesis", &entries(3)).unwrap();
        let claimant = Pubkey::new_from_array([2u8; 32]);

        let claim = distribution.claim_for(&claimant).unwrap();
        assert_eq!(claim.entitlement, 20);
        assert_eq!(claim.to_request().claimant, claimant);

        let stranger = Pubkey::new_from_array([9u8; 32]);
        assert!(matches!(
            distribution.claim_for(&stranger),
            Err(CompilerError::ClaimantNotFound(_))
        ));
    }

    #[test]
    fn test_compile_rejects_bad_whitelists() {
        assert!(matches!(
            compile_distribution("genesis", &[]),
            Err(CompilerError::MerkleTree(MerkleError::EmptyWhitelist))
        ));

        let mut duplicated = entries(2);
        duplicated.push(duplicated[0].clone());
        assert!(matches!(
            compile_distribution("genesis", &duplicated),
            Err(CompilerError::MerkleTree(MerkleError::DuplicateClaimant(_)))
        ));

        let overflowing = vec![
            WhitelistEntry::new(Pubkey::new_from_array([1u8; 32]), u64::MAX),
            WhitelistEntry::new(Pubkey::new_from_array([2u8; 32]), 1),
        ];
        assert!(matches!(
            compile_distribution("genesis", &overflowing),
            Err(CompilerError::EntitlementOverflow)
        ));

        assert!(matches!(
            compile_distribution(" ", &entries(1)),
            Err(CompilerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_artifact_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("distribution.json");
        let distribution = compile_distribution("genesis", &entries(4)).unwrap();

        distribution.save(&path).unwrap();
        let loaded = CompiledDistribution::load(&path).unwrap();

        assert_eq!(loaded, distribution);
    }

    #[test]
    fn test_artifact_version_mismatch_is_rejected() {
        let distribution = compile_distribution("genesis", &entries(2)).unwrap();
        let mut json: serde_json::Value =
            serde_json::from_str(&distribution.to_json().unwrap()).unwrap();
        json["encoding_version"] = serde_json::json!(LEAF_ENCODING_VERSION + 1);

        let result = CompiledDistribution::from_json(&json.to_string());
        assert!(matches!(
            result,
            Err(CompilerError::EncodingVersionMismatch { .. })
        ));
    }

    #[test]
    fn test_summary_row_matches_whitelist() {
        let whitelist = entries(3);
        let distribution = compile_distribution("genesis", &whitelist).unwrap();
        let rows: Vec<claimdrop_csvs::WhitelistRow> =
            whitelist.iter().map(claimdrop_csvs::WhitelistRow::from).collect();

        claimdrop_csvs::validate_summary_consistency(&rows, &distribution.summary_row())
            .unwrap();
    }
}
