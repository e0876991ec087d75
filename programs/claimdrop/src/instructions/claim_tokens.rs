use solana_pubkey::Pubkey;
use tracing::{debug, info};

use crate::{
    error::{ErrorCode, Result},
    events::DistributorEvent,
    ledger::Ledger,
    proofs::{max_proof_len, verify_claim},
    state::{ClaimReceipt, ClaimRequest, DistributionRoot},
    Distributor,
};

pub fn handle_claim_tokens<L: Ledger>(
    distributor: &mut Distributor<L>,
    caller: &Pubkey,
    request: ClaimRequest,
) -> Result<ClaimReceipt> {
    let ClaimRequest {
        claimant,
        entitlement,
        proof,
    } = request;

    let root = validate_claim(distributor, caller, &claimant, entitlement, &proof)?;
    let receipt_key = (root.epoch, claimant);

    // 3. Perform the transfer; on failure nothing has been recorded, so the claim stays retryable
    let vault = distributor.vault;
    distributor
        .ledger
        .transfer(&vault, &claimant, entitlement)?;

    // 4. Update state
    let receipt = ClaimReceipt {
        claimant,
        epoch: root.epoch,
        merkle_root: root.merkle_root,
        amount: entitlement,
        claimed_at_timestamp: chrono::Utc::now().timestamp(),
    };
    distributor.claim_receipts.insert(receipt_key, receipt);
    distributor.emit(DistributorEvent::Claimed {
        epoch: root.epoch,
        claimant,
        amount: entitlement,
    });

    info!(%claimant, amount = entitlement, epoch = root.epoch, "claim processed");
    Ok(receipt)
}

/// Every check a claim must pass before value moves. `Distributor::can_claim` runs the
/// same checks, so a positive pre-check is never followed by a rejection here.
pub(crate) fn validate_claim<L: Ledger>(
    distributor: &Distributor<L>,
    caller: &Pubkey,
    claimant: &Pubkey,
    entitlement: u64,
    proof: &[[u8; 32]],
) -> Result<DistributionRoot> {
    // 0. Basic argument validation
    if !distributor.is_active {
        return Err(ErrorCode::DistributorPaused);
    }
    let root = distributor.active_root.ok_or(ErrorCode::NoActiveRoot)?;

    if caller != claimant {
        return Err(ErrorCode::Unauthorized);
    }
    if entitlement == 0 {
        return Err(ErrorCode::MalformedInput(
            "entitlement must be greater than zero".to_string(),
        ));
    }

    let max_len = max_proof_len(root.leaf_count);
    if proof.is_empty() && root.leaf_count > 1 {
        return Err(ErrorCode::MalformedInput(format!(
            "empty proof against a root with {} leaves",
            root.leaf_count
        )));
    }
    if proof.len() > max_len {
        return Err(ErrorCode::MalformedInput(format!(
            "proof has {} siblings, at most {} expected for {} leaves",
            proof.len(),
            max_len,
            root.leaf_count
        )));
    }

    // 1. Verify the Merkle proof against the active root
    if !verify_claim(claimant, entitlement, proof, &root.merkle_root) {
        return Err(ErrorCode::InvalidProof);
    }
    debug!(%claimant, epoch = root.epoch, "merkle proof verified");

    // 2. Check if already claimed in this epoch
    if distributor
        .claim_receipts
        .contains_key(&(root.epoch, *claimant))
    {
        return Err(ErrorCode::AlreadyClaimed);
    }

    Ok(root)
}
