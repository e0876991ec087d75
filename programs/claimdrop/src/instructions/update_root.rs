use solana_pubkey::Pubkey;
use tracing::info;

use crate::{
    constants::FIRST_EPOCH,
    error::{ErrorCode, Result},
    events::DistributorEvent,
    ledger::Ledger,
    state::{DistributionRoot, RootUpdateKind},
    Distributor,
};

pub fn handle_update_root<L: Ledger>(
    distributor: &mut Distributor<L>,
    caller: &Pubkey,
    merkle_root: [u8; 32],
    leaf_count: u64,
    kind: RootUpdateKind,
) -> Result<DistributionRoot> {
    distributor.require_admin(caller)?;

    if leaf_count == 0 {
        return Err(ErrorCode::MalformedInput(
            "a merkle root must commit to at least one leaf".to_string(),
        ));
    }

    let epoch = match (distributor.active_root, kind) {
        (None, _) => FIRST_EPOCH,
        (Some(current), RootUpdateKind::NewEpoch) => current
            .epoch
            .checked_add(1)
            .ok_or(ErrorCode::NumericOverflow)?,
        (Some(current), RootUpdateKind::Correction) => current.epoch,
    };
    let new_epoch = distributor.active_root.map(|r| r.epoch) != Some(epoch);

    let root = DistributionRoot {
        epoch,
        merkle_root,
        leaf_count,
        published_at_timestamp: chrono::Utc::now().timestamp(),
    };
    distributor.active_root = Some(root);
    distributor.emit(DistributorEvent::RootUpdated {
        epoch,
        merkle_root,
        leaf_count,
        new_epoch,
    });

    info!(
        epoch,
        leaf_count,
        ?kind,
        merkle_root = %hex::encode(merkle_root),
        "merkle root published"
    );
    Ok(root)
}
