use solana_pubkey::Pubkey;
use tracing::info;

use crate::{
    error::{ErrorCode, Result},
    events::DistributorEvent,
    ledger::Ledger,
    Distributor,
};

/// Sweep the remaining vault balance to `destination`. Only allowed while paused so
/// no claim can be racing for the same funds.
pub fn handle_reclaim_tokens<L: Ledger>(
    distributor: &mut Distributor<L>,
    caller: &Pubkey,
    destination: &Pubkey,
) -> Result<u64> {
    distributor.require_admin(caller)?;

    if distributor.is_active {
        return Err(ErrorCode::DistributorIsActive);
    }

    let vault = distributor.vault;
    let amount = distributor.ledger.balance_of(&vault);
    if amount > 0 {
        distributor.ledger.transfer(&vault, destination, amount)?;
    }
    distributor.emit(DistributorEvent::TokensReclaimed {
        destination: *destination,
        amount,
    });

    info!(%destination, amount, "vault balance reclaimed");
    Ok(amount)
}
