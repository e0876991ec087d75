use solana_pubkey::Pubkey;
use tracing::info;

use crate::{error::Result, events::DistributorEvent, ledger::Ledger, Distributor};

pub fn handle_set_active_status<L: Ledger>(
    distributor: &mut Distributor<L>,
    caller: &Pubkey,
    is_active: bool,
) -> Result<()> {
    distributor.require_admin(caller)?;

    distributor.is_active = is_active;
    distributor.emit(DistributorEvent::ActiveStatusChanged { is_active });

    info!(is_active, "distributor status changed");
    Ok(())
}
