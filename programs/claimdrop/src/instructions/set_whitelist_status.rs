use solana_pubkey::Pubkey;
use tracing::info;

use crate::{
    error::{ErrorCode, Result},
    events::DistributorEvent,
    ledger::Ledger,
    Distributor,
};

pub fn handle_set_whitelist_status<L: Ledger>(
    distributor: &mut Distributor<L>,
    caller: &Pubkey,
    addresses: &[Pubkey],
    whitelisted: bool,
) -> Result<()> {
    distributor.require_admin(caller)?;

    if addresses.is_empty() {
        return Err(ErrorCode::MalformedInput(
            "no addresses provided".to_string(),
        ));
    }

    for address in addresses {
        if whitelisted {
            distributor.whitelist.insert(*address);
        } else {
            distributor.whitelist.remove(address);
        }
    }
    distributor.emit(DistributorEvent::WhitelistUpdated {
        addresses: addresses.to_vec(),
        whitelisted,
    });

    info!(count = addresses.len(), whitelisted, "whitelist updated");
    Ok(())
}
