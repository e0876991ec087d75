use solana_pubkey::Pubkey;
use tracing::info;

use crate::{
    error::{ErrorCode, Result},
    events::DistributorEvent,
    ledger::Ledger,
    Distributor,
};

/// Push-based alternative to merkle claims: the admin sends `amounts[i]` to
/// `recipients[i]` for pre-whitelisted recipients. All transfers happen or none do.
///
/// Returns the total amount moved out of the vault.
pub fn handle_batch_distribute<L: Ledger>(
    distributor: &mut Distributor<L>,
    caller: &Pubkey,
    recipients: &[Pubkey],
    amounts: &[u64],
) -> Result<u64> {
    distributor.require_admin(caller)?;

    if recipients.len() != amounts.len() {
        return Err(ErrorCode::MalformedInput(format!(
            "mismatched arrays: {} recipients, {} amounts",
            recipients.len(),
            amounts.len()
        )));
    }
    if recipients.is_empty() {
        return Err(ErrorCode::MalformedInput(
            "batch contains no recipients".to_string(),
        ));
    }

    let mut total_amount = 0u64;
    for (recipient, amount) in recipients.iter().zip(amounts) {
        if !distributor.whitelist.contains(recipient) {
            return Err(ErrorCode::NotWhitelisted(*recipient));
        }
        if *amount == 0 {
            return Err(ErrorCode::MalformedInput(format!(
                "zero amount for recipient {recipient}"
            )));
        }
        total_amount = total_amount
            .checked_add(*amount)
            .ok_or(ErrorCode::NumericOverflow)?;
    }

    let transfers: Vec<(Pubkey, u64)> = recipients
        .iter()
        .copied()
        .zip(amounts.iter().copied())
        .collect();
    let vault = distributor.vault;
    distributor.ledger.transfer_batch(&vault, &transfers)?;

    distributor.emit(DistributorEvent::BatchDistributed {
        recipient_count: recipients.len(),
        total_amount,
    });

    info!(
        recipient_count = recipients.len(),
        total_amount, "batch distribution completed"
    );
    Ok(total_amount)
}
