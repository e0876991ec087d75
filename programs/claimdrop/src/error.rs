use solana_pubkey::Pubkey;
use thiserror::Error;

use crate::ledger::LedgerError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("Invalid Merkle proof provided.")]
    InvalidProof,

    #[error("Tokens for this entitlement have already been claimed.")]
    AlreadyClaimed,

    #[error("The vault could not deliver the tokens: {0}")]
    TransferFailed(#[from] LedgerError),

    #[error("Unauthorized access or mismatched authority.")]
    Unauthorized,

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("No merkle root has been published for this distributor.")]
    NoActiveRoot,

    #[error("Recipient {0} is not whitelisted.")]
    NotWhitelisted(Pubkey),

    #[error("A calculation resulted in a numeric overflow.")]
    NumericOverflow,

    #[error("The distributor is not currently active.")]
    DistributorPaused,

    #[error("Distributor is active.")]
    DistributorIsActive,
}

pub type Result<T> = std::result::Result<T, ErrorCode>;
