pub mod claim_leaf;
pub mod constants;
pub mod distributor;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod proofs;
pub mod state;

pub use claim_leaf::*;
pub use constants::{FIRST_EPOCH, INTERNAL_PREFIX, LEAF_ENCODING_VERSION, LEAF_PREFIX};
pub use distributor::Distributor;
pub use error::{ErrorCode, Result};
pub use events::DistributorEvent;
pub use ledger::{InMemoryLedger, Ledger, LedgerError, LedgerResult};
pub use proofs::*;
pub use state::*;

pub use solana_pubkey::Pubkey;
