mod compiler_error;
mod distribution;
mod whitelist;

pub use compiler_error::{CompilerError, CompilerResult};
pub use distribution::*;
pub use claimdrop_csvs::decode_hash;
pub use whitelist::*;

pub use claimdrop::{
    ClaimLeaf, ClaimReceipt, ClaimRequest, DistributionRoot, Pubkey, RootUpdateKind,
    LEAF_ENCODING_VERSION,
};
