use claimdrop::Pubkey;

/// Errors that can occur while reading whitelists and compiling distributions
#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    #[error("CSV error: {0}")]
    Csv(#[from] claimdrop_csvs::CsvError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Merkle tree generation failed: {0}")]
    MerkleTree(#[from] claimdrop_merkle::MerkleError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported whitelist format: {0}")]
    UnsupportedWhitelistFormat(String),

    #[error("Leaf encoding version mismatch: expected {expected}, found {found}")]
    EncodingVersionMismatch { expected: u8, found: u8 },

    #[error("Claimant {0} is not part of this distribution")]
    ClaimantNotFound(Pubkey),

    #[error("Total entitlement overflows u64")]
    EntitlementOverflow,
}

pub type CompilerResult<T> = Result<T, CompilerError>;
