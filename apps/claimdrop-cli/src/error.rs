use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] claimdrop_csvs::CsvError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Compilation failed: {0}")]
    Compiler(#[from] claimdrop_sdk::CompilerError),

    #[error("Distributor rejected the operation: {0}")]
    Distributor(#[from] claimdrop::ErrorCode),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Invalid pubkey: {0}")]
    InvalidPubkey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Command execution failed: {0}")]
    CommandExecution(String),
}
