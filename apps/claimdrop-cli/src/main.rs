use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod logging;

use config::DistributionOverrides;
use error::CliResult;

#[derive(Parser)]
#[command(name = "claimdrop")]
#[command(about = "Claimdrop CLI - Merkle whitelist distributions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random whitelist for testing
    GenerateFixtures {
        /// Number of claimants to generate
        #[arg(short, long)]
        count: usize,

        /// Seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output file path (.csv or .json)
        #[arg(short, long, default_value = "whitelist.csv")]
        output: PathBuf,

        /// Minimum entitlement per claimant
        #[arg(long, default_value = "1")]
        min_amount: u64,

        /// Maximum entitlement per claimant
        #[arg(long, default_value = "1000")]
        max_amount: u64,
    },

    /// Build the merkle tree and write distribution.json
    CompileDistribution {
        /// Distribution configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Distribution name (overrides config)
        #[arg(short, long)]
        name: Option<String>,

        /// Whitelist file, CSV or JSON (overrides config)
        #[arg(short, long)]
        whitelist: Option<PathBuf>,

        /// Output file for the compiled distribution (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Summary CSV output (overrides config)
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Look up a claimant's entitlement and proof
    CheckEligibility {
        /// Compiled distribution file
        #[arg(short, long, default_value = "distribution.json")]
        distribution: PathBuf,

        /// Claimant pubkey (base58)
        claimant: String,
    },

    /// Verify a proof against a root without any distribution file
    VerifyProof {
        /// Claimant pubkey (base58)
        #[arg(long)]
        claimant: String,

        /// Claimed entitlement
        #[arg(long)]
        entitlement: u64,

        /// Merkle root (hex)
        #[arg(long)]
        root: String,

        /// Proof sibling hashes (hex), comma separated, leaf to root
        #[arg(long, value_delimiter = ',')]
        proof: Vec<String>,
    },

    /// Run every compiled claim through an in-memory distributor
    SimulateClaims {
        /// Compiled distribution file
        #[arg(short, long, default_value = "distribution.json")]
        distribution: PathBuf,

        /// Vault funding (defaults to the total entitlement)
        #[arg(long)]
        fund: Option<u64>,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::try_init(logging::LogLevel::from_verbosity(cli.verbose)) {
        eprintln!("⚠️  Logging disabled: {e}");
    }

    match cli.command {
        Commands::GenerateFixtures {
            count,
            seed,
            output,
            min_amount,
            max_amount,
        } => commands::generate_fixtures::execute(count, seed, output, min_amount, max_amount),

        Commands::CompileDistribution {
            config,
            name,
            whitelist,
            output,
            summary,
        } => commands::compile_distribution::execute(
            config,
            DistributionOverrides {
                distribution_name: name,
                whitelist_file: whitelist,
                output_file: output,
                summary_file: summary,
            },
        ),

        Commands::CheckEligibility {
            distribution,
            claimant,
        } => commands::check_eligibility::execute(distribution, claimant),

        Commands::VerifyProof {
            claimant,
            entitlement,
            root,
            proof,
        } => commands::verify_proof::execute(claimant, entitlement, root, proof),

        Commands::SimulateClaims { distribution, fund } => {
            commands::simulate_claims::execute(distribution, fund)
        }
    }
}
