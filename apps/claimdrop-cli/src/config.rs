use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Distribution configuration file structure
///
/// ```yaml
/// distribution_name: genesis
/// whitelist_file: whitelist.csv
/// output_file: distribution.json
/// summary_file: summary.csv
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistributionConfig {
    /// Human-readable distribution name (for organization)
    pub distribution_name: String,

    /// Path to whitelist file (CSV or JSON)
    pub whitelist_file: PathBuf,

    /// Where the compiled distribution is written
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Optional summary CSV with root, leaf count and total
    #[serde(default)]
    pub summary_file: Option<PathBuf>,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct DistributionOverrides {
    pub distribution_name: Option<String>,
    pub whitelist_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub summary_file: Option<PathBuf>,
}

impl DistributionConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Merge an optional config file with command-line overrides.
    ///
    /// Relative paths in a config file resolve against the file's directory.
    pub fn resolve(config_path: Option<&Path>, overrides: DistributionOverrides) -> CliResult<Self> {
        let base = match config_path {
            Some(path) => {
                let mut config = Self::load(path)?;
                if let Some(dir) = path.parent() {
                    config.whitelist_file = dir.join(&config.whitelist_file);
                    config.output_file = dir.join(&config.output_file);
                    config.summary_file = config.summary_file.map(|f| dir.join(f));
                }
                Some(config)
            }
            None => None,
        };

        let distribution_name = overrides
            .distribution_name
            .or_else(|| base.as_ref().map(|c| c.distribution_name.clone()))
            .ok_or_else(|| {
                CliError::InvalidConfig("distribution name is required (--name)".to_string())
            })?;
        let whitelist_file = overrides
            .whitelist_file
            .or_else(|| base.as_ref().map(|c| c.whitelist_file.clone()))
            .ok_or_else(|| {
                CliError::InvalidConfig("whitelist file is required (--whitelist)".to_string())
            })?;
        let output_file = overrides
            .output_file
            .or_else(|| base.as_ref().map(|c| c.output_file.clone()))
            .unwrap_or_else(default_output_file);
        let summary_file = overrides
            .summary_file
            .or_else(|| base.and_then(|c| c.summary_file));

        Ok(Self {
            distribution_name,
            whitelist_file,
            output_file,
            summary_file,
        })
    }
}

fn default_output_file() -> PathBuf {
    PathBuf::from("distribution.json")
}
