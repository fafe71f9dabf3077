// src/config/solver_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Largest prime modulus for which the inverse table is precomputed.
    /// Above it inverses come from the extended Euclidean algorithm.
    pub inverse_table_limit: u64,

    /// Reject composite moduli up front instead of failing on the first
    /// non-invertible pivot
    pub require_prime_modulus: bool,

    /// Number of threads for batch solving
    pub threads: Option<usize>,

    /// Report output
    pub report: ReportConfig,
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Pretty-print JSON reports (default: true)
    pub pretty: bool,

    /// Include the reduced matrix in reports (default: false)
    pub include_matrix: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            log_level: "info".to_string(),
            inverse_table_limit: 1 << 20,
            require_prime_modulus: false,
            threads: None, // Use Rayon's default
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            pretty: true,
            include_matrix: false,
        }
    }
}

impl SolverConfig {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("inverse_table_limit", 1i64 << 20)?
            .set_default("require_prime_modulus", false)?
            .set_default("report.pretty", true)?
            .set_default("report.include_matrix", false)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: MODSOLVE_, nested keys use __)
        let builder = builder.add_source(
            Environment::with_prefix("MODSOLVE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("modsolve.toml").exists() {
            builder = builder.add_source(File::with_name("modsolve.toml"));
        } else if Path::new("modsolve.yaml").exists() {
            builder = builder.add_source(File::with_name("modsolve.yaml"));
        }

        Self::build(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::build(builder)
    }
}
