//! Engine configuration.
//!
//! Only operational knobs live here. The scoring thresholds are fixed
//! constants in [`crate::engine`] and cannot be configured.
//!
//! ## File Format
//!
//! ```toml
//! default_limit = 10
//! parallel = true
//! parallel_threshold = 256
//! log_level = "info"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning for [`MatchingEngine`](crate::engine::MatchingEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Result limit used by `find_matches`
    pub default_limit: usize,

    /// Allow scoring candidates on the rayon pool (needs the `parallel`
    /// feature)
    pub parallel: bool,

    /// Minimum number of candidates before the parallel path is taken
    pub parallel_threshold: usize,

    /// Default log filter for the binary; `RUST_LOG` overrides it
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            parallel: true,
            parallel_threshold: 256,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            default_limit = config.default_limit,
            parallel = config.parallel,
            parallel_threshold = config.parallel_threshold,
            "engine_config_loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Invalid(
                "default_limit must be greater than zero".into(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(ConfigError::Invalid(
                "parallel_threshold must be greater than zero".into(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        Ok(())
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Force sequential scoring
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel = true;
        self.parallel_threshold = threshold;
        self
    }
}
