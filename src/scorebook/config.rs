use crate::error::{Result, ScorebookError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
/// Longest terminal line kept, matching a 20-byte line buffer with its terminator.
const DEFAULT_INPUT_LIMIT: usize = 19;

/// Configuration for scorebook, stored as `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScorebookConfig {
    /// Bytes of each terminal line that are kept; the rest of the line is dropped
    #[serde(default = "default_input_limit")]
    pub input_limit: usize,

    /// Discard existing records when the data file is opened
    #[serde(default = "default_truncate_on_open")]
    pub truncate_on_open: bool,
}

fn default_input_limit() -> usize {
    DEFAULT_INPUT_LIMIT
}

fn default_truncate_on_open() -> bool {
    true
}

impl Default for ScorebookConfig {
    fn default() -> Self {
        Self {
            input_limit: DEFAULT_INPUT_LIMIT,
            truncate_on_open: true,
        }
    }
}

impl ScorebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ScorebookConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.input_limit == 0 {
            return Err(ScorebookError::Config(
                "input_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
