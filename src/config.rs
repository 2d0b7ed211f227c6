//! Server configuration
//!
//! Values come from an optional TOML file; command line flags override them.
//!
//! ```toml
//! submit_delay_ms = 1000
//! log_level = "debug"
//! seed_file = "todos.toml"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TodoConfig {
    /// Pause between a valid submit and the commit, in milliseconds
    pub submit_delay_ms: u64,
    /// Log level: trace, debug, info, warn or error
    pub log_level: String,
    /// TOML file with the initial todos; the built-in samples when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 0,
            log_level: "info".to_string(),
            seed_file: None,
        }
    }
}

impl TodoConfig {
    /// Read a config file
    ///
    /// Relative `seed_file` paths are resolved against the config file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let mut config: TodoConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;

        if let Some(seed) = config.seed_file.take() {
            config.seed_file = Some(match path.parent() {
                Some(dir) if seed.is_relative() => dir.join(seed),
                _ => seed,
            });
        }
        Ok(config)
    }

    /// Read `path` if given, otherwise start from the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line values on top of the file values
    pub fn apply_overrides(
        &mut self,
        seed_file: Option<PathBuf>,
        submit_delay_ms: Option<u64>,
        log_level: Option<String>,
    ) {
        if let Some(seed) = seed_file {
            self.seed_file = Some(seed);
        }
        if let Some(delay) = submit_delay_ms {
            self.submit_delay_ms = delay;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
