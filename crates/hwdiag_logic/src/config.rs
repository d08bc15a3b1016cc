//! Configuration for the hwdiag front end.
//!
//! Values come from [`Config::default`], then environment variables, then
//! command-line flags (applied by the binary).
//!
//! # Examples
//!
//! ```
//! # use hwdiag_logic::Config;
//! let mut config = Config::default();
//! config.log_level = "debug".to_string();
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::Matcher;
use crate::error::{Error, Result};
use crate::exclusion::ExclusionTable;

/// Environment variable overriding [`Config::knowledge_base`].
pub const ENV_KNOWLEDGE_BASE: &str = "HWDIAG_KNOWLEDGE_BASE";

/// Environment variable overriding [`Config::log_level`].
pub const ENV_LOG_LEVEL: &str = "HWDIAG_LOG_LEVEL";

/// Environment variable overriding [`Config::builtin_exclusions`] (`0`/`false` disables).
pub const ENV_BUILTIN_EXCLUSIONS: &str = "HWDIAG_BUILTIN_EXCLUSIONS";

/// Default knowledge-base location: the hardware knowledge base bundled with the crate.
pub const DEFAULT_KNOWLEDGE_BASE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/knowledge_base.json");

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the knowledge-base JSON document.
    pub knowledge_base: PathBuf,
    /// Log level used when `RUST_LOG` is unset.
    ///
    /// A bare level (`off`, `error`, `warn`, `info`, `debug`, `trace`); per-module
    /// directives belong in `RUST_LOG`.
    pub log_level: String,
    /// Whether the matcher checks the built-in exclusion table.
    pub builtin_exclusions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            knowledge_base: PathBuf::from(DEFAULT_KNOWLEDGE_BASE),
            log_level: "warn".to_string(),
            builtin_exclusions: true,
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from defaults overridden by `lookup`.
    ///
    /// Unparseable values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_KNOWLEDGE_BASE).filter(|p| !p.is_empty()) {
            config.knowledge_base = PathBuf::from(path);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level.to_ascii_lowercase();
        }

        if let Some(flag) = lookup(ENV_BUILTIN_EXCLUSIONS) {
            match flag.to_ascii_lowercase().as_str() {
                "0" | "false" | "no" | "off" => config.builtin_exclusions = false,
                "1" | "true" | "yes" | "on" => config.builtin_exclusions = true,
                _ => {}
            }
        }

        config
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.knowledge_base.as_os_str().is_empty() {
            return Err(Error::Config("knowledge base path is empty".to_string()));
        }
        Ok(())
    }

    /// Creates the matcher this configuration describes.
    pub fn matcher(&self) -> Matcher {
        if self.builtin_exclusions {
            Matcher::new()
        } else {
            Matcher::with_exclusions(ExclusionTable::new())
        }
    }
}
