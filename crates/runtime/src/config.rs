//! Runtime configuration
//!
//! Loaded from TOML. Every field is optional; an empty file yields the
//! default configuration.
//!
//! # Example
//!
//! ```toml
//! log_filter = "dynseq=debug"
//!
//! [concat]
//! policy = "legacy-gap"
//! gap = 2
//! ```
//!
//! ```rust
//! use dynseq_runtime::{ConcatPolicy, RuntimeConfig};
//!
//! let config = RuntimeConfig::new()
//!     .with_concat_policy(ConcatPolicy::legacy())
//!     .with_log_filter("dynseq=debug");
//! assert_eq!(config.concat, ConcatPolicy::LegacyGap { gap: 2 });
//! ```

use crate::seq_ops::ConcatPolicy;
use dynseq_core::MAX_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Error loading a configuration file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The contents are not a valid configuration
    Parse(Box<toml::de::Error>),
    /// Well-formed, but a value is out of range
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e.as_ref()),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(Box::new(e))
    }
}

/// Configuration for the sequence runtime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Placement of appended elements in `concat`
    pub concat: ConcatPolicy,

    /// Extra tracing directive for front ends that install a subscriber
    pub log_filter: Option<String>,
}

impl RuntimeConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        RuntimeConfig::default()
    }

    pub fn with_concat_policy(mut self, policy: ConcatPolicy) -> Self {
        self.concat = policy;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges serde cannot express
    ///
    /// A legacy gap must leave room for at least one appended element
    /// below `MAX_LENGTH`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.concat {
            ConcatPolicy::LegacyGap { gap } if gap >= MAX_LENGTH => Err(ConfigError::Invalid(
                format!("concat gap {} exceeds the maximum of {}", gap, MAX_LENGTH - 1),
            )),
            _ => Ok(()),
        }
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = RuntimeConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.concat, ConcatPolicy::Contiguous);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_legacy_gap_defaults_to_two() {
        let config = RuntimeConfig::from_toml_str("[concat]\npolicy = \"legacy-gap\"\n").unwrap();
        assert_eq!(config.concat, ConcatPolicy::LegacyGap { gap: 2 });
    }

    #[test]
    fn test_explicit_gap_and_filter() {
        let text = r#"
log_filter = "dynseq=trace"

[concat]
policy = "legacy-gap"
gap = 5
"#;
        let config = RuntimeConfig::from_toml_str(text).unwrap();
        assert_eq!(config.concat, ConcatPolicy::LegacyGap { gap: 5 });
        assert_eq!(config.log_filter.as_deref(), Some("dynseq=trace"));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = RuntimeConfig::from_toml_str("[concat]\npolicy = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RuntimeConfig::from_toml_str("colour = \"blue\"\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn test_gap_past_max_length_rejected() {
        let text = "[concat]\npolicy = \"legacy-gap\"\ngap = 9223372036854775807\n";
        let err = RuntimeConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("exceeds the maximum"));

        let largest = format!("[concat]\npolicy = \"legacy-gap\"\ngap = {}\n", MAX_LENGTH - 1);
        let config = RuntimeConfig::from_toml_str(&largest).unwrap();
        assert_eq!(config.concat, ConcatPolicy::LegacyGap { gap: MAX_LENGTH - 1 });
    }

    #[test]
    fn test_builder() {
        let config = RuntimeConfig::new()
            .with_concat_policy(ConcatPolicy::LegacyGap { gap: 1 })
            .with_log_filter("dynseq=warn");
        assert_eq!(config.concat, ConcatPolicy::LegacyGap { gap: 1 });
        assert_eq!(config.log_filter.as_deref(), Some("dynseq=warn"));
    }
}
