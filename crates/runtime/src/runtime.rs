//! Runtime handle
//!
//! `Runtime` pairs the stateless operations with a loaded configuration.
//! Only `concat` consults the configuration; the remaining operations are
//! reached through `SequenceOps` directly.

use crate::config::RuntimeConfig;
use crate::seq_ops::{ConcatPolicy, SequenceOps};
use dynseq_core::{SeqError, Sequence};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Runtime {
    config: RuntimeConfig,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        if let ConcatPolicy::LegacyGap { gap } = config.concat {
            warn!(gap, "legacy concat policy selected, appended elements skip past the end");
        }
        debug!(?config, "runtime configured");
        Runtime { config }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Concatenate according to the configured policy
    pub fn concat(&self, first: &Sequence, second: &Sequence) -> Result<Sequence, SeqError> {
        first.concat_with(second, self.config.concat)
    }
}
