//! dynseq Runtime: operations over dynamic sequences
//!
//! Key design principles:
//! - Stateless: every operation is a pure function of its inputs and callbacks
//! - Copying: `concat` and `map` always build a new, independently owned sequence
//! - Total reads: out-of-range and unset lookups resolve to absent, never an error
//! - Callback errors propagate unmodified through the `try_*` variants
//!
//! # Modules
//!
//! - `seq_ops`: The `SequenceOps` trait (at, concat, join, map, find, every)
//! - `config`: TOML runtime configuration (concat placement policy, log filter)
//! - `runtime`: `Runtime`, a configured handle over the operations

pub mod config;
pub mod runtime;
pub mod seq_ops;

pub use config::{ConfigError, RuntimeConfig};
pub use runtime::Runtime;
pub use seq_ops::{ConcatPolicy, LEGACY_CONCAT_GAP, SequenceOps};

// Re-export the data model so front ends need a single dependency
pub use dynseq_core::{SeqError, Sequence, Slot, Value, inspect, parse_literal, render_value};
