//! dynseq CLI: command-line front end for the sequence runtime
//!
//! - `builtins`: Named transforms and predicates for map/find/every
//! - `command`: clap grammar for operations and REPL commands
//! - `session`: Explicit binding environment and evaluation
//! - `repl`: rustyline loop over a session
//! - `demo`: Canonical walkthrough of every operation

pub mod builtins;
pub mod command;
pub mod demo;
pub mod repl;
pub mod session;

pub use session::{CliError, LineOutcome, Outcome, Session, display};
