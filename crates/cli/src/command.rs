//! Operation grammar shared by `dynseq eval` and the REPL
//!
//! An expression is an operand (a binding name or a JSON literal) followed
//! by at most one operation. The operation words are parsed by their own
//! clap command so that the same grammar serves both the one-shot command
//! line and REPL lines split with shlex.

use crate::builtins::{Predicate, Transform};
use clap::{Parser, Subcommand};

/// One operation applied to a sequence operand
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Op {
    /// Element at an index; negative indices count from the end
    At {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// New sequence with another operand appended
    Concat {
        /// Binding name or JSON array literal
        other: String,
    },
    /// Render the elements joined by a separator
    Join {
        /// Separator text, or `=name` to use a bound value
        #[arg(allow_hyphen_values = true)]
        separator: String,
    },
    /// New sequence with every index transformed
    Map {
        #[arg(value_enum)]
        transform: Transform,
    },
    /// First element matching a predicate
    Find {
        #[arg(value_enum)]
        predicate: Predicate,
    },
    /// Index of the first element matching a predicate
    FindIndex {
        #[arg(value_enum)]
        predicate: Predicate,
    },
    /// Whether every element matches a predicate
    Every {
        #[arg(value_enum)]
        predicate: Predicate,
    },
    /// Length (one past the highest assigned index)
    Len,
    /// Literal-like debug form
    Inspect,
    /// JSON snapshot that keeps holes
    Snapshot,
}

/// Parser for the words after the operand
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
pub struct OpLine {
    #[command(subcommand)]
    pub op: Op,
}

impl OpLine {
    /// Parse operation words, e.g. `["join", "-"]`
    pub fn parse_words<I, T>(words: I) -> Result<Op, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        OpLine::try_parse_from(words).map(|line| line.op)
    }
}

/// Commands available inside the REPL
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ReplCommand {
    /// Bind the result of an expression to a name
    Let {
        name: String,
        operand: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        op: Vec<String>,
    },
    /// Assign a literal at an index of a bound sequence
    Set {
        name: String,
        index: usize,
        value: String,
    },
    /// Append a literal to a bound sequence
    Push { name: String, value: String },
    /// Evaluate an expression and print the result
    Eval {
        operand: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        op: Vec<String>,
    },
}
