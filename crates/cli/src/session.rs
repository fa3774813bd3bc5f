//! Evaluation session
//!
//! A `Session` owns the named bindings a REPL accumulates. Bindings live
//! only in this explicit map, created empty when the session starts;
//! evaluating an unknown name is an error, never an implicit definition.

use crate::builtins::BuiltinError;
use crate::command::{Op, OpLine, ReplCommand, ReplLine};
use clap::Parser;
use dynseq_runtime::{
    ConfigError, Runtime, SeqError, Sequence, SequenceOps, Value, inspect, parse_literal,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Error reported by the front end
#[derive(Debug)]
pub enum CliError {
    Seq(SeqError),
    Builtin(BuiltinError),
    Config(ConfigError),
    /// Command words did not parse
    Usage(String),
    /// A name was used before `let` bound it
    Unbound(String),
    Readline(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Seq(e) => write!(f, "{}", e),
            CliError::Builtin(e) => write!(f, "{}", e),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Usage(msg) => write!(f, "{}", msg.trim_end()),
            CliError::Unbound(name) => write!(f, "unbound name '{}'", name),
            CliError::Readline(msg) => write!(f, "line editor: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SeqError> for CliError {
    fn from(e: SeqError) -> Self {
        CliError::Seq(e)
    }
}

impl From<BuiltinError> for CliError {
    fn from(e: BuiltinError) -> Self {
        CliError::Builtin(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::Usage(e.to_string())
    }
}

/// Result of evaluating an expression; `None` is absent
pub type Outcome = Option<Value>;

/// What a REPL line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Print this result
    Value(Outcome),
    /// A binding was created or changed
    Bound(String),
    /// Nothing to print (blank line)
    Nothing,
}

/// Format an outcome for display
///
/// Top-level strings print raw, everything else in inspect form, and
/// absent prints as `absent`.
pub fn display(outcome: &Outcome) -> String {
    match outcome {
        None => "absent".to_string(),
        Some(Value::String(s)) => s.to_string(),
        Some(other) => inspect(other),
    }
}

#[derive(Debug, Default)]
pub struct Session {
    runtime: Runtime,
    bindings: BTreeMap<String, Value>,
}

impl Session {
    pub fn new(runtime: Runtime) -> Self {
        Session {
            runtime,
            bindings: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        debug!(%name, ty = value.type_name(), "bind");
        self.bindings.insert(name, value);
    }

    /// Resolve an operand: a bound name, otherwise a JSON literal
    pub fn resolve(&self, operand: &str) -> Result<Value, CliError> {
        if let Some(value) = self.bindings.get(operand) {
            return Ok(value.clone());
        }
        if is_identifier(operand) && !matches!(operand, "true" | "false" | "null") {
            return Err(CliError::Unbound(operand.to_string()));
        }
        Ok(parse_literal(operand)?)
    }

    fn resolve_sequence(&self, operand: &str) -> Result<Arc<Sequence>, CliError> {
        match self.resolve(operand)? {
            Value::Sequence(seq) => Ok(seq),
            other => Err(SeqError::NotASequence(other.type_name().to_string()).into()),
        }
    }

    /// Evaluate `operand` followed by optional operation words
    pub fn eval_words(&self, operand: &str, words: &[String]) -> Result<Outcome, CliError> {
        if words.is_empty() {
            return Ok(Some(self.resolve(operand)?));
        }
        let op = OpLine::parse_words(words)?;
        self.eval(operand, &op)
    }

    /// Apply one operation to an operand
    pub fn eval(&self, operand: &str, op: &Op) -> Result<Outcome, CliError> {
        let seq = self.resolve_sequence(operand)?;
        debug!(?op, len = seq.len(), "eval");
        let outcome = match op {
            Op::At { index } => seq.at(*index).cloned(),
            Op::Concat { other } => {
                let other = self.resolve_sequence(other)?;
                Some(Value::from(self.runtime.concat(&seq, &other)?))
            }
            Op::Join { separator } => {
                let joined = match separator.strip_prefix('=') {
                    Some(operand) if !operand.is_empty() => {
                        seq.join_value(&self.resolve(operand)?)?
                    }
                    _ => seq.join(separator),
                };
                Some(Value::from(joined))
            }
            Op::Map { transform } => {
                let mapped = seq.try_map(|element, index| transform.apply(element, index))?;
                Some(Value::from(mapped))
            }
            Op::Find { predicate } => seq
                .find(|element, index| predicate.test(element, index))
                .cloned(),
            Op::FindIndex { predicate } => seq
                .find_index(|element, index| predicate.test(element, index))
                .map(|i| Value::Int(i as i64)),
            Op::Every { predicate } => Some(Value::Bool(
                seq.every(|element, index| predicate.test(element, index)),
            )),
            Op::Len => Some(Value::Int(seq.len() as i64)),
            Op::Inspect => Some(Value::from(inspect(&Value::Sequence(seq.clone())))),
            Op::Snapshot => Some(Value::from(seq.to_json()?)),
        };
        Ok(outcome)
    }

    /// Run a parsed REPL command
    pub fn execute(&mut self, command: ReplCommand) -> Result<LineOutcome, CliError> {
        match command {
            ReplCommand::Let { name, operand, op } => {
                let value = self
                    .eval_words(&operand, &op)?
                    .ok_or_else(|| CliError::Usage(format!("cannot bind '{}' to absent", name)))?;
                self.bind(name.clone(), value);
                Ok(LineOutcome::Bound(name))
            }
            ReplCommand::Set { name, index, value } => {
                let value = self.resolve(&value)?;
                self.with_sequence_mut(&name, |seq| seq.set(index, value))?;
                Ok(LineOutcome::Bound(name))
            }
            ReplCommand::Push { name, value } => {
                let value = self.resolve(&value)?;
                self.with_sequence_mut(&name, |seq| seq.push(value))?;
                Ok(LineOutcome::Bound(name))
            }
            ReplCommand::Eval { operand, op } => {
                Ok(LineOutcome::Value(self.eval_words(&operand, &op)?))
            }
        }
    }

    /// Split and run one REPL line
    ///
    /// Lines that do not start with a command word are evaluated, so
    /// `a at -1` is shorthand for `eval a at -1`.
    pub fn execute_line(&mut self, line: &str) -> Result<LineOutcome, CliError> {
        let mut words = shlex::split(line)
            .ok_or_else(|| CliError::Usage("unbalanced quotes".to_string()))?;
        let Some(first) = words.first() else {
            return Ok(LineOutcome::Nothing);
        };
        if !matches!(first.as_str(), "let" | "set" | "push" | "eval") {
            words.insert(0, "eval".to_string());
        }
        let line = ReplLine::try_parse_from(words)?;
        self.execute(line.command)
    }

    /// Mutate a bound sequence; the binding is replaced, so values that
    /// were copied out of it earlier keep their old contents
    fn with_sequence_mut(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Sequence) -> Result<(), SeqError>,
    ) -> Result<(), CliError> {
        let value = self
            .bindings
            .get_mut(name)
            .ok_or_else(|| CliError::Unbound(name.to_string()))?;
        match value {
            Value::Sequence(seq) => {
                f(Arc::make_mut(seq))?;
                Ok(())
            }
            other => Err(SeqError::NotASequence(other.type_name().to_string()).into()),
        }
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert!(is_identifier("arr"));
        assert!(is_identifier("my_list-2"));
        assert!(!is_identifier("[1]"));
        assert!(!is_identifier("\"x\""));
        assert!(!is_identifier("12"));
    }

    #[test]
    fn test_display() {
        assert_eq!(display(&None), "absent");
        assert_eq!(display(&Some(Value::from("1-2"))), "1-2");
        assert_eq!(display(&Some(Value::Int(3))), "3");
    }

    #[test]
    fn test_unbound_name() {
        let session = Session::default();
        assert!(matches!(session.resolve("arr"), Err(CliError::Unbound(_))));
        assert_eq!(session.resolve("true").unwrap(), Value::Bool(true));
    }
}
