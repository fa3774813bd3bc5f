//! Canonical walkthrough of the sequence operations
//!
//! Builds `[1, 2, 3, 4, 5]` and exercises each operation once, producing
//! `label: value` lines. The concat step honors the runtime's configured
//! policy, so the same walkthrough shows the legacy gap when it is selected.
//! Errors from concat or the transform end the walkthrough.

use crate::builtins::{Predicate, Transform};
use crate::session::{CliError, display};
use dynseq_runtime::{Runtime, Sequence, SequenceOps, Value};
use tracing::info;

pub fn run(runtime: &Runtime) -> Result<Vec<String>, CliError> {
    let arr: Sequence = (1..=5).map(Value::Int).collect();
    let mut lines = Vec::new();
    let mut log = |label: &str, value: String| lines.push(format!("{}: {}", label, value));

    log("arr[0]", display(&arr.get(0).cloned()));
    log("arr[100]", display(&arr.get(100).cloned()));
    log("arr.length", arr.len().to_string());
    log("last", display(&arr.at(-1).cloned()));

    let tail: Sequence = (6..=8).map(Value::Int).collect();
    let concat = runtime.concat(&arr, &tail)?;
    log("concat[6]", display(&concat.get(6).cloned()));
    log("concat.length", concat.len().to_string());

    let every = arr.every(|v, _| v.and_then(Value::as_number).is_some_and(|n| n < 10.0));
    log("every", every.to_string());

    log("joined", arr.join("/"));

    let mapped = arr.try_map(|v, i| Transform::Double.apply(v, i))?;
    log("mapped[0]", display(&mapped.get(0).cloned()));

    let found = arr.find(|v, i| Predicate::Even.test(v, i));
    log("found", display(&found.cloned()));

    info!(lines = lines.len(), "demo complete");
    Ok(lines)
}
