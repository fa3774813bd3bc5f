//! Interactive loop
//!
//! Reads lines with rustyline and hands them to a `Session`. Errors are
//! printed and the loop continues; only end of input or `:quit` ends it.

use crate::session::{CliError, LineOutcome, Session, display};
use dynseq_runtime::inspect;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

const PROMPT: &str = "dynseq> ";

const HELP: &str = "\
Expressions: <operand> [op]
  operand   a bound name or a JSON literal, e.g. [1, 2, \"x\"]
  op        at <i> | concat <operand> | join <sep> | map <transform>
            find <predicate> | find-index <predicate> | every <predicate>
            len | inspect | snapshot
Commands:
  let <name> <operand> [op]     bind a result
  set <name> <index> <literal>  assign (past the end leaves holes)
  push <name> <literal>         append
  :env                          list bindings
  :help                         this text
  :quit                         exit";

/// What a meta command (`:word`) asked for
enum Meta {
    Continue,
    Quit,
}

fn meta(session: &Session, word: &str) -> Meta {
    match word {
        ":quit" | ":q" => Meta::Quit,
        ":help" | ":h" => {
            println!("{}", HELP);
            Meta::Continue
        }
        ":env" => {
            for (name, value) in session.bindings() {
                println!("{} = {}", name, inspect(value));
            }
            Meta::Continue
        }
        other => {
            eprintln!("unknown command {} (try :help)", other);
            Meta::Continue
        }
    }
}

pub fn run(mut session: Session) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new().map_err(|e| CliError::Readline(e.to_string()))?;
    println!("dynseq {} (:help for commands)", env!("CARGO_PKG_VERSION"));

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(CliError::Readline(e.to_string())),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // History is a convenience; failing to record it is not fatal
        let _ = editor.add_history_entry(trimmed);

        if trimmed.starts_with(':') {
            match meta(&session, trimmed) {
                Meta::Quit => break,
                Meta::Continue => continue,
            }
        }

        debug!(line = trimmed, "repl");
        match session.execute_line(trimmed) {
            Ok(LineOutcome::Value(outcome)) => println!("{}", display(&outcome)),
            Ok(LineOutcome::Bound(name)) => {
                if let Some(value) = session.get(&name) {
                    println!("{} = {}", name, inspect(value));
                }
            }
            Ok(LineOutcome::Nothing) => {}
            Err(e) => eprintln!("error: {}", e),
        }
    }
    Ok(())
}
