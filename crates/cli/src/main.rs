//! dynseq - command-line front end for the sequence runtime
//!
//! Usage:
//!   dynseq eval '[1,2,3]' join -       # one-shot expression
//!   dynseq eval '[1,2,3,4]' find even
//!   dynseq repl                        # interactive session
//!   dynseq demo                        # walkthrough of every operation
//!   dynseq completions bash            # shell completions
//!
//! Global options:
//!   --config <path>   runtime configuration (TOML)
//!   --log <directive> extra tracing directive, e.g. dynseq_runtime=debug

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use dynseq_cli::{CliError, Session, demo, display, repl};
use dynseq_runtime::{Runtime, RuntimeConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(ClapParser)]
#[command(name = "dynseq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dynamic sequence runtime", long_about = None)]
struct Cli {
    /// Runtime configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Additional tracing directive
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one expression: <operand> [op args...]
    Eval {
        /// JSON literal
        operand: String,

        /// Operation words, e.g. `join -` or `at -1`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        op: Vec<String>,
    },
    /// Start an interactive session
    Repl,
    /// Run the walkthrough of every operation
    Demo,
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

const DEFAULT_DIRECTIVES: [&str; 2] = ["dynseq_cli=info", "dynseq_runtime=info"];

/// Install the stderr subscriber: RUST_LOG first, then our defaults, then
/// the config file's and the command line's extra directives
fn init_logging(extra: &[&str]) -> Result<(), CliError> {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES.iter().chain(extra) {
        let parsed = directive
            .parse::<Directive>()
            .map_err(|e| CliError::Usage(format!("invalid log directive '{}': {}", directive, e)))?;
        filter = filter.add_directive(parsed);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };

    let extra: Vec<&str> = config
        .log_filter
        .as_deref()
        .into_iter()
        .chain(cli.log.as_deref())
        .collect();
    init_logging(&extra)?;

    if let Some(path) = &cli.config {
        info!(path = %path.display(), "loaded config");
    }
    let runtime = Runtime::new(config);

    match cli.command {
        Commands::Eval { operand, op } => {
            let session = Session::new(runtime);
            let outcome = session.eval_words(&operand, &op)?;
            println!("{}", display(&outcome));
        }
        Commands::Repl => repl::run(Session::new(runtime))?,
        Commands::Demo => {
            for line in demo::run(&runtime)? {
                println!("{}", line);
            }
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "dynseq", &mut std::io::stdout());
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
