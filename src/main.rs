//! Binary entry point for the cstwalk CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Print a tree as source text
//! cstwalk print tree.json --indent 2
//!
//! # Dump the event trace of a walk as JSON
//! cstwalk events tree.json --traversal preorder
//!
//! # Verify every walk reaches every node with balanced events
//! cstwalk check tree.json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cstwalk::cli::{run_check, run_events, run_print};
use cstwalk::cst::{PrinterConfig, Traversal, TraversalOptions};
use cstwalk::error::{CliError, OutputErrorCode};
use cstwalk::output::{emit_response, ErrorResponse};

// ============================================================================
// CLI Structure
// ============================================================================

/// Source-order traversal of Groovy syntax trees.
///
/// Trees are read as JSON arrays of root nodes. Structured output and errors
/// are JSON on stdout; logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "cstwalk", version, about = "Walk and print Groovy syntax trees")]
struct Cli {
    /// Log level for tracing output.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Write logs as JSON lines instead of text.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Walk selected by `--traversal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TraversalArg {
    /// Reading order of the source text.
    Source,
    /// Parent first, then children in order.
    Preorder,
    /// Every node once, sorted by position.
    Flat,
}

impl From<TraversalArg> for Traversal {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::Source => Traversal::SourceOrder,
            TraversalArg::Preorder => Traversal::PreOrder,
            TraversalArg::Flat => Traversal::Flat,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tree as source text.
    Print {
        /// Tree file (JSON array of root nodes).
        tree: PathBuf,
        /// Spaces per indentation level.
        #[arg(long, default_value_t = 4)]
        indent: usize,
        /// Do not reproduce the tree's line structure.
        #[arg(long)]
        no_follow_lines: bool,
        #[command(flatten)]
        walk: WalkArgs,
    },
    /// Emit the event trace of a walk as JSON.
    Events {
        tree: PathBuf,
        /// Walk to run.
        #[arg(long, value_enum, default_value = "source")]
        traversal: TraversalArg,
        #[command(flatten)]
        walk: WalkArgs,
    },
    /// Run every walk and report whether each one is complete and balanced.
    Check {
        tree: PathBuf,
        #[command(flatten)]
        walk: WalkArgs,
    },
}

/// Options shared by every walk.
#[derive(Args, Debug)]
struct WalkArgs {
    /// Deepest nesting accepted before the walk fails.
    #[arg(long)]
    max_depth: Option<usize>,
    /// Disable the nesting limit.
    #[arg(long, conflicts_with = "max_depth")]
    no_depth_limit: bool,
    /// Let a source-order walk finish with nodes it never reached.
    #[arg(long)]
    allow_unvisited: bool,
}

impl WalkArgs {
    fn options(&self) -> TraversalOptions {
        let mut options = TraversalOptions::new().with_require_complete(!self.allow_unvisited);
        if self.no_depth_limit {
            options = options.with_max_depth(None);
        } else if let Some(limit) = self.max_depth {
            options = options.with_max_depth(Some(limit));
        }
        options
    }
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level, cli.log_json);

    match execute(cli) {
        Ok(code) => code,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            let response = ErrorResponse::from_error(&err);

            // Errors go to stdout as JSON so callers parse one stream.
            let _ = emit_response(&response, &mut io::stdout());
            let _ = io::stdout().flush();

            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel, json: bool) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// ============================================================================
// Command Executors
// ============================================================================

fn execute(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Command::Print {
            tree,
            indent,
            no_follow_lines,
            walk,
        } => {
            let config = PrinterConfig::default()
                .with_indent(indent)
                .with_follow_lines(!no_follow_lines);
            let text = run_print(&tree, &config, &walk.options())?;
            let mut stdout = io::stdout();
            writeln!(stdout, "{text}")?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Events {
            tree,
            traversal,
            walk,
        } => {
            let response = run_events(&tree, traversal.into(), &walk.options())?;
            emit_response(&response, &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { tree, walk } => {
            let response = run_check(&tree, &walk.options())?;
            emit_response(&response, &mut io::stdout())?;
            if response.is_ok() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(OutputErrorCode::TraversalFailed.code()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod cli_parsing {
        use super::*;

        fn events_traversal(args: &[&str]) -> Traversal {
            let cli = Cli::try_parse_from(args).unwrap();
            match cli.command {
                Command::Events { traversal, .. } => traversal.into(),
                _ => panic!("expected Events"),
            }
        }

        #[test]
        fn events_defaults_to_source_order() {
            let traversal = events_traversal(&["cstwalk", "events", "tree.json"]);
            assert_eq!(traversal, Traversal::SourceOrder);
        }

        #[test]
        fn events_accepts_every_walk_name() {
            for expected in Traversal::ALL {
                let args = ["cstwalk", "events", "tree.json", "--traversal", expected.name()];
                assert_eq!(events_traversal(&args), expected);
            }
        }

        #[test]
        fn unknown_traversal_is_a_usage_error() {
            let args = ["cstwalk", "events", "tree.json", "--traversal", "sideways"];
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
            assert_eq!(err.exit_code(), 2);
        }

        #[test]
        fn depth_flags_conflict() {
            let args = ["cstwalk", "check", "tree.json", "--max-depth", "4", "--no-depth-limit"];
            assert!(Cli::try_parse_from(args).is_err());
        }
    }
}
