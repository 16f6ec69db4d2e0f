use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use reckon::{BUILTIN_FUNCTIONS, CalcError, evaluate, parse};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// reckon evaluates an arithmetic expression and prints the result.
///
/// If no expression is given, a single line is read from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parenthesised syntax tree before the result.
    #[arg(long)]
    ast: bool,

    /// List the builtin functions and exit.
    #[arg(long)]
    functions: bool,

    /// Enable debug logging on standard error.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, e.g. "2 + 3 * 4".
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.functions {
        for name in BUILTIN_FUNCTIONS {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let expression = match args.expression {
        Some(expression) => expression,
        None => match read_line() {
            Ok(Some(line)) => line,
            Ok(None) => return ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                return ExitCode::FAILURE;
            },
        },
    };

    match run(&expression, args.ast) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates `expression`, printing the tree first when `show_ast` is set.
fn run(expression: &str, show_ast: bool) -> Result<(), CalcError> {
    if show_ast {
        println!("{}", parse(expression)?);
    }
    let value = evaluate(expression)?;
    debug!(expression, value, "evaluated");
    println!("{value}");
    Ok(())
}

/// Reads one line from standard input without its line terminator.
///
/// Returns `None` at end of input.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Installs the log subscriber, writing to standard error.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug`
/// with `--verbose`. Colour is used only when standard error is a terminal.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_ansi(io::stderr().is_terminal())
                             .with_writer(io::stderr)
                             .init();
}
