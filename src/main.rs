use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as _;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use interp::object::Environment;
use interp::{parse, repl, run, Lexer};

/// Runs Monkey scripts, or starts an interactive session when no file is given.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to evaluate. The value of its last statement is printed.
    file: Option<PathBuf>,

    /// Print the token stream of the script instead of evaluating it.
    #[arg(long, requires = "file")]
    tokens: bool,

    /// Print the canonical form of the parsed program instead of evaluating it.
    #[arg(long, requires = "file", conflicts_with = "tokens")]
    ast: bool,
}

// Logging stays off unless RUST_LOG is set, e.g. `RUST_LOG=interp=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let Some(path) = args.file else {
        println!("Hello! This is the Monkey programming language!");
        repl::start(io::stdin().lock(), io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    };

    let script = fs::read_to_string(&path)
        .with_context(|| format!("failed to read the input file '{}'", path.display()))?;

    if args.tokens {
        for token in Lexer::new(&script) {
            println!("{:<8} {}", token.kind, token.literal);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.ast {
        let (program, errors) = parse(&script);
        for error in &errors {
            eprintln!("{error}");
        }
        println!("{program}");
        return Ok(if errors.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let env = Environment::new().into_shared();
    match run(&script, &env) {
        Ok(value) => {
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{error}");
            Ok(ExitCode::FAILURE)
        }
    }
}
