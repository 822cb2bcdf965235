use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::ParseError;
use crate::evaluator::eval;
use crate::object::Environment;
use crate::parser::parse;

const PROMPT: &str = ">> ";

/// Reads lines from `input` until end of file, evaluating each against one
/// session scope and writing results to `output`.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let env = Environment::new().into_shared();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush().context("flush failed")?;

        let mut buffer = String::new();
        let read = input
            .read_line(&mut buffer)
            .context("failed to read input line")?;
        if read == 0 {
            return Ok(());
        }

        let (program, errors) = parse(&buffer);
        if !errors.is_empty() {
            print_parser_errors(&mut output, &errors)?;
            continue;
        }

        debug!(statements = program.len(), "evaluating line");
        match eval(&program, &env) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> Result<()> {
    writeln!(output, " parser errors:")?;
    for msg in errors {
        writeln!(output, "\t{msg}")?;
    }
    Ok(())
}
