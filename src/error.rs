//! Error types for the two failure channels: syntax errors collected by
//! the parser and evaluation errors raised by the evaluator.

mod eval_error;
mod parse_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Outcome of running source text end to end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("parser errors:\n{}", render_list(.0))]
    Parse(Vec<ParseError>),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

fn render_list(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| format!("\t{e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
