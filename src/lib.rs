//! A small Monkey-style scripting language: a Pratt parser that builds a
//! syntax tree and a tree-walking evaluator that runs it.
//!
//! ```
//! use interp::{object::Environment, run};
//!
//! let env = Environment::new().into_shared();
//! let value = run("let a = 5; if (a > 2) { a * 2 } else { 0 }", &env).unwrap();
//! assert_eq!(value.to_string(), "10");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;

pub use error::{Error, EvalError, ParseError};
pub use evaluator::{eval, Evaluator};
pub use lexer::Lexer;
pub use object::{Env, Value};
pub use parser::{parse, Parser};

/// Parses and evaluates `input` in `env`. Nothing is evaluated when the
/// source has syntax errors.
pub fn run(input: &str, env: &Env) -> Result<Value, Error> {
    let (program, errors) = parse(input);
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    Ok(eval(&program, env)?)
}
