pub mod eval;

pub use eval::{eval, is_truthy, Evaluator};
