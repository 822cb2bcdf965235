pub mod environment;
pub mod object;

pub use environment::{Env, Environment};
pub use object::{native_bool, Function, Object, Value, FALSE, NULL, TRUE};
