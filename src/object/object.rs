use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::ast::{self, BlockStatement, Identifier};
use crate::object::environment::Env;

/// Handle to a runtime value. Booleans and null are shared singletons.
pub type Value = Arc<Object>;

pub static TRUE: LazyLock<Value> = LazyLock::new(|| Arc::new(Object::Boolean(true)));
pub static FALSE: LazyLock<Value> = LazyLock::new(|| Arc::new(Object::Boolean(false)));
pub static NULL: LazyLock<Value> = LazyLock::new(|| Arc::new(Object::Null));

/// Returns the interned `TRUE` or `FALSE`.
pub fn native_bool(value: bool) -> Value {
    if value {
        Arc::clone(&TRUE)
    } else {
        Arc::clone(&FALSE)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    Function(Function),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match &self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Function(_) => "FUNCTION",
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Function(function) => write!(
                f,
                "fn({}) {{\n{}\n}}",
                ast::join(function.parameters.iter()),
                function.body
            ),
        }
    }
}

/// A function value: the literal's parameters and body plus the scope it was
/// evaluated in.
#[derive(Clone)]
pub struct Function {
    pub parameters: Arc<[Identifier]>,
    pub body: Arc<BlockStatement>,
    pub env: Env,
}

// Two function values are equal only when they come from the same literal
// evaluated in the same scope.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body) && Arc::ptr_eq(&self.env, &other.env)
    }
}

impl Eq for Function {}

// The captured scope can contain this very function, so it is left out.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}
