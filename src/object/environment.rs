use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::object::object::Value;

/// Shared handle to a scope. Closures keep their defining scope alive through it.
pub type Env = Arc<RwLock<Environment>>;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_enclosed_environment(outer: Env) -> Self {
        Self {
            store: HashMap::default(),
            outer: Some(outer),
        }
    }

    pub fn into_shared(self) -> Env {
        Arc::new(RwLock::new(self))
    }

    /// Looks `key` up here, then in each enclosing scope in turn.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.store.get(key) {
            Some(val) => Some(Arc::clone(val)),
            None => self.outer.as_ref().and_then(|outer| outer.read().get(key)),
        }
    }

    /// Binds `key` in this scope only, shadowing any outer binding.
    pub fn set(&mut self, key: impl Into<String>, val: Value) -> Value {
        self.store.insert(key.into(), Arc::clone(&val));
        val
    }
}
