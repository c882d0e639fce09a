use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an environment frame.
///
/// Environments are aliased, not copied: a closure and the scope that
/// created it both point at the same frame, so a binding added after the
/// closure was built is still visible when it runs.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A mapping from names to values with an optional outer frame.
///
/// Environments form a tree rooted at the global frame. Lookup walks
/// outward until the name is found or the chain ends; binding writes only
/// into this frame. Each function application creates a child of the
/// function's *captured* environment, which is what gives closures their
/// lexical scope.
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates a fresh global environment with no outer frame.
    #[must_use]
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None }))
    }

    /// Creates an environment whose lookups fall back to `outer`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().set("x".to_string(), Value::Integer(2));
    ///
    /// let frame = Environment::new_enclosed(global);
    /// frame.borrow_mut().set("y".to_string(), Value::Integer(3));
    ///
    /// assert_eq!(frame.borrow().get("x"), Some(Value::Integer(2)));
    /// assert_eq!(frame.borrow().get("y"), Some(Value::Integer(3)));
    /// assert_eq!(frame.borrow().get("z"), None);
    /// ```
    #[must_use]
    pub fn new_enclosed(outer: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(outer) }))
    }

    /// Looks a name up in this frame, then outward along the chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this frame only. Rebinding an existing name replaces
    /// its value; outer frames are never written to.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
