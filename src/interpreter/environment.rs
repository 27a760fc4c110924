use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{ast::Expr, interpreter::lexer::Token};

/// A declared gate: its name, parameter tokens, body expression and the
/// environment captured at declaration.
///
/// The captured environment outlives individual calls; `where`/`and`
/// continuations install bindings into it between calls. During a call it is
/// transiently parent-linked to the caller's environment (see
/// [`Environment::splice`]).
#[derive(Clone)]
pub struct Gate {
    /// The gate's name token.
    pub label:  Token,
    /// Parameter name tokens, left to right.
    pub params: Vec<Token>,
    /// The body expression.
    pub body:   Expr,
    /// The environment captured at declaration.
    pub env:    Environment,
}

/// One scope in the environment chain.
struct Scope {
    bindings: HashMap<String, Expr>,
    gates:    HashMap<String, Gate>,
    parent:   Option<Environment>,
}

/// A nested scope of bindings and gates.
///
/// `Environment` is a cheaply clonable shared handle: clones refer to the
/// same scope, which is what lets a gate's captured environment accumulate
/// continuation bindings while it also sits inside the installed gate.
/// Lookups walk the parent chain outward; writes always land in the local
/// scope.
#[derive(Clone)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates a fresh root environment with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self { scope: Rc::new(RefCell::new(Scope { bindings: HashMap::new(),
                                                   gates:    HashMap::new(),
                                                   parent:   None, })), }
    }

    /// Creates a fresh environment whose lookups fall back to `parent`.
    #[must_use]
    pub fn child(parent: &Self) -> Self {
        let env = Self::new();
        env.scope.borrow_mut().parent = Some(parent.clone());
        env
    }

    /// Looks up a binding, walking the parent chain.
    #[must_use]
    pub fn binding(&self, label: &str) -> Option<Expr> {
        let scope = self.scope.borrow();

        match scope.bindings.get(label) {
            Some(expr) => Some(expr.clone()),
            None => scope.parent.as_ref().and_then(|parent| parent.binding(label)),
        }
    }

    /// Installs a binding in the local scope, replacing any previous one
    /// with the same label.
    pub fn set_binding(&self, label: &str, value: Expr) {
        self.scope.borrow_mut().bindings.insert(label.to_string(), value);
    }

    /// Looks up a gate, walking the parent chain.
    #[must_use]
    pub fn gate(&self, label: &str) -> Option<Gate> {
        let scope = self.scope.borrow();

        match scope.gates.get(label) {
            Some(gate) => Some(gate.clone()),
            None => scope.parent.as_ref().and_then(|parent| parent.gate(label)),
        }
    }

    /// Installs a gate in the local scope, replacing any previous one with
    /// the same label.
    pub fn set_gate(&self, label: &str, gate: Gate) {
        self.scope.borrow_mut().gates.insert(label.to_string(), gate);
    }

    /// Gets this scope's parent environment, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.scope.borrow().parent.clone()
    }

    /// Temporarily installs `parent` as this environment's parent.
    ///
    /// The previous parent is snapshotted into the returned guard and put
    /// back when the guard drops, so nested calls of distinct gates and
    /// recursive calls of the same gate each see their own caller and leak
    /// no parent links on any exit path.
    #[must_use]
    pub fn splice(&self, parent: &Self) -> Splice {
        let saved = self.scope.borrow_mut().parent.replace(parent.clone());

        Splice { env: self.clone(),
                 saved }
    }
}

/// Guard for a transient parent link created by [`Environment::splice`].
///
/// Restores the snapshotted parent on drop.
pub struct Splice {
    env:   Environment,
    saved: Option<Environment>,
}

impl Drop for Splice {
    fn drop(&mut self) {
        self.env.scope.borrow_mut().parent = self.saved.take();
    }
}
