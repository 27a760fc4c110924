use std::collections::HashSet;

use crate::{
    ast::{Binding, Expr, GateDecl},
    error::EvalError,
    interpreter::{
        environment::{Environment, Gate},
        evaluator::core::{EvalResult, Evaluate},
        lexer::Token,
        value::Value,
    },
};

impl Evaluate for Binding {
    /// Installs the binding in the given environment.
    ///
    /// The value expression is stored unevaluated; references are late-bound
    /// at each use site. Before installation, every identifier the value
    /// transitively reaches through current bindings is collected; if the
    /// binding's own label is among them the binding is rejected, since
    /// evaluating it later could never terminate.
    fn eval(&self, env: &Environment) -> EvalResult<Option<Value>> {
        let mut referenced = HashSet::new();
        collect_identifiers(&self.value, env, &mut referenced);

        if referenced.contains(&self.label.lexeme) {
            return Err(vec![EvalError::CircularBinding { name: self.label.lexeme.clone(),
                                                         pos:  self.label.pos, }]);
        }

        env.set_binding(&self.label.lexeme, self.value.clone());
        Ok(None)
    }
}

impl Evaluate for GateDecl {
    /// Installs the gate in the given environment.
    ///
    /// The captured environment is created here as a fresh child of the
    /// environment the declaration is evaluated in; `where`/`and`
    /// continuations will install their bindings into it, and calls will
    /// transiently re-parent it to the caller.
    fn eval(&self, env: &Environment) -> EvalResult<Option<Value>> {
        let gate = Gate { label:  self.label.clone(),
                          params: self.params.clone(),
                          body:   self.body.clone(),
                          env:    Environment::child(env), };

        env.set_gate(&self.label.lexeme, gate);
        Ok(None)
    }
}

/// Collects every identifier an expression references, transitively
/// following current bindings.
///
/// The walk covers all sub-expression shapes, including call names, call
/// arguments and sequence elements. The `seen` set doubles as the recursion
/// guard: a name is followed into its binding at most once, so the walk
/// terminates even on diamond-shaped reference graphs.
fn collect_identifiers(expr: &Expr, env: &Environment, seen: &mut HashSet<String>) {
    match expr {
        Expr::Identifier(token) => follow(token, env, seen),
        Expr::Binary { lhs, rhs, .. } => {
            collect_identifiers(lhs, env, seen);
            collect_identifiers(rhs, env, seen);
        },
        Expr::Unary { rhs, .. } => collect_identifiers(rhs, env, seen),
        Expr::Grouping(inner) => collect_identifiers(inner, env, seen),
        Expr::Call { ident, args } => {
            follow(ident, env, seen);

            for arg in args {
                collect_identifiers(arg, env, seen);
            }
        },
        Expr::Sequence { elements, .. } => {
            for element in elements {
                collect_identifiers(element, env, seen);
            }
        },
        Expr::Error(_) | Expr::Literal { .. } | Expr::Number { .. } => {},
    }
}

/// Records one referenced name and, on first sight, descends into whatever
/// expression it is currently bound to.
fn follow(token: &Token, env: &Environment, seen: &mut HashSet<String>) {
    if seen.insert(token.lexeme.clone())
       && let Some(bound) = env.binding(&token.lexeme)
    {
        collect_identifiers(&bound, env, seen);
    }
}
