use crate::{
    ast::{Expr, Statement},
    error::{EvalError, StatementError},
    interpreter::{
        environment::Environment,
        evaluator::{builtins, call},
        lexer::{Token, scan},
        parser::core::parse,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// Errors are collected into a list: a single statement can surface several
/// failures at once, and a non-empty list means no value was produced.
pub type EvalResult<T> = Result<T, Vec<EvalError>>;

/// The single polymorphic evaluation capability shared by every AST form.
///
/// Bindings and gate declarations mutate the environment and yield `None`;
/// expressions yield `Some(value)`.
pub trait Evaluate {
    /// Evaluates this node against an environment.
    ///
    /// # Errors
    /// Returns every evaluation error the node and its children produced.
    fn eval(&self, env: &Environment) -> EvalResult<Option<Value>>;
}

impl Evaluate for Statement {
    fn eval(&self, env: &Environment) -> EvalResult<Option<Value>> {
        match self {
            Self::Binding(binding) | Self::Continuation(binding) => binding.eval(env),
            Self::Gate(decl) => decl.eval(env),
            Self::Expression(expr) => expr.eval(env),
        }
    }
}

impl Evaluate for Expr {
    fn eval(&self, env: &Environment) -> EvalResult<Option<Value>> {
        self.value(env).map(Some)
    }
}

impl Expr {
    /// Evaluates this expression to a value.
    ///
    /// Dispatch follows the declaration order of the shapes: error nodes
    /// first, then binary and unary applications, grouping, calls,
    /// identifiers and the literal shapes. Binary operands are both
    /// evaluated before errors are reported so that failures on either side
    /// surface together.
    pub(crate) fn value(&self, env: &Environment) -> EvalResult<Value> {
        match self {
            Self::Error(err) => Err(vec![EvalError::Unevaluable { message: err.to_string(),
                                                                  pos:     err.pos(), }]),
            Self::Binary { lhs, op, rhs } => {
                let left = lhs.value(env);
                let right = rhs.value(env);

                match (left, right) {
                    (Ok(left), Ok(right)) => {
                        builtins::core::apply_operator(op, &[left, right], env)
                    },
                    (left, right) => {
                        let mut errors = Vec::new();

                        if let Err(errs) = left {
                            errors.extend(errs);
                        }
                        if let Err(errs) = right {
                            errors.extend(errs);
                        }

                        Err(errors)
                    },
                }
            },
            Self::Unary { op, rhs } => {
                let value = rhs.value(env)?;
                builtins::core::apply_operator(op, &[value], env)
            },
            Self::Grouping(inner) => inner.value(env),
            Self::Call { ident, args } => call::apply(ident, args, env),
            Self::Identifier(token) => resolve_identifier(token, env),
            Self::Literal { value, .. } => Ok(Value::Bool(*value)),
            Self::Sequence { elements, .. } => Ok(Value::Sequence(elements.clone())),
            Self::Number { value, .. } => Ok(Value::Number(*value)),
        }
    }
}

/// Resolves an identifier reference against the environment chain.
///
/// A stored expression that is itself an identifier with the same name is
/// the self-resolving shape produced by parameter pass-through: a gate
/// argument shadowing an outer binding of the same name. In that case the
/// lookup retries one scope out so it cannot chase its own tail; running out
/// of parents there is a bug condition and is surfaced as such.
fn resolve_identifier(token: &Token, env: &Environment) -> EvalResult<Value> {
    let Some(stored) = env.binding(&token.lexeme) else {
        return Err(vec![EvalError::UndefinedIdentifier { name: token.lexeme.clone(),
                                                         pos:  token.pos, }]);
    };

    if let Expr::Identifier(inner) = &stored
       && inner.lexeme == token.lexeme
    {
        return match env.parent() {
            Some(parent) => stored.value(&parent),
            None => Err(vec![EvalError::Internal { details: format!("the self-resolving binding `{}` has no parent environment to retry in",
                                                                    token.lexeme),
                                                   pos:     token.pos, }]),
        };
    }

    stored.value(env)
}

/// A persistent interpreter session: the top-level environment plus the
/// most recently declared gate, which is where `where`/`and` binding
/// continuations are installed.
///
/// ## Usage
///
/// `Session` is created once and fed one statement per line. Bindings and
/// gate declarations mutate the session; expressions report their value.
///
/// ```
/// use logica::interpreter::{evaluator::core::Session, value::Value};
///
/// let mut session = Session::new();
///
/// session.eval_line("p is true").unwrap();
/// let result = session.eval_line("p ^ !p").unwrap();
///
/// assert_eq!(result, Some(Value::Bool(false)));
/// ```
pub struct Session {
    env:       Environment,
    last_gate: Option<String>,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session with an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env:       Environment::new(),
               last_gate: None, }
    }

    /// Gets the session's top-level environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Scans, parses and evaluates one statement line.
    ///
    /// # Errors
    /// Returns the full list of parse errors if the line does not parse, or
    /// the full list of evaluation errors if it does not evaluate.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<Value>, StatementError> {
        let tokens = scan(line);
        let (statement, errors) = parse(&tokens);

        if !errors.is_empty() {
            return Err(StatementError::Parse(errors));
        }

        self.eval_statement(&statement)
    }

    /// Evaluates an already-parsed statement against the session.
    ///
    /// Binding continuations are routed into the captured environment of the
    /// most recently declared gate; everything else runs against the
    /// top-level environment.
    ///
    /// # Errors
    /// Returns the evaluation errors the statement produced.
    pub fn eval_statement(&mut self,
                          statement: &Statement)
                          -> Result<Option<Value>, StatementError> {
        match statement {
            Statement::Continuation(binding) => {
                let Some(name) = self.last_gate.clone() else {
                    return Err(StatementError::Eval(vec![EvalError::NoContinuationTarget { pos: binding.label.pos }]));
                };

                let Some(gate) = self.env.gate(&name) else {
                    let error = EvalError::UndefinedGate { name,
                                                           pos: binding.label.pos, };
                    return Err(StatementError::Eval(vec![error]));
                };

                binding.eval(&gate.env).map_err(StatementError::Eval)
            },
            Statement::Gate(decl) => {
                let result = decl.eval(&self.env).map_err(StatementError::Eval)?;
                self.last_gate = Some(decl.label.lexeme.clone());
                Ok(result)
            },
            _ => statement.eval(&self.env).map_err(StatementError::Eval),
        }
    }
}
