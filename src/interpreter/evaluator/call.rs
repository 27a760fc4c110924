use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        environment::{Environment, Gate},
        evaluator::{core::EvalResult, freeze::freeze},
        lexer::Token,
        value::Value,
    },
};

/// Evaluates a call-shaped expression.
///
/// A name that resolves to a declared gate is applied as one. A name that
/// does not, but is a bound identifier receiving exactly one argument, is
/// reinterpreted as sequence indexing. Anything else is an undefined gate.
pub(crate) fn apply(ident: &Token, args: &[Expr], env: &Environment) -> EvalResult<Value> {
    match env.gate(&ident.lexeme) {
        Some(gate) => apply_gate(&gate, ident, args, env),
        None => index_sequence(ident, args, env),
    }
}

/// Applies a declared gate to its argument expressions.
///
/// The caller's environment is spliced in as the captured environment's
/// parent for the duration of this call frame; the splice guard restores
/// the previous parent on every exit path, so nested calls of distinct
/// gates and recursive calls of the same gate both compose. Arguments are
/// installed unevaluated under their parameter names in a fresh child
/// scope, and the body is evaluated there.
///
/// A body that returns a sequence is frozen in the call's local scope
/// before the splice is undone: no lazy reference to a local survives the
/// call.
fn apply_gate(gate: &Gate, ident: &Token, args: &[Expr], env: &Environment) -> EvalResult<Value> {
    if gate.params.len() != args.len() {
        return Err(vec![EvalError::ArityMismatch { name:     ident.lexeme.clone(),
                                                   expected: gate.params.len(),
                                                   found:    args.len(),
                                                   pos:      ident.pos, }]);
    }

    let _splice = gate.env.splice(env);
    let local = Environment::child(&gate.env);

    for (param, arg) in gate.params.iter().zip(args) {
        local.set_binding(&param.lexeme, arg.clone());
    }

    let result = gate.body.value(&local)?;

    match result {
        Value::Sequence(elements) => Ok(Value::Sequence(freeze(&elements, &local)?)),
        value => Ok(value),
    }
}

/// Indexes a bound sequence through call syntax, `s(i)`.
///
/// The binding is resolved and must evaluate to a sequence. The single
/// argument supplies the index: booleans coerce with `false` → 0 and
/// `true` → 1, sequences are rejected, and anything outside `0..length`
/// (including negative numbers) is out of bounds. The selected element is
/// evaluated in the caller's environment.
fn index_sequence(ident: &Token, args: &[Expr], env: &Environment) -> EvalResult<Value> {
    let name = &ident.lexeme;

    if args.len() != 1 {
        return Err(vec![EvalError::UndefinedGate { name: name.clone(),
                                                   pos:  ident.pos, }]);
    }

    let Some(stored) = env.binding(name) else {
        return Err(vec![EvalError::UndefinedGate { name: name.clone(),
                                                   pos:  ident.pos, }]);
    };

    let Value::Sequence(elements) = stored.value(env)? else {
        return Err(vec![EvalError::ExpectedSequence { name: name.clone(),
                                                      pos:  ident.pos, }]);
    };

    let index = match args[0].value(env)? {
        Value::Bool(b) => i64::from(b),
        Value::Number(n) => n,
        Value::Sequence(_) => {
            return Err(vec![EvalError::InvalidIndex { name: name.clone(),
                                                      pos:  ident.pos, }]);
        },
    };

    match usize::try_from(index) {
        Ok(i) if i < elements.len() => elements[i].value(env),
        _ => Err(vec![EvalError::IndexOutOfBounds { name:   name.clone(),
                                                    length: elements.len(),
                                                    found:  index,
                                                    pos:    ident.pos, }]),
    }
}
