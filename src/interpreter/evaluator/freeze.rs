use crate::{
    ast::Expr,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
};

/// Freezes a sequence: every element is evaluated in the given environment
/// and replaced with a literal of its value.
///
/// Booleans become boolean literals, numbers become numeric literals and
/// nested sequences are frozen recursively. Element positions are carried
/// over from the originals, which makes freezing idempotent: freezing an
/// already-frozen sequence yields an equal sequence.
///
/// Errors from all elements accumulate; any error means the frozen sequence
/// is undefined.
///
/// # Errors
/// Returns every evaluation error the elements produced.
pub fn freeze(elements: &[Expr], env: &Environment) -> EvalResult<Vec<Expr>> {
    let mut errors = Vec::new();
    let mut frozen = Vec::with_capacity(elements.len());

    for element in elements {
        match element.value(env) {
            Ok(Value::Bool(value)) => frozen.push(Expr::Literal { value,
                                                                  pos: element.pos() }),
            Ok(Value::Number(value)) => frozen.push(Expr::Number { value,
                                                                   pos: element.pos() }),
            Ok(Value::Sequence(inner)) => match freeze(&inner, env) {
                Ok(elements) => frozen.push(Expr::Sequence { elements,
                                                             pos: element.pos() }),
                Err(errs) => errors.extend(errs),
            },
            Err(errs) => errors.extend(errs),
        }
    }

    if errors.is_empty() {
        Ok(frozen)
    } else {
        Err(errors)
    }
}
