use crate::{
    interpreter::{
        evaluator::{builtins::core::check_arity, core::EvalResult},
        value::Value,
    },
};

/// Evaluates one of the relational built-ins, selected by name.
///
/// Each operand must be a boolean or a number; booleans are coerced with
/// `false < true` before the numeric comparison. The coercion lives here,
/// in the relational built-ins only; equality never coerces.
pub fn relational(name: &str, args: &[Value], pos: usize) -> EvalResult<Value> {
    check_arity(name, args, 2, pos)?;

    let left = args[0].as_ordinal(name, pos)?;
    let right = args[1].as_ordinal(name, pos)?;

    Ok(Value::Bool(match name {
                       "ge" => left >= right,
                       "gt" => left > right,
                       "le" => left <= right,
                       "lt" => left < right,
                       _ => unreachable!("relational built-in selected with a non-relational name"),
                   }))
}
