use crate::{
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::{builtins::core::check_arity, core::EvalResult},
        value::Value,
    },
};

/// Deep equality over values of the same kind.
///
/// Booleans and numbers compare directly. Sequences compare element-wise:
/// each side's elements are evaluated in the caller's environment and the
/// results compared recursively. Sequences of different lengths are simply
/// unequal; operands of different kinds are a type error.
pub fn eq(env: &Environment, args: &[Value], pos: usize) -> EvalResult<Value> {
    check_arity("eq", args, 2, pos)?;

    Ok(Value::Bool(values_equal(env, &args[0], &args[1], pos)?))
}

fn values_equal(env: &Environment, left: &Value, right: &Value, pos: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Sequence(a), Value::Sequence(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }

            for (x, y) in a.iter().zip(b) {
                let x = x.value(env)?;
                let y = y.value(env)?;

                if !values_equal(env, &x, &y, pos)? {
                    return Ok(false);
                }
            }

            Ok(true)
        },
        _ => Err(vec![EvalError::KindMismatch { name: "eq".to_string(),
                                                pos }]),
    }
}
