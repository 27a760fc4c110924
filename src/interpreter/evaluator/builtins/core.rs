use crate::{
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::{
            builtins::{comparison, equality, logic},
            core::EvalResult,
        },
        lexer::{Token, TokenKind},
        value::Value,
    },
};

/// Type alias for built-in operator handlers.
///
/// A built-in receives the caller's environment (needed for deep sequence
/// comparison), the evaluated operand values and the operator's position.
pub type BuiltinFn = fn(&Environment, &[Value], usize) -> EvalResult<Value>;

/// One entry of the built-in table: a name, the exact arity and the
/// implementation.
pub struct BuiltinDef {
    /// The built-in's name, as operators resolve to it.
    pub name:  &'static str,
    /// The exact number of operands the built-in takes.
    pub arity: usize,
    /// The implementation.
    pub func:  BuiltinFn,
}

/// Defines the built-in operator table.
///
/// Each entry provides a string name, an exact arity and a function
/// pointer. The macro produces the static `BUILTIN_TABLE` that operator
/// resolution searches by name.
macro_rules! builtin_operations {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_operations! {
    "and" => { arity: 2, func: |_, args, pos| logic::and(args, pos) },
    "or"  => { arity: 2, func: |_, args, pos| logic::or(args, pos) },
    "mi"  => { arity: 2, func: |_, args, pos| logic::mi(args, pos) },
    "xor" => { arity: 2, func: |_, args, pos| logic::xor(args, pos) },
    "not" => { arity: 1, func: |_, args, pos| logic::not(args, pos) },
    "eq"  => { arity: 2, func: equality::eq },
    "ge"  => { arity: 2, func: |_, args, pos| comparison::relational("ge", args, pos) },
    "gt"  => { arity: 2, func: |_, args, pos| comparison::relational("gt", args, pos) },
    "le"  => { arity: 2, func: |_, args, pos| comparison::relational("le", args, pos) },
    "lt"  => { arity: 2, func: |_, args, pos| comparison::relational("lt", args, pos) },
}

/// Looks up a built-in by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Applies the built-in an operator token resolves to.
///
/// The token kind maps to a built-in name (`∧`/`^` → `and`, `>=` → `ge` and
/// so on) and the name is searched in the table; a token with no name or no
/// table entry is an unknown operator. The table's arity is enforced here
/// and the built-ins recheck it themselves.
pub(crate) fn apply_operator(op: &Token, args: &[Value], env: &Environment) -> EvalResult<Value> {
    let name = operator_name(&op.kind);

    let Some(def) = name.and_then(lookup) else {
        return Err(vec![EvalError::UnknownOperator { operator: op.lexeme.clone(),
                                                     pos:      op.pos, }]);
    };

    if args.len() != def.arity {
        return Err(vec![EvalError::ArityMismatch { name:     def.name.to_string(),
                                                   expected: def.arity,
                                                   found:    args.len(),
                                                   pos:      op.pos, }]);
    }

    (def.func)(env, args, op.pos)
}

/// Maps an operator token kind to its built-in name.
const fn operator_name(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::And => Some("and"),
        TokenKind::Or => Some("or"),
        TokenKind::Mi => Some("mi"),
        TokenKind::Xor => Some("xor"),
        TokenKind::Not => Some("not"),
        TokenKind::Eq => Some("eq"),
        TokenKind::Ge => Some("ge"),
        TokenKind::Gt => Some("gt"),
        TokenKind::Le => Some("le"),
        TokenKind::Lt => Some("lt"),
        _ => None,
    }
}

/// Ensures a built-in received exactly the number of operands it takes.
pub(in crate::interpreter::evaluator::builtins) fn check_arity(name: &str,
                                                               args: &[Value],
                                                               expected: usize,
                                                               pos: usize)
                                                               -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(vec![EvalError::ArityMismatch { name: name.to_string(),
                                            expected,
                                            found: args.len(),
                                            pos }])
    }
}
