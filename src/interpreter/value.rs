use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Exactly three kinds exist: booleans, sequences and numbers. A sequence
/// carries its element expressions unevaluated; elements are only evaluated
/// when the sequence is indexed, compared or frozen.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// An ordered collection of unevaluated expressions.
    Sequence(Vec<Expr>),
    /// A non-negative 64-bit integer.
    Number(i64),
}

impl Value {
    /// Converts the value to `bool`, or reports which built-in wanted one.
    ///
    /// # Errors
    /// Returns [`EvalError::ExpectedBoolean`] for sequences and numbers.
    pub fn as_bool(&self, builtin: &str, pos: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(vec![EvalError::ExpectedBoolean { name: builtin.to_string(),
                                                       pos }]),
        }
    }

    /// Converts the value to the integer the relational built-ins order by.
    ///
    /// Booleans are coerced with `false < true` (`false` → 0, `true` → 1);
    /// numbers pass through unchanged.
    ///
    /// # Errors
    /// Returns [`EvalError::ExpectedBooleanOrNumber`] for sequences.
    pub fn as_ordinal(&self, builtin: &str, pos: usize) -> EvalResult<i64> {
        match self {
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Number(n) => Ok(*n),
            Self::Sequence(_) => {
                Err(vec![EvalError::ExpectedBooleanOrNumber { name: builtin.to_string(),
                                                              pos }])
            },
        }
    }

    /// Returns `true` if the value is [`Sequence`].
    ///
    /// [`Sequence`]: Value::Sequence
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(..))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Sequence(elements) => {
                write!(f, "[")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, "]")
            },
        }
    }
}
