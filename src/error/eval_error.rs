/// Represents all errors that can be raised while evaluating a statement.
///
/// Evaluation accumulates errors into lists rather than stopping at the
/// first failure; a non-empty list means the statement produced no value.
/// Every variant carries the byte offset of the expression that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An expression that carries a parse error was evaluated anyway.
    Unevaluable {
        /// The embedded parse error, rendered.
        message: String,
        /// Position of the unparsable expression.
        pos:     usize,
    },
    /// A binding's value transitively references the label being bound.
    CircularBinding {
        /// The label of the rejected binding.
        name: String,
        /// Position of the label.
        pos:  usize,
    },
    /// An identifier is not bound anywhere in the environment chain.
    UndefinedIdentifier {
        /// The unresolved name.
        name: String,
        /// Position of the reference.
        pos:  usize,
    },
    /// A call names neither a declared gate nor an indexable binding.
    UndefinedGate {
        /// The unresolved name.
        name: String,
        /// Position of the call.
        pos:  usize,
    },
    /// An operator token has no built-in implementation.
    UnknownOperator {
        /// The operator's lexeme.
        operator: String,
        /// Position of the operator.
        pos:      usize,
    },
    /// A gate or built-in received the wrong number of arguments.
    ArityMismatch {
        /// The gate or built-in name.
        name:     String,
        /// How many arguments it takes.
        expected: usize,
        /// How many it received.
        found:    usize,
        /// Position of the call or operator.
        pos:      usize,
    },
    /// A built-in required a boolean operand.
    ExpectedBoolean {
        /// The built-in's name.
        name: String,
        /// Position of the operator.
        pos:  usize,
    },
    /// A relational built-in required a boolean or numeric operand.
    ExpectedBooleanOrNumber {
        /// The built-in's name.
        name: String,
        /// Position of the operator.
        pos:  usize,
    },
    /// Equality was applied to values of different kinds.
    KindMismatch {
        /// The built-in's name.
        name: String,
        /// Position of the operator.
        pos:  usize,
    },
    /// Indexing was applied to a binding that is not a sequence.
    ExpectedSequence {
        /// The indexed name.
        name: String,
        /// Position of the call.
        pos:  usize,
    },
    /// A sequence index evaluated to a sequence.
    InvalidIndex {
        /// The indexed name.
        name: String,
        /// Position of the call.
        pos:  usize,
    },
    /// A sequence index fell outside `0..length`.
    IndexOutOfBounds {
        /// The indexed name.
        name:   String,
        /// The sequence length.
        length: usize,
        /// The index that was requested.
        found:  i64,
        /// Position of the call.
        pos:    usize,
    },
    /// A `where`/`and` continuation arrived before any gate was declared.
    NoContinuationTarget {
        /// Position of the continuation's label.
        pos: usize,
    },
    /// A self-resolving binding had no parent environment to retry in. This
    /// is a bug condition, surfaced rather than swallowed.
    Internal {
        /// What went wrong.
        details: String,
        /// Position of the failing expression.
        pos:     usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unevaluable { message, pos } => write!(f,
                                                         "Error at position {pos}: Cannot evaluate expression due to a parse error: {message}"),

            Self::CircularBinding { name, pos } => write!(f,
                                                          "Error at position {pos}: Detected a circular reference in the `{name}` binding."),

            Self::UndefinedIdentifier { name, pos } => {
                write!(f, "Error at position {pos}: Undefined identifier `{name}`.")
            },

            Self::UndefinedGate { name, pos } => {
                write!(f, "Error at position {pos}: Undefined gate `{name}`.")
            },

            Self::UnknownOperator { operator, pos } => {
                write!(f, "Error at position {pos}: Unknown operator `{operator}`.")
            },

            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  pos, } => write!(f,
                                                   "Error at position {pos}: Arity error, `{name}` expects {expected} arguments but got {found} instead."),

            Self::ExpectedBoolean { name, pos } => {
                write!(f, "Error at position {pos}: `{name}` expects boolean operands.")
            },

            Self::ExpectedBooleanOrNumber { name, pos } => write!(f,
                                                                  "Error at position {pos}: `{name}` expects boolean or number operands."),

            Self::KindMismatch { name, pos } => write!(f,
                                                       "Error at position {pos}: `{name}` expects both operands to be of the same kind."),

            Self::ExpectedSequence { name, pos } => write!(f,
                                                           "Error at position {pos}: Invalid operation, expecting `{name}` to be a sequence."),

            Self::InvalidIndex { name, pos } => write!(f,
                                                       "Error at position {pos}: Expecting a boolean or a number when indexing the `{name}` sequence."),

            Self::IndexOutOfBounds { name,
                                     length,
                                     found,
                                     pos, } => write!(f,
                                                      "Error at position {pos}: Out of bounds access on `{name}`: index is {found} but the sequence length is {length}."),

            Self::NoContinuationTarget { pos } => write!(f,
                                                         "Error at position {pos}: A binding continuation needs a previously declared gate."),

            Self::Internal { details, pos } => {
                write!(f, "Error at position {pos}: Internal error: {details}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
