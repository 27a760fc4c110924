/// Scanning and parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// abstract syntax tree: scan failures, unexpected tokens, malformed
/// declarations and trailing input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating statements:
/// unresolved names, circular bindings, arity and type violations, sequence
/// bounds errors and internal bug conditions.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// The combined failure of one statement: either the parse phase or the
/// evaluation phase reported one or more errors.
///
/// Multiple errors can flow out of a single statement; the display form
/// prints each on its own line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// The statement did not parse.
    Parse(Vec<ParseError>),
    /// The statement parsed but did not evaluate.
    Eval(Vec<EvalError>),
}

impl std::fmt::Display for StatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }

                    write!(f, "{error}")?;
                }

                Ok(())
            },
            Self::Eval(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }

                    write!(f, "{error}")?;
                }

                Ok(())
            },
        }
    }
}

impl std::error::Error for StatementError {}
