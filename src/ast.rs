use crate::{error::ParseError, interpreter::lexer::Token};

/// An abstract syntax tree node representing an expression.
///
/// `Expr` is a discriminated union with exactly one case per shape the
/// language knows. Evaluation dispatches over the cases in declaration
/// order: an error case first, then binary and unary operator applications,
/// grouping, calls, identifiers and the three literal shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A node that could not be parsed; carries the parse error so that the
    /// whole statement can still be walked for diagnostics.
    Error(ParseError),
    /// A binary operator application, `lhs op rhs`.
    Binary {
        /// Left operand.
        lhs: Box<Self>,
        /// The operator token; resolved to a built-in by name at evaluation.
        op:  Token,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// A unary operator application, `op rhs`.
    Unary {
        /// The operator token.
        op:  Token,
        /// The operand expression.
        rhs: Box<Self>,
    },
    /// A parenthesized expression.
    Grouping(Box<Self>),
    /// A call-shaped expression, `ident(args...)`: either a gate application
    /// or, for bound identifiers with a single argument, sequence indexing.
    Call {
        /// The called name.
        ident: Token,
        /// Argument expressions, left to right, stored unevaluated.
        args:  Vec<Self>,
    },
    /// A bare identifier reference, resolved late against the environment.
    Identifier(Token),
    /// A boolean literal.
    Literal {
        /// The literal truth value.
        value: bool,
        /// Byte offset in the source statement.
        pos:   usize,
    },
    /// A sequence literal; elements stay unevaluated until indexed, frozen
    /// or compared.
    Sequence {
        /// The element expressions.
        elements: Vec<Self>,
        /// Byte offset of the opening bracket.
        pos:      usize,
    },
    /// A numeric literal, a non-negative 64-bit integer.
    Number {
        /// The literal value.
        value: i64,
        /// Byte offset in the source statement.
        pos:   usize,
    },
}

impl Expr {
    /// Gets the source position of this node.
    #[must_use]
    pub fn pos(&self) -> usize {
        match self {
            Self::Error(err) => err.pos(),
            Self::Binary { lhs, .. } => lhs.pos(),
            Self::Unary { op, .. } => op.pos,
            Self::Grouping(inner) => inner.pos(),
            Self::Call { ident, .. } => ident.pos,
            Self::Identifier(token) => token.pos,
            Self::Literal { pos, .. } | Self::Sequence { pos, .. } | Self::Number { pos, .. } => {
                *pos
            },
        }
    }

    /// Collects every parse error embedded in this expression tree.
    ///
    /// The parser records unexpected tokens as [`Expr::Error`] nodes instead
    /// of aborting; this post-pass walk surfaces them all at once.
    #[must_use]
    pub fn errors(&self) -> Vec<ParseError> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        errors
    }

    fn collect_errors(&self, errors: &mut Vec<ParseError>) {
        match self {
            Self::Error(err) => errors.push(err.clone()),
            Self::Binary { lhs, rhs, .. } => {
                lhs.collect_errors(errors);
                rhs.collect_errors(errors);
            },
            Self::Unary { rhs, .. } => rhs.collect_errors(errors),
            Self::Grouping(inner) => inner.collect_errors(errors),
            Self::Call { args, .. } => {
                for arg in args {
                    arg.collect_errors(errors);
                }
            },
            Self::Sequence { elements, .. } => {
                for element in elements {
                    element.collect_errors(errors);
                }
            },
            Self::Identifier(_) | Self::Literal { .. } | Self::Number { .. } => {},
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(_) => write!(f, "<error>"),
            Self::Binary { lhs, op, rhs } => write!(f, "{lhs} {} {rhs}", op.lexeme),
            Self::Unary { op, rhs } => write!(f, "{}{rhs}", op.lexeme),
            Self::Grouping(inner) => write!(f, "({inner})"),
            Self::Call { ident, args } => {
                write!(f, "{}(", ident.lexeme)?;

                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{arg}")?;
                }

                write!(f, ")")
            },
            Self::Identifier(token) => write!(f, "{}", token.lexeme),
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Sequence { elements, .. } => {
                write!(f, "[")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, "]")
            },
            Self::Number { value, .. } => write!(f, "{value}"),
        }
    }
}

/// A named association from an identifier to an unevaluated expression.
///
/// The expression is stored as written; every later reference re-evaluates
/// it against the environment at the reference site.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound identifier.
    pub label: Token,
    /// The bound expression, stored unevaluated.
    pub value: Expr,
}

/// A gate declaration: a first-class, parameterized, single-expression
/// function form.
///
/// The captured environment is not part of the syntax tree; it is created
/// when the declaration is evaluated and installed.
#[derive(Debug, Clone, PartialEq)]
pub struct GateDecl {
    /// The gate's name.
    pub label:  Token,
    /// Parameter name tokens, left to right.
    pub params: Vec<Token>,
    /// The body expression.
    pub body:   Expr,
}

/// A top-level statement, the unit parsed from one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A plain binding, `x is e`, installed in the top-level environment.
    Binding(Binding),
    /// A binding continuation, `where x is e` or `and x is e`, installed in
    /// the most recently declared gate's captured environment.
    Continuation(Binding),
    /// A gate declaration.
    Gate(GateDecl),
    /// A standalone expression evaluated for its value.
    Expression(Expr),
}

impl Statement {
    /// Collects every parse error embedded in the statement's expressions.
    #[must_use]
    pub fn errors(&self) -> Vec<ParseError> {
        match self {
            Self::Binding(binding) | Self::Continuation(binding) => binding.value.errors(),
            Self::Gate(decl) => decl.body.errors(),
            Self::Expression(expr) => expr.errors(),
        }
    }
}
