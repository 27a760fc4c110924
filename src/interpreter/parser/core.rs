use crate::{ast::Statement, error::ParseError, interpreter::lexer::Token};

/// Recursive-descent parser state: a flat token array, a position cursor and
/// the global error accumulator.
///
/// The parser never aborts on the first error. Problems inside an expression
/// become [`crate::ast::Expr::Error`] nodes embedded in the tree; missing
/// pieces of a declaration are appended to the accumulator while parsing
/// continues with a best-effort node.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos:    usize,
    eol:    Token,
    pub(in crate::interpreter::parser) errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a scanned token list.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(0, |token| token.pos + token.lexeme.len());

        Self { tokens,
               pos: 0,
               eol: Token::eol(end),
               errors: Vec::new() }
    }

    /// Gets the token under the cursor, or the EOL sentinel past the end.
    pub(in crate::interpreter::parser) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eol)
    }

    /// Gets the token after the cursor, or the EOL sentinel past the end.
    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or(&self.eol)
    }

    /// Advances the cursor by one token.
    pub(in crate::interpreter::parser) fn eat(&mut self) {
        self.pos += 1;
    }

    /// Tests whether every token has been consumed.
    pub(in crate::interpreter::parser) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Appends an error to the global accumulator.
    pub(in crate::interpreter::parser) fn record(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}

/// Parses a token list into a statement and the full list of parse errors.
///
/// The returned statement is always present, even in the face of errors; a
/// non-empty error list means it must not be evaluated. The list combines
/// the parser's global accumulator with the errors embedded in the tree by
/// the expression productions, plus a trailing-tokens diagnostic when input
/// remains after a complete statement.
///
/// # Examples
/// ```
/// use logica::interpreter::{lexer::scan, parser::core::parse};
///
/// let (statement, errors) = parse(&scan("true ^ false"));
///
/// assert!(errors.is_empty());
/// assert!(matches!(statement, logica::ast::Statement::Expression(_)));
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> (Statement, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let statement = parser.statement();

    if !parser.at_end() {
        let token = parser.current();
        let error = ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                           pos:   token.pos, };
        parser.record(error);
    }

    let mut errors = parser.errors;
    errors.extend(statement.errors());

    (statement, errors)
}
