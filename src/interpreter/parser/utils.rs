use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions until a closing token.
    ///
    /// Shared by call argument lists and sequence literals. After each
    /// element the parser expects either a comma, to continue the list, or
    /// the given closing token, to end it. An immediately encountered
    /// closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := [ expression { "," expression } ] closing`
    ///
    /// A list left open at the end of the statement records the closing
    /// token's dedicated error; any other stray token records an
    /// `UnexpectedToken`. Both end the list so the statement parse can
    /// finish and report everything it found.
    pub(in crate::interpreter::parser) fn comma_separated(&mut self,
                                                          closing: &TokenKind)
                                                          -> Vec<Expr> {
        let mut items = Vec::new();

        if self.current().kind == *closing {
            self.eat();
            return items;
        }

        loop {
            items.push(self.expression());

            let current = self.current();

            if current.kind == *closing {
                self.eat();
                break;
            }

            match current.kind {
                TokenKind::Comma => self.eat(),
                TokenKind::Eol => {
                    let error = match closing {
                        TokenKind::CloseParen => {
                            ParseError::ExpectedClosingParen { pos: current.pos }
                        },
                        TokenKind::CloseBracket => {
                            ParseError::ExpectedClosingBracket { pos: current.pos }
                        },
                        _ => ParseError::UnexpectedEndOfInput { pos: current.pos },
                    };
                    self.record(error);
                    break;
                },
                _ => {
                    let error = ParseError::UnexpectedToken { token: current.to_string(),
                                                              pos:   current.pos, };
                    self.record(error);
                    break;
                },
            }
        }

        items
    }
}
