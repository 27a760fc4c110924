use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Negation is right-associative, so `!!p` parses as `!(!p)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := NOT unary
    ///            | primary
    /// ```
    pub(in crate::interpreter::parser) fn unary(&mut self) -> Expr {
        if self.current().kind == TokenKind::Not {
            let op = self.current().clone();
            self.eat();

            return Expr::Unary { op,
                                 rhs: Box::new(self.unary()) };
        }

        self.primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := BOOLEAN
    ///              | NUM
    ///              | IDENT [ "(" [ expression { "," expression } ] ")" ]
    ///              | "(" expression ")"
    ///              | "[" [ expression { "," expression } ] "]"
    /// ```
    /// Unexpected tokens do not abort the parse: they are consumed and
    /// turned into an [`Expr::Error`] node carrying a structured error, so
    /// the rest of the statement still gets a look.
    fn primary(&mut self) -> Expr {
        let token = self.current().clone();

        match token.kind {
            TokenKind::Bool(value) => {
                self.eat();
                Expr::Literal { value,
                                pos: token.pos }
            },
            TokenKind::Num(value) => {
                self.eat();
                Expr::Number { value,
                               pos: token.pos }
            },
            TokenKind::Identifier => {
                self.eat();

                if self.current().kind == TokenKind::OpenParen {
                    self.eat();
                    let args = self.comma_separated(&TokenKind::CloseParen);

                    Expr::Call { ident: token,
                                 args }
                } else {
                    Expr::Identifier(token)
                }
            },
            TokenKind::OpenParen => {
                self.eat();
                let inner = self.expression();

                if self.current().kind == TokenKind::CloseParen {
                    self.eat();
                } else {
                    let pos = self.current().pos;
                    self.record(ParseError::ExpectedClosingParen { pos });
                }

                Expr::Grouping(Box::new(inner))
            },
            TokenKind::OpenBracket => {
                self.eat();
                let elements = self.comma_separated(&TokenKind::CloseBracket);

                Expr::Sequence { elements,
                                 pos: token.pos }
            },
            TokenKind::Eol => Expr::Error(ParseError::UnexpectedEndOfInput { pos: token.pos }),
            TokenKind::Err | TokenKind::Invalid => {
                self.eat();

                let message = token.err
                                   .as_ref()
                                   .map_or_else(|| "invalid token".to_string(),
                                                std::string::ToString::to_string);
                Expr::Error(ParseError::Lexical { message,
                                                  pos: token.pos })
            },
            _ => {
                self.eat();
                Expr::Error(ParseError::UnexpectedToken { token: token.to_string(),
                                                          pos:   token.pos, })
            },
        }
    }
}
