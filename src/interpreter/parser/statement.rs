use crate::{
    ast::{Binding, GateDecl, Statement},
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses one statement.
    ///
    /// Grammar:
    /// ```text
    ///     program := (WHERE | AND) binding
    ///              | IDENT IS expression
    ///              | GATE gate_decl
    ///              | expression
    /// ```
    /// A leading `where`/`and` marks a binding continuation, to be installed
    /// in the most recently declared gate's captured environment by the
    /// caller. `IDENT IS` is decided with one token of lookahead; everything
    /// else parses as an expression statement.
    pub(crate) fn statement(&mut self) -> Statement {
        match self.current().kind {
            TokenKind::Where => {
                self.eat();
                Statement::Continuation(self.binding())
            },
            TokenKind::Gate => {
                self.eat();
                Statement::Gate(self.gate_decl())
            },
            TokenKind::Identifier if self.peek().kind == TokenKind::Is => {
                Statement::Binding(self.binding())
            },
            _ => Statement::Expression(self.expression()),
        }
    }

    /// Parses a binding.
    ///
    /// Grammar: `binding := IDENT IS expression`
    ///
    /// The direct binding path only enters here after lookahead has seen
    /// `IDENT IS`, so the recorded errors fire for continuations only
    /// (`where` followed by something that is not a binding).
    fn binding(&mut self) -> Binding {
        let label = self.current().clone();

        if label.kind == TokenKind::Identifier {
            self.eat();
        } else {
            self.record(ParseError::ExpectedBinding { token: label.to_string(),
                                                      pos:   label.pos, });
        }

        if self.current().kind == TokenKind::Is {
            self.eat();
        } else {
            let found = self.current();
            let error = ParseError::ExpectedBinding { token: found.to_string(),
                                                      pos:   found.pos, };
            self.record(error);
        }

        Binding { label,
                  value: self.expression() }
    }

    /// Parses a gate declaration, the `gate` keyword already consumed.
    ///
    /// Grammar: `gate_decl := IDENT "(" [ IDENT { "," IDENT } ] ")" "=" expression`
    ///
    /// The `=` is the ordinary equivalence token doing double duty, as in
    /// `gate nand(a, b) = !(a ^ b)`. Missing pieces are recorded in the
    /// global error list and parsing continues, so several problems in one
    /// declaration are all reported.
    fn gate_decl(&mut self) -> GateDecl {
        let label = self.current().clone();

        if label.kind == TokenKind::Identifier {
            self.eat();
        } else {
            self.record(ParseError::MalformedGateDeclaration { details: format!("expected a gate name, found {label}"),
                                                               pos:     label.pos, });
        }

        if self.current().kind == TokenKind::OpenParen {
            self.eat();
        } else {
            let found = self.current();
            let error = ParseError::MalformedGateDeclaration { details: format!("expected `(` after the gate name, found {found}"),
                                                               pos:     found.pos, };
            self.record(error);
        }

        let params = self.parameters();

        if self.current().kind == TokenKind::Eq {
            self.eat();
        } else {
            let found = self.current();
            let error = ParseError::MalformedGateDeclaration { details: format!("expected `=` before the gate body, found {found}"),
                                                               pos:     found.pos, };
            self.record(error);
        }

        GateDecl { label,
                   params,
                   body: self.expression() }
    }

    /// Parses a gate's parameter list up to and including the closing `)`.
    ///
    /// An immediately encountered `)` produces an empty list. Anything that
    /// is not `IDENT`, `,` or `)` ends the list with a recorded error.
    fn parameters(&mut self) -> Vec<crate::interpreter::lexer::Token> {
        let mut params = Vec::new();

        if self.current().kind == TokenKind::CloseParen {
            self.eat();
            return params;
        }

        loop {
            let current = self.current().clone();

            if current.kind == TokenKind::Identifier {
                params.push(current);
                self.eat();
            } else {
                self.record(ParseError::MalformedGateDeclaration { details: format!("expected a parameter name, found {current}"),
                                                                   pos:     current.pos, });
                break;
            }

            match self.current().kind {
                TokenKind::Comma => self.eat(),
                TokenKind::CloseParen => {
                    self.eat();
                    break;
                },
                _ => {
                    let found = self.current();
                    let error = ParseError::MalformedGateDeclaration { details: format!("expected `,` or `)` in the parameter list, found {found}"),
                                                                       pos:     found.pos, };
                    self.record(error);
                    break;
                },
            }
        }

        params
    }
}
