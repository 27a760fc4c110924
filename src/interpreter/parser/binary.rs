use crate::{
    ast::Expr,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// All binary operators share one left-associative precedence tier;
    /// parenthesize to override the left-to-right order.
    ///
    /// Grammar: `expression := unary { BIN_OP unary }`
    pub(crate) fn expression(&mut self) -> Expr {
        let mut left = self.unary();

        while is_binary_operator(&self.current().kind) {
            let op = self.current().clone();
            self.eat();

            let right = self.unary();
            left = Expr::Binary { lhs: Box::new(left),
                                  op,
                                  rhs: Box::new(right), };
        }

        left
    }
}

/// Tests whether a token may appear as a binary operator.
///
/// `BIN_OP ∈ { AND, OR, MI, XOR, EQ, GE, GT, LE, LT }`
#[must_use]
pub(in crate::interpreter::parser) const fn is_binary_operator(kind: &TokenKind) -> bool {
    matches!(kind,
             TokenKind::And
             | TokenKind::Or
             | TokenKind::Mi
             | TokenKind::Xor
             | TokenKind::Eq
             | TokenKind::Ge
             | TokenKind::Gt
             | TokenKind::Le
             | TokenKind::Lt)
}
