use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an operand: an integer literal or a parenthesised expression.
    ///
    /// The rule is: `factor := INTEGER | "(" expr ")"`
    ///
    /// Parentheses only group; the inner expression is returned as is.
    ///
    /// # Errors
    /// - `SyntaxError::ExpectedOperand` if the current token starts neither
    ///   alternative.
    /// - `SyntaxError::UnexpectedToken` if the closing `)` is missing.
    /// - `SyntaxError::NestingTooDeep` past [`MAX_NESTING_DEPTH`] open groups.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current {
            Token::Integer(value) => {
                let position = self.position;
                self.eat(TokenKind::Integer)?;
                Ok(Expr::Literal { value, position })
            },
            Token::LParen => self.parse_grouping(),
            tok => Err(SyntaxError::ExpectedOperand { found:    tok.kind(),
                                                      position: self.position, }.into()),
        }
    }

    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                     position: self.position, }.into());
        }

        self.eat(TokenKind::LParen)?;
        self.depth += 1;
        let inner = self.parse_expr()?;
        self.depth -= 1;
        self.eat(TokenKind::RParen)?;
        Ok(inner)
    }
}
