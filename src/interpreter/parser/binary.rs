use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `8 - 3 - 2`
    /// parses as `(8 - 3) - 2`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(op) = additive_operator(self.current) {
            let position = self.position;
            self.count_operator()?;
            self.eat(self.current.kind())?;
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right, position);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`. Because this rule sits
    /// below [`Parser::parse_expr`], `2 + 3 * 4` parses as `2 + (3 * 4)`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Returns
    /// A binary expression tree combining factor-level nodes.
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = multiplicative_operator(self.current) {
            let position = self.position;
            self.count_operator()?;
            self.eat(self.current.kind())?;
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, right, position);
        }
        Ok(left)
    }
}

const fn additive_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Mul => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::Div),
        _ => None,
    }
}
