use crate::{
    ast::Expr,
    error::{Error, SyntaxError},
    interpreter::lexer::{Scanner, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, Error>;

/// Maximum number of nested parentheses accepted by the parser.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Maximum number of binary operators accepted in one expression.
///
/// Each operator adds one level to the tree, and the tree is walked
/// recursively, so this bounds the stack used by evaluation.
pub const MAX_OPERATORS: usize = 1024;

/// Recursive-descent parser with a single token of lookahead.
///
/// The parser owns its [`Scanner`] and pulls one token at a time. The
/// current token is the only buffered state; it is replaced exclusively by
/// [`Parser::eat`].
///
/// Grammar:
/// ```text
/// expr   := term ( ( '+' | '-' ) term )*
/// term   := factor ( ( '*' | '/' ) factor )*
/// factor := INTEGER | '(' expr ')'
/// ```
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    pub(in crate::interpreter::parser) current:  Token,
    pub(in crate::interpreter::parser) position: usize,
    pub(in crate::interpreter::parser) depth:    usize,
    operators:                                   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and fetches the first token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut scanner = Scanner::new(source);
        let (current, position) = scanner.next_token()?;
        Ok(Self { scanner,
                  current,
                  position,
                  depth: 0,
                  operators: 0 })
    }

    /// Returns the token currently held in the lookahead buffer.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Consumes the current token if it is of the `expected` kind.
    ///
    /// On success the next token is pulled from the scanner into the lookahead
    /// buffer. This is the only way the parser advances.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedToken` if the current token has another kind.
    /// - Any lexical error raised while scanning the next token.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        let found = self.current.kind();
        if found != expected {
            return Err(SyntaxError::UnexpectedToken { expected,
                                                      found,
                                                      position: self.position }.into());
        }

        let (token, position) = self.scanner.next_token()?;
        self.current = token;
        self.position = position;
        Ok(())
    }

    /// Counts the operator at the current position against
    /// [`MAX_OPERATORS`].
    ///
    /// # Errors
    /// `SyntaxError::TooManyOperators` once the limit is exceeded.
    pub(in crate::interpreter::parser) fn count_operator(&mut self) -> ParseResult<()> {
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(SyntaxError::TooManyOperators { limit:    MAX_OPERATORS,
                                                       position: self.position, }.into());
        }
        Ok(())
    }

    /// Parses one complete expression and requires the input to end there.
    ///
    /// Grammar: `input := expr EOF`
    ///
    /// # Errors
    /// - `SyntaxError::TrailingInput` if tokens remain after the expression.
    /// - Any error raised by [`Parser::parse_expr`].
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;
        match self.current {
            Token::EndOfInput => Ok(expr),
            tok => Err(SyntaxError::TrailingInput { found:    tok.kind(),
                                                    position: self.position, }.into()),
        }
    }
}
