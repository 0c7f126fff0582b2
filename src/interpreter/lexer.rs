use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the scanner.
/// Whitespace separates tokens and is never produced.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of the source text. Produced by [`Scanner`], never matched.
    EndOfInput,
}

impl Token {
    /// Returns the payload-free kind of the token.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

/// Renders the token as `Token(KIND, value)`, e.g. `Token(INTEGER, 3)` or
/// `Token(EOF, None)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer(_) => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::EndOfInput => "EOF",
        };
        match self {
            Self::Integer(n) => write!(f, "Token({name}, {n})"),
            Self::EndOfInput => write!(f, "Token({name}, None)"),
            other => write!(f, "Token({name}, {})", other.kind()),
        }
    }
}

/// The kind of a [`Token`] without its payload.
///
/// The parser consumes tokens by kind, and syntax errors report the expected
/// and found kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of the source text.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Integer => "integer",
                        Self::Plus => "'+'",
                        Self::Minus => "'-'",
                        Self::Mul => "'*'",
                        Self::Div => "'/'",
                        Self::LParen => "'('",
                        Self::RParen => "')'",
                        Self::EndOfInput => "end of input",
                    })
    }
}

/// Pull-based tokenizer over a single line of source text.
///
/// The scanner produces one token per [`Scanner::next_token`] call, paired
/// with its byte offset in the source. Nothing is buffered: the parser asks for
/// the next token only when it needs it.
///
/// Once the end of the text is reached, every further call returns
/// [`Token::EndOfInput`] again.
///
/// # Example
/// ```
/// use calcu::interpreter::lexer::{Scanner, Token};
///
/// let mut scanner = Scanner::new("12 + 3");
/// assert_eq!(scanner.next_token().unwrap(), (Token::Integer(12), 0));
/// assert_eq!(scanner.next_token().unwrap(), (Token::Plus, 3));
/// assert_eq!(scanner.next_token().unwrap(), (Token::Integer(3), 5));
/// assert_eq!(scanner.next_token().unwrap(), (Token::EndOfInput, 6));
/// assert_eq!(scanner.next_token().unwrap(), (Token::EndOfInput, 6));
/// ```
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Returns the next token and the byte offset where it starts.
    ///
    /// # Errors
    /// - `LexError::UnexpectedCharacter` for a character that starts no token.
    /// - `LexError::LiteralTooLarge` for a digit run beyond `u64::MAX`.
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        let Some(result) = self.lexer.next() else {
            let end = self.lexer.source().len();
            tracing::trace!(position = end, "scanned {}", Token::EndOfInput);
            return Ok((Token::EndOfInput, end));
        };

        let position = self.lexer.span().start;
        match result {
            Ok(token) => {
                tracing::trace!(position, "scanned {token}");
                Ok((token, position))
            },
            Err(()) => Err(self.classify_error(position)),
        }
    }

    /// Turns a failed match at `position` into the matching [`LexError`].
    ///
    /// Only two things can fail: a digit run whose value overflows, or a
    /// character that starts no token at all.
    fn classify_error(&self, position: usize) -> LexError {
        let slice = self.lexer.slice();
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            LexError::LiteralTooLarge { literal: slice.to_string(),
                                        position }
        } else {
            let character = self.lexer.source()[position..].chars()
                                                            .next()
                                                            .unwrap_or(char::REPLACEMENT_CHARACTER);
            LexError::UnexpectedCharacter { character, position }
        }
    }
}

/// Scans `source` completely and returns every token up to and including
/// [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`LexError`] met in the source.
///
/// # Example
/// ```
/// use calcu::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds, [Token::LParen, Token::Integer(1), Token::RParen, Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let (token, position) = scanner.next_token()?;
        tokens.push((token, position));
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(u64)`: The parsed value.
/// - `None`: If the digit run does not fit in a `u64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}
