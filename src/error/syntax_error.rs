use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A specific token was required but another one was found.
    #[error("Error at position {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually present.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// An operand (integer or parenthesised expression) was required.
    #[error("Error at position {position}: Expected integer or '(', found {found}.")]
    ExpectedOperand {
        /// The token kind actually present.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// A complete expression was parsed but input remains.
    #[error("Error at position {position}: Extra input after expression, found {found}.")]
    TrailingInput {
        /// The first unconsumed token kind.
        found:    TokenKind,
        /// Byte offset of the first unconsumed token.
        position: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    #[error("Error at position {position}: Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Byte offset of the parenthesis that exceeded the limit.
        position: usize,
    },
    /// The expression holds more binary operators than the parser allows.
    #[error("Error at position {position}: Expression has more than {limit} operators.")]
    TooManyOperators {
        /// The maximum number of operators.
        limit:    usize,
        /// Byte offset of the first operator past the limit.
        position: usize,
    },
}
