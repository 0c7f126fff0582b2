use thiserror::Error;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A digit run too long to fit an unsigned 64-bit integer.
    #[error("Error at position {position}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Byte offset of the first digit.
        position: usize,
    },
}
