/// Lexing errors.
///
/// Raised by the scanner when it meets a character that starts no token, or a
/// digit run that does not fit an unsigned 64-bit integer.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree: division by zero, arithmetic overflow, and values that cannot be
/// represented in the result type.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the parser when the current token does not fit the grammar rule
/// being parsed.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure of a single evaluation request.
///
/// Every stage aborts the request on its first error; there is no recovery and
/// no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The scanner met input it cannot tokenize.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
