use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error at position {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
    /// A literal does not fit the signed 64-bit evaluation type.
    #[error("Error at position {position}: Literal is too large.")]
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// An integer operand cannot be converted to a real number exactly.
    #[error("Error at position {position}: Value is too large to be represented exactly as a \
             real number.")]
    PrecisionLoss {
        /// Byte offset of the operator.
        position: usize,
    },
}
