use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult,
            util::num::i64_to_f64_checked};

/// The result of evaluating an expression.
///
/// Integer arithmetic stays in `Integer` as long as it is exact. A division
/// that leaves a remainder produces a `Real`, and a `Real` operand turns the
/// whole operation real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `position`: Source offset for error reporting.
    ///
    /// # Example
    /// ```
    /// use calcu::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(0).unwrap(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(0).unwrap(), 2.5);
    /// ```
    pub fn as_real(self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(r),
            Self::Integer(n) => i64_to_f64_checked(n, RuntimeError::PrecisionLoss { position }),
        }
    }

    /// Returns `true` if the value is an exact zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

/// Integers print in decimal. Reals always carry a fractional part, so `7.0`
/// stays distinguishable from `7`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
