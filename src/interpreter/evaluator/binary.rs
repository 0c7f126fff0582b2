use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary arithmetic operation between two values.
///
/// Two integers use checked integer arithmetic. Division of two integers
/// stays an integer when it is exact and becomes a real otherwise. As soon as
/// one side is real, both sides are promoted to `f64`.
///
/// Division by zero is checked explicitly for both numeric categories.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Source offset of the operator for error reporting.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `RuntimeError::Overflow` if the result does not fit the result type.
/// - `RuntimeError::PrecisionLoss` if an integer cannot be promoted exactly.
///
/// # Example
/// ```
/// use calcu::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let exact = eval_binary(BinaryOperator::Div, Value::Integer(10), Value::Integer(2), 0);
/// assert_eq!(exact.unwrap(), Value::Integer(5));
///
/// let inexact = eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 0);
/// assert_eq!(inexact.unwrap(), Value::Real(3.5));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: usize)
                   -> EvalResult<Value> {
    if op == BinaryOperator::Div && right.is_zero() {
        return Err(RuntimeError::DivisionByZero { position });
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_op(op, a, b, position),
        _ => eval_real_op(op, left.as_real(position)?, right.as_real(position)?, position),
    }
}

fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, position: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div => match a.checked_rem(b) {
            Some(0) => a.checked_div(b),
            Some(_) => {
                return eval_real_op(op,
                                    Value::Integer(a).as_real(position)?,
                                    Value::Integer(b).as_real(position)?,
                                    position);
            },
            None => None,
        },
    };

    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { position })
}

fn eval_real_op(op: BinaryOperator, a: f64, b: f64, position: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
    };

    if result.is_finite() {
        Ok(Value::Real(result))
    } else {
        Err(RuntimeError::Overflow { position })
    }
}
