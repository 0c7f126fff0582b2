use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, value::Value},
    util::num::u64_to_i64_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// The walk is pure: it reads the tree, allocates nothing and keeps no state
/// between calls. For a `BinaryOp` the left operand is always evaluated before
/// the right one.
///
/// # Errors
/// - `RuntimeError::LiteralTooLarge` for a literal above `i64::MAX`.
/// - Any error raised while applying an operator (see [`eval_binary`]).
///
/// # Example
/// ```
/// use calcu::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::evaluate, value::Value},
/// };
///
/// let tree = Expr::binary(Expr::Literal { value: 6, position: 0 },
///                         BinaryOperator::Mul,
///                         Expr::Literal { value: 7, position: 2 },
///                         1);
/// assert_eq!(evaluate(&tree).unwrap(), Value::Integer(42));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, position } => eval_literal(*value, *position),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, *position)
        },
    }
}

fn eval_literal(value: u64, position: usize) -> EvalResult<Value> {
    let n = u64_to_i64_checked(value, RuntimeError::LiteralTooLarge { position })?;
    Ok(Value::Integer(n))
}
