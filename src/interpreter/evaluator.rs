/// Binary operator evaluation logic.
///
/// Applies `+ - * /` to two evaluated operands, choosing between exact
/// integer arithmetic and real arithmetic.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the tree walk and the evaluator's result type.
pub mod core;
