//! # calcu
//!
//! calcu evaluates arithmetic expressions written as text: unsigned integer
//! literals, `+ - * /`, and parentheses, with the usual precedence and
//! left-associativity.
//!
//! Evaluation is a three stage pipeline. A scanner produces tokens on demand,
//! a recursive-descent parser pulls them into an expression tree, and an
//! evaluator walks the tree. Every call is independent of every other call.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{evaluator::core::evaluate, parser::core::Parser, value::Value},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` it uses. The
/// tree is built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised while evaluating one
/// line of input. Each error carries the byte offset in the source it refers
/// to.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Wraps them in a single `Error` returned by the public entry points.
pub mod error;
/// Orchestrates the scanning, parsing and evaluation of an expression.
///
/// # Responsibilities
/// - Coordinates the scanner, parser, and evaluator.
/// - Defines the token and value types that flow between them.
pub mod interpreter;
/// Interactive read-evaluate-print loop.
///
/// Reads one line at a time, evaluates it, and prints either the value or the
/// error message until the user types `exit`.
pub mod repl;
/// General utilities for numeric conversion and logging setup.
pub mod util;

/// Parses `source` into an expression tree without evaluating it.
///
/// The whole source must form exactly one expression.
///
/// # Errors
/// Returns the first lexical or syntax error in the source.
///
/// # Examples
/// ```
/// use calcu::parse_expression;
///
/// let tree = parse_expression("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// assert!(parse_expression("2 + 3 4").is_err());
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, Error> {
    let tree = Parser::new(source)?.parse()?;
    tracing::debug!("parsed {tree}");
    Ok(tree)
}

/// Evaluates one arithmetic expression and returns its value.
///
/// The source is scanned, parsed and evaluated in one pass. Nothing is kept
/// between calls, so evaluating the same text twice always gives the same
/// result.
///
/// # Errors
/// - `Error::Lexical` if the source contains a character that starts no token.
/// - `Error::Syntax` if the tokens do not form exactly one expression.
/// - `Error::Runtime` on division by zero or overflow.
///
/// # Examples
/// ```
/// use calcu::{error::Error, evaluate_expression, interpreter::value::Value};
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate_expression("7 / 2").unwrap(), Value::Real(3.5));
///
/// assert!(matches!(evaluate_expression("5 / 0"), Err(Error::Runtime(_))));
/// ```
pub fn evaluate_expression(source: &str) -> Result<Value, Error> {
    let tree = parse_expression(source)?;
    let value = evaluate(&tree)?;
    tracing::debug!("evaluated {tree} = {value}");
    Ok(value)
}
