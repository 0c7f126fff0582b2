/// Additive and multiplicative rules.
///
/// Implements the two left-associative precedence levels of the grammar:
/// `expr` over `+`/`-` and `term` over `*`/`/`.
pub mod binary;
/// Parser state and the token consumption primitive.
///
/// Holds the one-token lookahead buffer, [`core::Parser::eat`], and the
/// top-level entry point that rejects trailing input.
pub mod core;
/// Operand rule.
///
/// Parses integer literals and parenthesised sub-expressions.
pub mod primary;
