/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree produced by the parser bottom-up and applies
/// each operator to its evaluated operands. It is pure and keeps no state
/// between calls.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Chooses between exact integer and real arithmetic.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The scanner reads the raw text and produces tokens one at a time, on
/// demand: integer literals, the four arithmetic operators, parentheses, and a
/// final end-of-input marker.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one token of lookahead pulls tokens from
/// the scanner and encodes precedence and associativity structurally.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting the expected and found token kinds.
/// - Rejects input left over after a complete expression.
pub mod parser;
/// The value module defines the result type of evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum (integer or real).
/// - Provides checked promotion from integer to real.
pub mod value;
