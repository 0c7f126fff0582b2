use std::fmt;

/// A binary arithmetic operator.
///
/// `Add` and `Sub` share the lowest precedence level, `Mul` and `Div` bind
/// tighter. Both levels are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is strictly owned: every `BinaryOp` owns its two operands through
/// a `Box`, and operands are always built before the node that holds them.
/// Parentheses only group during parsing and never appear as nodes.
///
/// Every node records the byte offset in the source it was parsed from, so the
/// evaluator can point at the operator that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An unsigned integer literal such as `42`.
    Literal {
        /// The literal value as scanned.
        value:    u64,
        /// Byte offset of the first digit.
        position: usize,
    },
    /// A binary operation such as `a + b`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator token.
        position: usize,
    },
}

impl Expr {
    /// Builds a `BinaryOp` node from two finished operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Returns the source byte offset this node was parsed from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Prints the tree fully parenthesised, e.g. `(2 + (3 * 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
