use crate::interpreter::value::Number;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression evaluates to a [`Number`]. Each variant records the
/// source line it started on for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, possibly negative (`-5`).
    Number {
        /// The constant value.
        value: Number,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a declared variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
}

/// Represents a statement inside the subroutine body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name <- value`, overwriting a declared variable.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `output value`, writing the value in decimal.
    Output {
        /// The value to write.
        value:   Expr,
        /// Whether a newline follows the number. The grammar always sets
        /// this; `false` is only produced by building the node directly.
        newline: bool,
        /// Line number in the source code.
        line:    usize,
    },
}

/// An ordered sequence of statements: the subroutine body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl Block {
    /// Appends a statement, keeping source order.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Returns the number of statements in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if the block has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A name listed in an `integer` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The declared name.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// The root of every parsed source: `program NAME ... end NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The name after `program` (and after `end`).
    pub name:      String,
    /// Every declared variable across all `integer` lines, in order.
    /// Duplicates are kept.
    pub variables: Vec<Identifier>,
    /// The subroutine body.
    pub body:      Block,
    /// Line number of the `program` keyword.
    pub line:      usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
