use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Block, Expr, Program},
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, value::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the variables of one program run and the sink that
/// `output` statements write to. Every variable is bound to a [`Number`] from
/// the moment it is declared; there are no unset variables.
///
/// ## Usage
///
/// A fresh `Context` is created for each program run by [`run_program`]. It
/// can also be built directly to evaluate single expressions or statements.
///
/// # Example
/// ```
/// use intsub::interpreter::{evaluator::core::Context, value::Number};
///
/// let mut context = Context::new(Vec::new());
/// context.declare("x");
///
/// assert_eq!(context.get_variable("x"), Some(Number(0)));
/// assert_eq!(context.get_variable("y"), None);
/// ```
pub struct Context<W> {
    variables: HashMap<String, Number>,
    output:    W,
}

impl<W: Write> Context<W> {
    /// Creates an empty context that writes to `output`.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { variables: HashMap::new(),
               output }
    }

    /// Consumes the context and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Looks up the current value of a variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Number> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to zero, replacing any earlier value.
    pub fn declare(&mut self, name: &str) {
        self.variables.insert(name.to_string(), Number::ZERO);
    }

    /// Overwrites the value of an existing variable.
    ///
    /// # Errors
    /// Returns `UnboundIdentifier` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: Number, line: usize) -> EvalResult<()> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UnboundIdentifier { name: name.to_string(),
                                                          line }),
        }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// Literals evaluate to themselves, variables to their current value and
    /// binary operations evaluate the left operand before the right one.
    ///
    /// # Errors
    /// - `UnboundIdentifier` for a reference to an undeclared variable.
    /// - `DivisionByZero` or `Overflow` from arithmetic.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => {
                self.get_variable(name)
                    .ok_or_else(|| RuntimeError::UnboundIdentifier { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, left, right, *line)
            },
        }
    }

    /// Executes every statement of a block in source order.
    ///
    /// Stops at the first failing statement; output written by earlier
    /// statements is kept.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<()> {
        for statement in &block.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Declares the program's variables, then runs its body.
    ///
    /// Variables are bound to zero in declaration order; a name declared twice
    /// is simply bound twice.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        for identifier in &program.variables {
            self.declare(&identifier.name);
        }
        self.eval_block(&program.body)
    }
}

/// Runs a program against a fresh context, writing its output to `output`.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised by the program.
///
/// # Example
/// ```
/// use intsub::{interpreter::evaluator::core::run_program, parse};
///
/// let program = parse("program P integer x subroutine P() x <- 2 * 21 output x endsubroutine end P")
///     .unwrap();
///
/// let mut out = Vec::new();
/// run_program(&program, &mut out).unwrap();
///
/// assert_eq!(out, b"42\n");
/// ```
pub fn run_program<W: Write>(program: &Program, output: W) -> EvalResult<()> {
    Context::new(output).eval_program(program)
}
