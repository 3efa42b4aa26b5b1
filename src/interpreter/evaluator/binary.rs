use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::checked_floor_div,
};

/// Evaluates a binary arithmetic operation between two numbers.
///
/// All operations are checked. Division rounds toward negative infinity.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use intsub::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Number},
/// };
///
/// let result = eval_binary(BinaryOperator::Div, Number(-7), Number(2), 1).unwrap();
/// assert_eq!(result, Number(-4));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   line: usize)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let (a, b) = (left.get(), right.get());
    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            checked_floor_div(a, b)
        },
    };

    result.map(Number)
          .ok_or(RuntimeError::Overflow { line })
}
