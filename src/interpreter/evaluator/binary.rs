use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        series::Series,
    },
};

impl Context {
    /// Evaluates both operands of a binary expression and combines them
    /// point by point.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&self,
                                                            left: &Expr,
                                                            op: BinaryOperator,
                                                            right: &Expr,
                                                            line: usize)
                                                            -> EvalResult<Series> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        apply_elementwise(op, &left, &right, line)
    }
}

/// Applies an arithmetic operator to two series index by index.
///
/// `NaN` points propagate through the arithmetic. A zero anywhere in the
/// divisor is an error rather than an infinity, and so is a pair of operands
/// of different lengths.
///
/// # Errors
/// - [`EvalError::LengthMismatch`] if the operands differ in length.
/// - [`EvalError::DivisionByZero`] with the first index whose divisor is zero.
///
/// # Example
/// ```
/// use formulang::{
///     ast::BinaryOperator, error::EvalError, interpreter::evaluator::binary::apply_elementwise,
/// };
///
/// let sum = apply_elementwise(BinaryOperator::Add, &[1.0, 2.0], &[10.0, 20.0], 1).unwrap();
/// assert_eq!(sum, vec![11.0, 22.0]);
///
/// let err = apply_elementwise(BinaryOperator::Div, &[1.0, 2.0], &[1.0, 0.0], 3).unwrap_err();
/// assert_eq!(err, EvalError::DivisionByZero { index: 1, line: 3 });
/// ```
pub fn apply_elementwise(op: BinaryOperator,
                         left: &[f64],
                         right: &[f64],
                         line: usize)
                         -> EvalResult<Series> {
    if left.len() != right.len() {
        return Err(EvalError::LengthMismatch { op,
                                               left: left.len(),
                                               right: right.len(),
                                               line });
    }

    if op == BinaryOperator::Div
       && let Some(index) = right.iter().position(|&divisor| divisor == 0.0)
    {
        return Err(EvalError::DivisionByZero { index, line });
    }

    Ok(left.iter()
           .zip(right)
           .map(|(&l, &r)| op.apply(l, r))
           .collect())
}
