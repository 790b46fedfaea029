use tracing::trace;

use crate::{
    ast::{Expr, Function},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::window::{highest, lowest, moving_average, reference},
        },
        series::Series,
    },
};

/// Type alias for window kernels.
///
/// A kernel receives the evaluated series and the integer argument of the
/// call and returns a series of the same length.
type WindowFn = fn(&[f64], i64) -> Series;

impl Context {
    /// Evaluates a call of a reserved function.
    ///
    /// The first argument is evaluated to a series; the second is the integer
    /// literal the parser has already validated. Reserved functions without a
    /// kernel fail here, not while parsing.
    ///
    /// # Errors
    /// - [`EvalError::UndefinedFunction`] for `SMA`, `WMA` and `EMA`.
    /// - [`EvalError::MalformedCall`] if the arguments do not have the shape
    ///   the parser guarantees.
    /// - Any error from evaluating the series argument.
    pub(in crate::interpreter::evaluator) fn eval_function_call(&self,
                                                                function: Function,
                                                                arguments: &[Expr],
                                                                line: usize)
                                                                -> EvalResult<Series> {
        let kernel: WindowFn = match function {
            Function::Ma => moving_average,
            Function::Ref => reference,
            Function::Hhv => highest,
            Function::Llv => lowest,
            Function::Sma | Function::Wma | Function::Ema => {
                return Err(EvalError::UndefinedFunction { function, line });
            },
        };

        let [series, window] = arguments else {
            return Err(EvalError::MalformedCall { function, line });
        };
        let window = window.integer_literal()
                           .ok_or(EvalError::MalformedCall { function, line })?;

        let series = self.eval(series)?;
        trace!(%function, window, len = series.len(), "applying window function");
        Ok(kernel(&series, window))
    }
}
