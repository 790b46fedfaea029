/// Lexing and parsing errors.
///
/// Defines all error types that can occur while tokenizing a formula or
/// building its syntax tree, including name resolution and call-shape checks
/// that happen before a statement runs.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types raised while computing series: malformed numeric
/// literals, missing input data, division by zero and length mismatches.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
use thiserror::Error;

/// The single error type returned by a program run.
///
/// A run stops at the first failure, whatever stage it comes from, and no
/// partial symbol table is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// The program text could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement parsed but could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
