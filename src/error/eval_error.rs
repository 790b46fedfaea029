use thiserror::Error;

use crate::ast::{BinaryOperator, Function};

/// Represents all errors that can occur while evaluating a statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A numeric literal whose text is not a valid float (e.g. `1.2.3`).
    #[error("Error on line {line}: '{text}' is not a valid number.")]
    NumberFormat {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A reserved variable with no input series supplied for it.
    #[error("Error on line {line}: Undefined variable: {name}.")]
    UndefinedVariable {
        /// The variable name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A symbol missing from the symbol table.
    #[error("Error on line {line}: Undefined symbol: {name}.")]
    UndefinedSymbol {
        /// The symbol name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A reserved function without an evaluation rule.
    #[error("Error on line {line}: Undefined function: {function}.")]
    UndefinedFunction {
        /// The function called.
        function: Function,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function call whose arguments were never validated by the parser.
    #[error("Error on line {line}: Malformed call to {function}.")]
    MalformedCall {
        /// The function called.
        function: Function,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A zero divisor at some index of the right operand.
    #[error("Error on line {line}: Division by zero at index {index}.")]
    DivisionByZero {
        /// The first index holding a zero divisor.
        index: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Operands of an elementwise operator differ in length.
    #[error("Error on line {line}: Series length mismatch for '{op}': {left} vs {right}.")]
    LengthMismatch {
        /// The operator being applied.
        op:    BinaryOperator,
        /// Length of the left operand.
        left:  usize,
        /// Length of the right operand.
        right: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The input series do not all share one length.
    #[error("Input series '{name}' has length {found}, expected {expected}.")]
    InconsistentSeriesLength {
        /// Name of the first series found with a different length.
        name:     String,
        /// The common length established by the other series.
        expected: usize,
        /// The length of the offending series.
        found:    usize,
    },
}
