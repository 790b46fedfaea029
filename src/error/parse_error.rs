use thiserror::Error;

use crate::ast::Function;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("Error on line {line}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Found a token that cannot start or continue the current rule.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a statement.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    #[error("Error on line {line}: Expected {expected} but found {found}.")]
    ExpectedToken {
        /// Description of the required token.
        expected: &'static str,
        /// The token (or end of input) actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement was not terminated by `;`.
    #[error("Error on line {line}: Expected ';' after statement but found {found}.")]
    MissingSemicolon {
        /// The token (or end of input) found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to assign to a reserved variable or function name.
    #[error("Error on line {line}: '{name}' is a reserved word.")]
    ReservedWordReassignment {
        /// The reserved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced a name that is neither reserved nor assigned earlier.
    #[error("Error on line {line}: Undefined variable or function: {name}.")]
    UndefinedReference {
        /// The unresolved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A reserved function was called with the wrong number of arguments.
    #[error("Error on line {line}: {function} expects {expected} arguments but {found} were given.")]
    WrongArgumentCount {
        /// The function called.
        function: Function,
        /// The required argument count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The window argument of a reserved function is not an integer literal.
    #[error("Error on line {line}: The second argument of {function} must be an integer literal.")]
    NonIntegerArgument {
        /// The function called.
        function: Function,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The window argument of `HHV`/`LLV` is zero.
    #[error("Error on line {line}: The second argument of {function} must be a positive integer, found {value}.")]
    NonPositiveArgument {
        /// The function called.
        function: Function,
        /// The rejected value.
        value:    i64,
        /// The source line where the error occurred.
        line:     usize,
    },
}
