use crate::ast::Function;

/// Names bound to caller-supplied input series.
pub const RESERVED_VARIABLES: &[&str] = &["CLOSE", "OPEN", "HIGH", "LOW"];

/// Checks whether a name refers to a reserved variable.
#[must_use]
pub fn is_reserved_variable(name: &str) -> bool {
    RESERVED_VARIABLES.contains(&name)
}

/// Checks whether a name is reserved.
///
/// A reserved word is either a reserved variable or the name of a reserved
/// function, implemented or not. Matching is case-sensitive.
///
/// # Example
/// ```
/// use formulang::interpreter::evaluator::utils::is_reserved_word;
///
/// assert!(is_reserved_word("CLOSE"));
/// assert!(is_reserved_word("EMA"));
/// assert!(!is_reserved_word("close"));
/// assert!(!is_reserved_word("V1"));
/// ```
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    is_reserved_variable(name) || Function::from_name(name).is_some()
}
