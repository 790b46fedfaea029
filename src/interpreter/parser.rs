/// Shared parser helpers.
///
/// Defines the result type, the read-only scope of earlier assignments used
/// for name resolution, and the expression entry point.
pub mod core;

/// Additive and multiplicative expressions.
///
/// Implements the two left-associative precedence levels of the grammar.
pub mod binary;

/// Factors: literals, names, groupings and function calls.
///
/// Resolves identifiers against the reserved words and earlier assignments,
/// and validates the shape of reserved-function calls.
pub mod factor;

/// Statement parsing.
///
/// Distinguishes assignments from bare expressions and checks statement
/// terminators.
pub mod statement;
