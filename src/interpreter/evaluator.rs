/// Elementwise arithmetic.
///
/// Applies `+`, `-`, `*` and `/` point by point to two equal-length series,
/// reporting division by zero and length mismatches as errors.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context (input series and symbol table), the
/// expression walker and statement execution.
pub mod core;

/// Reserved function evaluation.
///
/// Dispatches calls of reserved functions to their window kernels.
pub mod function;

/// Reserved words.
///
/// The fixed set of names that refer to input series or built-in functions
/// and therefore can never be assigned to.
pub mod utils;
