/// The evaluator module computes series from AST nodes.
///
/// The evaluator walks one statement's syntax tree, evaluates children
/// eagerly, applies elementwise arithmetic and the windowed functions, and
/// records assignments in the symbol table.
///
/// # Responsibilities
/// - Broadcasts numeric literals to the length of the input series.
/// - Resolves reserved variables and earlier symbols to their series.
/// - Reports runtime errors such as division by zero or malformed literals.
pub mod evaluator;
/// The lexer module tokenizes formula text for further parsing.
///
/// The lexer reads the raw program text and produces a flat stream of tokens
/// (numbers, identifiers, operators, parentheses, assignment operators and
/// semicolons), each tagged with its source line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Skips whitespace.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds syntax trees from tokens, one statement at a time.
///
/// The parser processes the token stream produced by the lexer with a
/// recursive-descent grammar and resolves every name as it goes, against the
/// reserved words and the symbols assigned by earlier statements.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Validates syntax, name resolution and the shape of reserved-function
///   calls, reporting errors with line info.
/// - Enforces the `;` terminator after every statement.
pub mod parser;
/// The series module defines the data a run operates on.
///
/// # Responsibilities
/// - Defines `Series` and the `SymbolTable` returned by a run.
/// - Validates that all input series share one length.
pub mod series;
