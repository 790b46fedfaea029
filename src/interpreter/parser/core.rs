use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive, series::SymbolTable},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How a missing token is described in error messages.
pub(in crate::interpreter::parser) const END_OF_INPUT: &str = "end of input";

/// What a statement may refer to besides its own tokens.
///
/// Name resolution happens while parsing: a symbol must be assigned in an
/// earlier statement before it can be referenced, so forward references are
/// rejected here rather than during evaluation. `end_line` is the line of the
/// program's last token, reported by errors raised at end of input.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'s> {
    /// Symbols assigned by the statements before the current one.
    pub symbols:  &'s SymbolTable,
    /// Line of the last token in the program.
    pub end_line: usize,
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level and recursively descends.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `scope`: Names visible to the expression.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use formulang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         lexer::tokenize,
///         parser::core::{Scope, parse_expression},
///     },
/// };
///
/// let tokens = tokenize("CLOSE - 1").unwrap();
/// let symbols = HashMap::new();
/// let scope = Scope { symbols:  &symbols,
///                     end_line: 1, };
///
/// let expr = parse_expression(&mut tokens.iter().peekable(), scope).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, scope: Scope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, scope)
}

/// Consumes the next token and checks that it is `expected`.
///
/// `description` names the expected token in the error message.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &'static str,
                                                    scope: Scope<'_>)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected: description,
                                                             found:    tok.to_string(),
                                                             line:     *line, }),
        None => Err(ParseError::ExpectedToken { expected: description,
                                                found:    END_OF_INPUT.to_string(),
                                                line:     scope.end_line, }),
    }
}
