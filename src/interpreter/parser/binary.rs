use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Scope},
            factor::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, scope: Scope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens, scope)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_term(tokens, scope)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, scope: Scope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens, scope)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let right = parse_factor(tokens, scope)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps an operator token to its [`BinaryOperator`].
///
/// Comparison tokens have no operator yet and map to `None`, like every other
/// token, which ends the expression at that point.
///
/// # Example
/// ```
/// use formulang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Comparison(">".to_string())), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
