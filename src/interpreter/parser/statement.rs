use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_word,
        lexer::Token,
        parser::core::{END_OF_INPUT, ParseResult, Scope, parse_expression},
    },
};

/// Parses a single statement, without its terminating `;`.
///
/// A statement is an assignment when it starts with an identifier
/// immediately followed by `:=` or `:`; anything else is parsed as a bare
/// expression.
///
/// Grammar: `statement := identifier assign_op expression | expression`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
/// - `scope`: Symbols assigned by earlier statements.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, scope: Scope<'_>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens, scope)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(scope.end_line, |(_, l)| *l);
    let expr = parse_expression(tokens, scope)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses an assignment if one starts at the cursor.
///
/// Looks one token past the identifier on a cloned iterator; if the pattern
/// does not match, returns `Ok(None)` and consumes nothing.
///
/// # Errors
/// Returns [`ParseError::ReservedWordReassignment`] when the target is a
/// reserved variable or function name, and propagates errors from the
/// assigned expression.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, scope: Scope<'_>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), line)) = tokens.peek() else {
        return Ok(None);
    };
    let (name, line) = (name.clone(), *line);

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Assign(_), _))) {
        return Ok(None);
    }

    if is_reserved_word(&name) {
        return Err(ParseError::ReservedWordReassignment { name, line });
    }
    tokens.next();
    tokens.next();

    let value = parse_expression(tokens, scope)?;
    Ok(Some(Statement::Assignment { name, value, line }))
}

/// Consumes the `;` that must terminate every statement.
///
/// # Errors
/// Returns [`ParseError::MissingSemicolon`] naming whatever was found
/// instead, including end of input.
pub fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>, scope: Scope<'_>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Semicolon, _)) => Ok(()),
        Some((tok, line)) => Err(ParseError::MissingSemicolon { found: tok.to_string(),
                                                                line:  *line, }),
        None => Err(ParseError::MissingSemicolon { found: END_OF_INPUT.to_string(),
                                                   line:  scope.end_line, }),
    }
}
