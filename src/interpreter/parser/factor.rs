use std::iter::Peekable;

use crate::{
    ast::{Expr, Function},
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_word,
        lexer::Token,
        parser::core::{END_OF_INPUT, ParseResult, Scope, expect, parse_expression},
    },
};

/// Number of arguments every implemented reserved function takes: the
/// series and the window length (or offset).
pub const WINDOW_FUNCTION_ARITY: usize = 2;

/// Parses a factor, the atomic level of the grammar.
///
/// Grammar:
/// ```text
///     factor := number
///             | identifier
///             | identifier "(" expression ("," expression)* ")"
///             | "(" expression ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token cannot start a factor (operators, comparisons, `;`),
/// - the input ends,
/// - a name cannot be resolved,
/// - a parenthesis is left open.
pub(in crate::interpreter::parser) fn parse_factor<'a, I>(tokens: &mut Peekable<I>,
                                                          scope: Scope<'_>)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: scope.end_line });
    };

    match token {
        Token::Number(text) => Ok(Expr::Number { text: text.clone(),
                                                 line: *line, }),
        Token::LParen => parse_grouping(tokens, scope),
        Token::Identifier(name) => parse_identifier_or_call(tokens, name, *line, scope),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line:  *line, }),
    }
}

fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, scope: Scope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, scope)?;
    expect(tokens, &Token::RParen, "')'", scope)?;
    Ok(expr)
}

/// Resolves an identifier that has just been consumed.
///
/// An identifier followed by `(` is a function call. Otherwise it must be a
/// reserved word (bound to an input series when evaluated) or a symbol
/// assigned by an earlier statement.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   line: usize,
                                   scope: Scope<'_>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        return parse_function_call(tokens, name, line, scope);
    }

    if is_reserved_word(name) {
        Ok(Expr::Variable { name: name.to_string(),
                            line })
    } else if scope.symbols.contains_key(name) {
        Ok(Expr::Symbol { name: name.to_string(),
                          line })
    } else {
        Err(ParseError::UndefinedReference { name: name.to_string(),
                                             line })
    }
}

/// Parses the argument list of a call whose `(` has been consumed.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              name: &str,
                              line: usize,
                              scope: Scope<'_>)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let function =
        Function::from_name(name).ok_or_else(|| ParseError::UndefinedReference { name: name.to_string(),
                                                                                 line })?;

    let mut arguments = Vec::new();
    loop {
        arguments.push(parse_expression(tokens, scope)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, line)) => {
                return Err(ParseError::ExpectedToken { expected: "',' or ')'",
                                                       found:    tok.to_string(),
                                                       line:     *line, });
            },
            None => {
                return Err(ParseError::ExpectedToken { expected: "',' or ')'",
                                                       found:    END_OF_INPUT.to_string(),
                                                       line:     scope.end_line, });
            },
        }
    }

    validate_call(function, &arguments, line)?;
    Ok(Expr::FunctionCall { function,
                            arguments,
                            line })
}

/// Checks the shape of a call to an implemented reserved function.
///
/// The call must have exactly two arguments, the second being an integer
/// literal; `HHV` and `LLV` further require it to be positive. Calls to
/// reserved functions without an implementation are left for the evaluator
/// to reject.
fn validate_call(function: Function, arguments: &[Expr], line: usize) -> ParseResult<()> {
    if !function.is_implemented() {
        return Ok(());
    }
    if arguments.len() != WINDOW_FUNCTION_ARITY {
        return Err(ParseError::WrongArgumentCount { function,
                                                    expected: WINDOW_FUNCTION_ARITY,
                                                    found: arguments.len(),
                                                    line });
    }

    let window = arguments[1].integer_literal()
                             .ok_or(ParseError::NonIntegerArgument { function, line })?;
    if function.requires_positive_window() && window <= 0 {
        return Err(ParseError::NonPositiveArgument { function,
                                                     value: window,
                                                     line });
    }
    Ok(())
}
