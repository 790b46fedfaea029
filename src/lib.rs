//! # formulang
//!
//! formulang is an interpreter for technical-analysis formula programs, as
//! used by charting and trading platforms. A program is a sequence of
//! `;`-terminated statements evaluated against equal-length input series such
//! as `CLOSE` or `HIGH`:
//!
//! ```text
//! V1:=MA(REF(HHV(CLOSE,2),1),3);
//! V2:=LLV(CLOSE,2);
//! ```
//!
//! Every assignment produces a full series aligned index for index with the
//! inputs. Statements are parsed and evaluated strictly in order, and a name
//! must be assigned in an earlier statement before it can be referenced.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::FormulaError,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::{
            core::Scope,
            statement::{expect_semicolon, parse_statement},
        },
        series::{InputSeries, Series, SymbolTable},
    },
};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` and `Statement` enums that represent a
/// statement as a tree, together with the closed sets of arithmetic
/// operators and reserved functions. The tree is built by the parser and
/// consumed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a program. Every error carries the source line it refers to,
/// and all of them are returned to the caller; none abort the process.
pub mod error;
/// Orchestrates the execution of formula programs.
///
/// This module ties together lexing, parsing, evaluation and the series data
/// model.
pub mod interpreter;
/// General utilities for checked index arithmetic.
pub mod util;

/// Runs a formula program against named input series.
///
/// The inputs are validated first: they must all have the same length. Each
/// statement is then parsed, terminated by `;`, and evaluated before the next
/// one is read. The first failure ends the run.
///
/// # Errors
/// Returns the first [`FormulaError`] encountered; in that case no symbols
/// are returned at all.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use formulang::run;
///
/// let inputs = HashMap::from([("CLOSE".to_string(), vec![10.0, 12.0, 15.0])]);
///
/// let symbols = run("V1:=(1+CLOSE)*2; V2:=REF(V1,1);", inputs.clone()).unwrap();
/// assert_eq!(symbols["V1"], vec![22.0, 26.0, 32.0]);
/// assert!(symbols["V2"][0].is_nan());
///
/// // 'V3' is not defined yet.
/// assert!(run("V1:=V3+1;", inputs).is_err());
/// ```
pub fn run(source: &str, inputs: HashMap<String, Series>) -> Result<SymbolTable, FormulaError> {
    run_with(source, InputSeries::new(inputs)?)
}

/// Runs a formula program against already validated input series.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
pub fn run_with(source: &str, inputs: InputSeries) -> Result<SymbolTable, FormulaError> {
    let tokens = tokenize(source)?;
    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut context = Context::new(inputs);
    let mut stream = tokens.iter().peekable();

    while stream.peek().is_some() {
        let scope = Scope { symbols: context.symbols(),
                            end_line };
        let statement = parse_statement(&mut stream, scope)?;
        expect_semicolon(&mut stream, scope)?;
        context.eval_statement(&statement)?;
    }

    let symbols = context.into_symbols();
    debug!(count = symbols.len(), "formula run complete");
    Ok(symbols)
}
