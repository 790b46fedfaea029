use std::borrow::Cow;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::EvalError,
    interpreter::series::{InputSeries, Series, SymbolTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the state of one program run.
///
/// This struct holds the input series supplied by the caller and the symbol
/// table filled by assignment statements, in program order.
///
/// ## Usage
///
/// A `Context` is created per run and discarded afterwards; nothing is shared
/// between runs. After the last statement, [`Context::into_symbols`] hands the
/// symbol table back as the run's result.
#[derive(Debug)]
pub struct Context {
    inputs:  InputSeries,
    symbols: SymbolTable,
}

impl Context {
    /// Creates a context with an empty symbol table.
    #[must_use]
    pub fn new(inputs: InputSeries) -> Self {
        Self { inputs,
               symbols: SymbolTable::new() }
    }

    /// The symbols assigned so far.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consumes the context and returns its symbol table.
    #[must_use]
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Evaluates an expression to a full series.
    ///
    /// Children are evaluated eagerly before being combined. Every series
    /// produced has the common length of the input series. Input series and
    /// symbols are borrowed; only computed series are owned.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use formulang::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, series::InputSeries},
    /// };
    ///
    /// let inputs = InputSeries::new(HashMap::from([("CLOSE".to_string(), vec![1.0, 2.0])])).unwrap();
    /// let context = Context::new(inputs);
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "CLOSE".to_string(),
    ///                                                             line: 1, }),
    ///                             op:    BinaryOperator::Mul,
    ///                             right: Box::new(Expr::Number { text: "3".to_string(),
    ///                                                           line: 1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), vec![3.0, 6.0]);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Cow<'_, [f64]>> {
        match expr {
            Expr::Number { text, line } => self.eval_number(text, *line).map(Cow::Owned),
            Expr::Variable { name, line } => {
                self.inputs
                    .get(name)
                    .map(|series| Cow::Borrowed(series.as_slice()))
                    .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone(),
                                                                  line: *line, })
            },
            Expr::Symbol { name, line } => {
                self.symbols
                    .get(name)
                    .map(|series| Cow::Borrowed(series.as_slice()))
                    .ok_or_else(|| EvalError::UndefinedSymbol { name: name.clone(),
                                                                line: *line, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line).map(Cow::Owned),
            Expr::FunctionCall { function,
                                 arguments,
                                 line, } => {
                self.eval_function_call(*function, arguments, *line)
                    .map(Cow::Owned)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// An assignment stores its series under the target name, replacing any
    /// earlier value. A bare expression is evaluated so that its errors
    /// surface, and the result is dropped.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let series = self.eval(value)?.into_owned();
                let replaced = self.symbols.insert(name.clone(), series).is_some();
                debug!(name = %name, line, replaced, "assigned symbol");
            },
            Statement::Expression { expr, line } => {
                self.eval(expr)?;
                debug!(line, "evaluated expression statement, result discarded");
            },
        }
        Ok(())
    }

    /// Parses a numeric literal and broadcasts it over every time index.
    fn eval_number(&self, text: &str, line: usize) -> EvalResult<Series> {
        let value: f64 = text.parse()
                             .map_err(|_| EvalError::NumberFormat { text: text.to_string(),
                                                                    line })?;
        Ok(vec![value; self.inputs.len()])
    }
}
