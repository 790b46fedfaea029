use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in a formula.
///
/// Every expression evaluates to a full series aligned with the input data.
/// Nodes own their children outright; a tree lives only as long as the
/// statement that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, kept as written in the source.
    ///
    /// The text is converted to a float only when the literal is evaluated, so
    /// malformed literals such as `1.2.3` surface as evaluation errors.
    Number {
        /// The literal text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a reserved variable bound to an input series (e.g.
    /// `CLOSE`).
    Variable {
        /// Name of the reserved variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a symbol assigned by an earlier statement.
    Symbol {
        /// Name of the symbol.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An elementwise arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call of a reserved function (e.g. `MA(CLOSE, 5)`).
    FunctionCall {
        /// The function being called.
        function:  Function,
        /// Arguments in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Returns the line number the expression starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Variable { line, .. }
            | Self::Symbol { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }

    /// Returns the integer written by a numeric literal.
    ///
    /// Window lengths and offsets must be written as plain integer literals;
    /// any other expression (including `2.0` or `1+1`) yields `None`.
    ///
    /// # Example
    /// ```
    /// use formulang::ast::Expr;
    ///
    /// let literal = Expr::Number { text: "5".to_string(),
    ///                              line: 1 };
    /// assert_eq!(literal.integer_literal(), Some(5));
    ///
    /// let real = Expr::Number { text: "2.5".to_string(),
    ///                           line: 1 };
    /// assert_eq!(real.integer_literal(), None);
    /// ```
    #[must_use]
    pub fn integer_literal(&self) -> Option<i64> {
        match self {
            Self::Number { text, .. } => text.parse().ok(),
            _ => None,
        }
    }
}

/// A top-level statement of a formula program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `NAME := expression` (or `NAME : expression`).
    Assignment {
        /// Target symbol.
        name:  String,
        /// Assigned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare expression; evaluated and then discarded.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Elementwise arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Applies the operator to a single pair of points.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// The closed set of reserved function names.
///
/// `MA`, `REF`, `HHV` and `LLV` are implemented. `SMA`, `WMA` and `EMA` are
/// reserved so they can never be assigned to, but calling them fails at
/// evaluation time with an undefined-function error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Adaptive trailing mean.
    Ma,
    /// Lag (or lead) by a fixed offset.
    Ref,
    /// Highest value in a trailing window.
    Hhv,
    /// Lowest value in a trailing window.
    Llv,
    /// Reserved.
    Sma,
    /// Reserved.
    Wma,
    /// Reserved.
    Ema,
}

impl Function {
    /// Every reserved function, in declaration order.
    pub const ALL: [Self; 7] = [Self::Ma,
                                Self::Ref,
                                Self::Hhv,
                                Self::Llv,
                                Self::Sma,
                                Self::Wma,
                                Self::Ema];

    /// Looks up a reserved function by its source name (case-sensitive).
    ///
    /// # Example
    /// ```
    /// use formulang::ast::Function;
    ///
    /// assert_eq!(Function::from_name("HHV"), Some(Function::Hhv));
    /// assert_eq!(Function::from_name("hhv"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The name the function is spelled with in formulas.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ma => "MA",
            Self::Ref => "REF",
            Self::Hhv => "HHV",
            Self::Llv => "LLV",
            Self::Sma => "SMA",
            Self::Wma => "WMA",
            Self::Ema => "EMA",
        }
    }

    /// Whether the function has an evaluation rule.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Ma | Self::Ref | Self::Hhv | Self::Llv)
    }

    /// Whether the window argument must be strictly positive.
    #[must_use]
    pub const fn requires_positive_window(self) -> bool {
        matches!(self, Self::Hhv | Self::Llv)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
