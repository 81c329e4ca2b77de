use std::collections::BTreeMap;

use crate::{EvalError, Expr, Symbol};

/// Numeric values bound to symbols for evaluation.
///
/// # Example
///
/// ```
/// use symgas_symbolic::{Bindings, gamma_symbol, mach_symbol};
///
/// let bindings = Bindings::new()
///     .with(gamma_symbol(), 1.4)
///     .with(mach_symbol(), 2.0);
///
/// assert_eq!(bindings.get(mach_symbol()), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: BTreeMap<Symbol, f64>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these bindings with `symbol` bound to `value`.
    #[must_use]
    pub fn with(mut self, symbol: Symbol, value: f64) -> Self {
        self.insert(symbol, value);
        self
    }

    /// Binds `symbol` to `value`, replacing any previous binding.
    pub fn insert(&mut self, symbol: Symbol, value: f64) {
        self.values.insert(symbol, value);
    }

    /// Returns the value bound to `symbol`, if any.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<f64> {
        self.values.get(&symbol).copied()
    }
}

impl Expr {
    /// Evaluates the expression with every symbol taken from `bindings`.
    ///
    /// # Errors
    ///
    /// - [`EvalError::UnboundSymbol`] if a symbol has no value.
    /// - [`EvalError::DivisionByZero`] if a denominator evaluates to zero.
    /// - [`EvalError::LogOfNonPositive`] if a logarithm argument is `≤ 0`.
    /// - [`EvalError::NonFinite`] if any operation yields NaN or infinity.
    pub fn eval(&self, bindings: &Bindings) -> Result<f64, EvalError> {
        let value = match self {
            Expr::Const(value) => *value,
            Expr::Symbol(symbol) => bindings
                .get(*symbol)
                .ok_or(EvalError::UnboundSymbol { symbol: *symbol })?,
            Expr::Neg(a) => -a.eval(bindings)?,
            Expr::Add(a, b) => a.eval(bindings)? + b.eval(bindings)?,
            Expr::Sub(a, b) => a.eval(bindings)? - b.eval(bindings)?,
            Expr::Mul(a, b) => a.eval(bindings)? * b.eval(bindings)?,
            Expr::Div(a, b) => divide(a.eval(bindings)?, b.eval(bindings)?, self)?,
            Expr::Pow(a, b) => a.eval(bindings)?.powf(b.eval(bindings)?),
            Expr::Ln(a) => logarithm(a.eval(bindings)?, self)?,
        };
        finite(value, self)
    }
}

/// Divides `numerator` by `denominator`, rejecting a zero denominator.
pub(crate) fn divide(numerator: f64, denominator: f64, expr: &Expr) -> Result<f64, EvalError> {
    if denominator == 0.0 {
        return Err(EvalError::DivisionByZero {
            expression: expr.to_string(),
        });
    }
    Ok(numerator / denominator)
}

/// Takes the natural logarithm of `value`, rejecting non-positive arguments.
pub(crate) fn logarithm(value: f64, expr: &Expr) -> Result<f64, EvalError> {
    if value <= 0.0 {
        return Err(EvalError::LogOfNonPositive {
            value,
            expression: expr.to_string(),
        });
    }
    Ok(value.ln())
}

/// Passes `value` through if it is finite.
pub(crate) fn finite(value: f64, expr: &Expr) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite {
            value,
            expression: expr.to_string(),
        })
    }
}
