use std::fmt;

use crate::{
    CompileError, EvalError, Expr, Symbol,
    eval::{divide, finite, logarithm},
};

type Node = Box<dyn Fn(f64) -> Result<f64, EvalError> + Send + Sync>;

/// An expression compiled into a numeric function of one variable.
///
/// Compilation walks the expression tree once and builds a tree of closures,
/// so repeated calls skip symbol lookup and dispatch on node kinds. The
/// compiled function applies the same error checks as [`Expr::eval`].
///
/// A `CompiledExpr` is immutable, `Send`, and `Sync`; it can be shared and
/// called from any number of threads.
pub struct CompiledExpr {
    variable: Symbol,
    expr: Expr,
    root: Node,
}

impl CompiledExpr {
    /// Returns the variable this function takes.
    #[must_use]
    pub fn variable(&self) -> Symbol {
        self.variable
    }

    /// Returns the expression this function was compiled from.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if any operation divides by zero, takes the
    /// logarithm of a non-positive value, or produces a non-finite result.
    pub fn call(&self, x: f64) -> Result<f64, EvalError> {
        (self.root)(x)
    }

    /// Evaluates the function at each value, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvalError`] encountered; no partial output is kept.
    pub fn call_many(&self, xs: &[f64]) -> Result<Vec<f64>, EvalError> {
        xs.iter().map(|&x| self.call(x)).collect()
    }
}

impl fmt::Debug for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpr")
            .field("variable", &self.variable)
            .field("expr", &self.expr.to_string())
            .finish_non_exhaustive()
    }
}

impl Expr {
    /// Compiles the expression into a numeric function of `variable`.
    ///
    /// Every other symbol must already be substituted away.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnboundSymbol`] if the expression depends on
    /// any symbol other than `variable`.
    ///
    /// # Example
    ///
    /// ```
    /// use symgas_symbolic::{gamma_symbol, mach_symbol, temperature_ratio};
    ///
    /// let expr = temperature_ratio(gamma_symbol()).subs_value(gamma_symbol(), 1.4);
    /// let t_ratio = expr.compile(mach_symbol()).unwrap();
    ///
    /// assert_eq!(t_ratio.call(0.0).unwrap(), 1.0);
    /// ```
    pub fn compile(&self, variable: Symbol) -> Result<CompiledExpr, CompileError> {
        if let Some(symbol) = self.free_symbols().into_iter().find(|s| *s != variable) {
            return Err(CompileError::UnboundSymbol { symbol, variable });
        }

        log::trace!("compiling `{self}` as a function of `{variable}`");

        Ok(CompiledExpr {
            variable,
            expr: self.clone(),
            root: lower(self),
        })
    }
}

/// Builds the closure tree for `expr`.
///
/// Assumes the only symbol left in `expr` is the compiled variable.
fn lower(expr: &Expr) -> Node {
    let source = expr.clone();

    match expr {
        Expr::Const(value) => {
            let value = *value;
            Box::new(move |_| finite(value, &source))
        }
        Expr::Symbol(_) => Box::new(move |x| finite(x, &source)),
        Expr::Neg(a) => {
            let a = lower(a);
            Box::new(move |x| Ok(-a(x)?))
        }
        Expr::Add(a, b) => {
            let (a, b) = (lower(a), lower(b));
            Box::new(move |x| finite(a(x)? + b(x)?, &source))
        }
        Expr::Sub(a, b) => {
            let (a, b) = (lower(a), lower(b));
            Box::new(move |x| finite(a(x)? - b(x)?, &source))
        }
        Expr::Mul(a, b) => {
            let (a, b) = (lower(a), lower(b));
            Box::new(move |x| finite(a(x)? * b(x)?, &source))
        }
        Expr::Div(a, b) => {
            let (a, b) = (lower(a), lower(b));
            Box::new(move |x| finite(divide(a(x)?, b(x)?, &source)?, &source))
        }
        Expr::Pow(base, exponent) => {
            let base_fn = lower(base);
            match exponent.as_const() {
                Some(e) => Box::new(move |x| finite(base_fn(x)?.powf(e), &source)),
                None => {
                    let exponent_fn = lower(exponent);
                    Box::new(move |x| finite(base_fn(x)?.powf(exponent_fn(x)?), &source))
                }
            }
        }
        Expr::Ln(a) => {
            let a = lower(a);
            Box::new(move |x| finite(logarithm(a(x)?, &source)?, &source))
        }
    }
}
