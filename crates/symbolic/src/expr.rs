mod diff;
mod display;
mod ops;
mod simplify;

use std::{collections::BTreeSet, sync::Arc};

use crate::Symbol;

/// An immutable symbolic expression.
///
/// Expressions are trees whose children are shared through [`Arc`], so
/// cloning is cheap and an `Expr` can be sent across threads. Build them with
/// the arithmetic operators, which accept other expressions, [`Symbol`]s, and
/// `f64` constants:
///
/// ```
/// use symgas_symbolic::{Expr, Symbol};
///
/// let x = Symbol::new("x");
/// let e = (x + 1.0) * 2.0;
/// assert_eq!(e.to_string(), "(x + 1)*2");
/// ```
///
/// Every transformation ([`subs`](Expr::subs), [`simplify`](Expr::simplify),
/// [`diff`](Expr::diff)) returns a new expression and leaves the original
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Const(f64),
    /// A symbolic variable.
    Symbol(Symbol),
    /// Negation: `-a`.
    Neg(Arc<Expr>),
    /// Sum: `a + b`.
    Add(Arc<Expr>, Arc<Expr>),
    /// Difference: `a - b`.
    Sub(Arc<Expr>, Arc<Expr>),
    /// Product: `a * b`.
    Mul(Arc<Expr>, Arc<Expr>),
    /// Quotient: `a / b`.
    Div(Arc<Expr>, Arc<Expr>),
    /// Power: `a ^ b`.
    Pow(Arc<Expr>, Arc<Expr>),
    /// Natural logarithm: `ln(a)`.
    Ln(Arc<Expr>),
}

impl Expr {
    /// Creates a constant expression.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Expr::Const(value)
    }

    /// Raises this expression to a power.
    #[must_use]
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Expr::Pow(Arc::new(self), Arc::new(exponent.into()))
    }

    /// Returns the natural logarithm of this expression.
    #[must_use]
    pub fn ln(self) -> Self {
        Expr::Ln(Arc::new(self))
    }

    /// Returns the constant value if this expression is a constant.
    #[must_use]
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this expression is the constant `value`.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_const(&self, value: f64) -> bool {
        self.as_const().is_some_and(|c| c == value)
    }

    /// Returns true if `symbol` appears anywhere in this expression.
    #[must_use]
    pub fn depends_on(&self, symbol: Symbol) -> bool {
        match self {
            Expr::Const(_) => false,
            Expr::Symbol(s) => *s == symbol,
            Expr::Neg(a) | Expr::Ln(a) => a.depends_on(symbol),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => a.depends_on(symbol) || b.depends_on(symbol),
        }
    }

    /// Returns the set of symbols this expression depends on, in name order.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Const(_) => {}
            Expr::Symbol(s) => {
                symbols.insert(*s);
            }
            Expr::Neg(a) | Expr::Ln(a) => a.collect_symbols(symbols),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => {
                a.collect_symbols(symbols);
                b.collect_symbols(symbols);
            }
        }
    }

    /// Replaces every occurrence of `symbol` with `replacement`.
    ///
    /// The result is not simplified; call [`simplify`](Expr::simplify) to fold
    /// any constants the substitution exposed.
    #[must_use]
    pub fn subs(&self, symbol: Symbol, replacement: &Expr) -> Self {
        if !self.depends_on(symbol) {
            return self.clone();
        }

        let sub = |e: &Arc<Expr>| Arc::new(e.subs(symbol, replacement));

        match self {
            Expr::Const(_) => self.clone(),
            Expr::Symbol(s) => {
                if *s == symbol {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Expr::Neg(a) => Expr::Neg(sub(a)),
            Expr::Ln(a) => Expr::Ln(sub(a)),
            Expr::Add(a, b) => Expr::Add(sub(a), sub(b)),
            Expr::Sub(a, b) => Expr::Sub(sub(a), sub(b)),
            Expr::Mul(a, b) => Expr::Mul(sub(a), sub(b)),
            Expr::Div(a, b) => Expr::Div(sub(a), sub(b)),
            Expr::Pow(a, b) => Expr::Pow(sub(a), sub(b)),
        }
    }

    /// Replaces every occurrence of `symbol` with a numeric constant.
    #[must_use]
    pub fn subs_value(&self, symbol: Symbol, value: f64) -> Self {
        self.subs(symbol, &Expr::Const(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Const(value)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Symbol = Symbol::new("x");
    const Y: Symbol = Symbol::new("y");

    #[test]
    fn free_symbols_are_sorted_and_unique() {
        let e = (Y * X) + Expr::from(X).pow(2.0);
        let symbols: Vec<_> = e.free_symbols().into_iter().collect();
        assert_eq!(symbols, vec![X, Y]);
    }

    #[test]
    fn subs_replaces_only_the_target_symbol() {
        let e = X + Y;
        let replaced = e.subs(X, &(Y * 2.0));

        assert!(!replaced.depends_on(X));
        assert!(replaced.depends_on(Y));
        assert_eq!(replaced.to_string(), "y*2 + y");
    }

    #[test]
    fn subs_leaves_original_untouched() {
        let e = X * 3.0;
        let _ = e.subs_value(X, 1.0);
        assert!(e.depends_on(X));
    }

    #[test]
    fn constants_are_recognized() {
        assert_eq!(Expr::constant(2.5).as_const(), Some(2.5));
        assert!(Expr::from(1.0).is_const(1.0));
        assert!(!Expr::from(X).is_const(1.0));
    }
}
