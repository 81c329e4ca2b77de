use std::sync::Arc;

use crate::Expr;

impl Expr {
    /// Returns an algebraically equivalent, usually smaller, expression.
    ///
    /// Simplification works bottom-up and applies:
    ///
    /// - constant folding (`2*3 → 6`, `1.4 - 1 → 0.4`, `ln(1) → 0`);
    /// - identities: `x + 0`, `x - 0`, `x*1`, `x*0`, `x/1`, `0/x`, `x^1`,
    ///   `x^0`, `1^x`, `--x`, and `x - x`;
    /// - merging of constant factors (`2*(3*x) → 6*x`).
    ///
    /// A fold whose result would be NaN or infinite (such as `1/0` or
    /// `(-8)^0.5`) is left in place, so numeric evaluation can report it as
    /// an error instead of yielding a silent non-finite value. Identities
    /// that would discard such a subexpression (`0*(1/0)`, `1^(1/0)`) are
    /// not applied.
    #[must_use]
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Const(_) | Expr::Symbol(_) => self.clone(),
            Expr::Neg(a) => negate(a.simplify()),
            Expr::Add(a, b) => add(a.simplify(), b.simplify()),
            Expr::Sub(a, b) => sub(a.simplify(), b.simplify()),
            Expr::Mul(a, b) => mul(a.simplify(), b.simplify()),
            Expr::Div(a, b) => div(a.simplify(), b.simplify()),
            Expr::Pow(a, b) => pow(a.simplify(), b.simplify()),
            Expr::Ln(a) => ln(a.simplify()),
        }
    }
}

/// Returns true if `expr` holds a symbol-free subexpression that could not be
/// folded to a constant, such as `1/0`.
fn has_unfolded_constant(expr: &Expr) -> bool {
    match expr {
        Expr::Const(_) | Expr::Symbol(_) => false,
        _ if expr.free_symbols().is_empty() => true,
        Expr::Neg(a) | Expr::Ln(a) => has_unfolded_constant(a),
        Expr::Add(a, b)
        | Expr::Sub(a, b)
        | Expr::Mul(a, b)
        | Expr::Div(a, b)
        | Expr::Pow(a, b) => has_unfolded_constant(a) || has_unfolded_constant(b),
    }
}

/// Folds two constants with `op` if the result is finite.
fn fold(a: &Expr, b: &Expr, op: impl Fn(f64, f64) -> f64) -> Option<Expr> {
    let value = op(a.as_const()?, b.as_const()?);
    value.is_finite().then_some(Expr::Const(value))
}

fn negate(a: Expr) -> Expr {
    match a {
        Expr::Const(value) => Expr::Const(-value),
        Expr::Neg(inner) => Arc::unwrap_or_clone(inner),
        other => Expr::Neg(Arc::new(other)),
    }
}

fn add(a: Expr, b: Expr) -> Expr {
    if let Some(folded) = fold(&a, &b, |x, y| x + y) {
        return folded;
    }
    if a.is_const(0.0) {
        return b;
    }
    if b.is_const(0.0) {
        return a;
    }
    Expr::Add(Arc::new(a), Arc::new(b))
}

fn sub(a: Expr, b: Expr) -> Expr {
    if let Some(folded) = fold(&a, &b, |x, y| x - y) {
        return folded;
    }
    if b.is_const(0.0) {
        return a;
    }
    if a.is_const(0.0) {
        return negate(b);
    }
    if a == b && !has_unfolded_constant(&a) {
        return Expr::Const(0.0);
    }
    Expr::Sub(Arc::new(a), Arc::new(b))
}

fn mul(a: Expr, b: Expr) -> Expr {
    if let Some(folded) = fold(&a, &b, |x, y| x * y) {
        return folded;
    }

    // Keep a constant factor on the left.
    let (a, b) = if b.as_const().is_some() { (b, a) } else { (a, b) };

    if a.is_const(0.0) && !has_unfolded_constant(&b) {
        return Expr::Const(0.0);
    }
    if a.is_const(1.0) {
        return b;
    }
    if a.is_const(-1.0) {
        return negate(b);
    }

    // c1*(c2*x) → (c1*c2)*x
    if let Expr::Mul(inner_const, rest) = &b
        && let Some(folded) = fold(&a, inner_const, |x, y| x * y)
    {
        return mul(folded, (**rest).clone());
    }

    Expr::Mul(Arc::new(a), Arc::new(b))
}

fn div(a: Expr, b: Expr) -> Expr {
    if let Some(folded) = fold(&a, &b, |x, y| x / y) {
        return folded;
    }
    if b.is_const(1.0) {
        return a;
    }
    if b.is_const(-1.0) {
        return negate(a);
    }
    if a.is_const(0.0) && b.as_const().is_none() && !has_unfolded_constant(&b) {
        return Expr::Const(0.0);
    }
    Expr::Div(Arc::new(a), Arc::new(b))
}

fn pow(base: Expr, exponent: Expr) -> Expr {
    if let Some(folded) = fold(&base, &exponent, f64::powf) {
        return folded;
    }
    if exponent.is_const(1.0) {
        return base;
    }
    if exponent.is_const(0.0) && !has_unfolded_constant(&base) {
        return Expr::Const(1.0);
    }
    if base.is_const(1.0) && !has_unfolded_constant(&exponent) {
        return Expr::Const(1.0);
    }
    Expr::Pow(Arc::new(base), Arc::new(exponent))
}

fn ln(a: Expr) -> Expr {
    match a.as_const() {
        Some(value) if value > 0.0 => Expr::Const(value.ln()),
        _ => Expr::Ln(Arc::new(a)),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{Expr, Symbol};

    const X: Symbol = Symbol::new("x");

    #[test]
    fn folds_constants() {
        let e = (Expr::constant(1.4) - 1.0) / 2.0;
        let value = e.simplify().as_const().expect("should fold to a constant");
        assert_relative_eq!(value, 0.2, epsilon = 1e-15);
    }

    #[test]
    fn removes_identities() {
        assert_eq!((X + 0.0).simplify(), Expr::Symbol(X));
        assert_eq!((0.0 + X).simplify(), Expr::Symbol(X));
        assert_eq!((X * 1.0).simplify(), Expr::Symbol(X));
        assert_eq!((X * 0.0).simplify(), Expr::Const(0.0));
        assert_eq!((X / 1.0).simplify(), Expr::Symbol(X));
        assert_eq!(Expr::from(X).pow(1.0).simplify(), Expr::Symbol(X));
        assert_eq!(Expr::from(X).pow(0.0).simplify(), Expr::Const(1.0));
        assert_eq!(Expr::constant(1.0).pow(X).simplify(), Expr::Const(1.0));
        assert_eq!((-(-X)).simplify(), Expr::Symbol(X));
        assert_eq!((X - X).simplify(), Expr::Const(0.0));
        assert_eq!((0.0 - X).simplify(), -X);
    }

    #[test]
    fn merges_constant_factors() {
        let e = 2.0 * (3.0 * X);
        assert_eq!(e.simplify(), 6.0 * X);

        let e = (X * 3.0) * 2.0;
        assert_eq!(e.simplify(), 6.0 * X);
    }

    #[test]
    fn leaves_non_finite_folds_in_place() {
        let e = Expr::constant(1.0) / (Expr::constant(1.0) - 1.0);
        let simplified = e.simplify();
        assert_eq!(simplified, Expr::constant(1.0) / 0.0);

        let e = Expr::constant(-8.0).pow(0.5);
        assert!(matches!(e.simplify(), Expr::Pow(_, _)));

        let e = Expr::constant(-1.0).ln();
        assert!(matches!(e.simplify(), Expr::Ln(_)));
    }

    #[test]
    fn identities_keep_singular_subexpressions() {
        let singular = Expr::constant(1.0) / 0.0;

        let e = Expr::constant(1.0).pow(singular.clone());
        assert!(matches!(e.simplify(), Expr::Pow(_, _)));

        let e = 0.0 * (X + singular.clone());
        assert!(matches!(e.simplify(), Expr::Mul(_, _)));

        let e = (X + singular.clone()) - (X + singular);
        assert!(matches!(e.simplify(), Expr::Sub(_, _)));
    }

    #[test]
    fn zero_over_zero_is_not_folded() {
        let e = Expr::constant(0.0) / 0.0;
        assert!(matches!(e.simplify(), Expr::Div(_, _)));
    }

    #[test]
    fn simplify_is_idempotent() {
        let e = ((X + 0.0) * (Expr::constant(2.0) / 4.0)).pow(Expr::constant(3.0) - 2.0);
        let once = e.simplify();
        assert_eq!(once.simplify(), once);
        assert_eq!(once, 0.5 * X);
    }
}
