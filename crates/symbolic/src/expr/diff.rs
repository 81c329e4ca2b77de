use crate::{Expr, Symbol};

impl Expr {
    /// Returns the derivative with respect to `symbol`, simplified.
    ///
    /// Powers use the general rule
    /// `d(a^b) = a^b · (b' · ln(a) + b · a' / a)`, reduced to the familiar
    /// `b · a^(b−1) · a'` when the exponent does not depend on `symbol`.
    ///
    /// # Example
    ///
    /// ```
    /// use symgas_symbolic::{Bindings, Expr, Symbol};
    ///
    /// let x = Symbol::new("x");
    /// let d = Expr::from(x).pow(3.0).diff(x);
    ///
    /// let at_two = d.eval(&Bindings::new().with(x, 2.0)).unwrap();
    /// assert_eq!(at_two, 12.0);
    /// ```
    #[must_use]
    pub fn diff(&self, symbol: Symbol) -> Expr {
        self.derivative(symbol).simplify()
    }

    fn derivative(&self, symbol: Symbol) -> Expr {
        if !self.depends_on(symbol) {
            return Expr::Const(0.0);
        }

        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Symbol(s) => Expr::Const(if *s == symbol { 1.0 } else { 0.0 }),
            Expr::Neg(a) => -a.derivative(symbol),
            Expr::Add(a, b) => a.derivative(symbol) + b.derivative(symbol),
            Expr::Sub(a, b) => a.derivative(symbol) - b.derivative(symbol),
            Expr::Mul(a, b) => {
                a.derivative(symbol) * b.as_ref() + a.as_ref() * b.derivative(symbol)
            }
            Expr::Div(a, b) => {
                let numerator =
                    a.derivative(symbol) * b.as_ref() - a.as_ref() * b.derivative(symbol);
                numerator / b.as_ref().clone().pow(2.0)
            }
            Expr::Pow(base, exponent) => {
                let base_expr = base.as_ref().clone();
                let exponent_expr = exponent.as_ref().clone();

                if exponent.depends_on(symbol) {
                    let rate = exponent.derivative(symbol) * base_expr.clone().ln()
                        + exponent_expr.clone() * base.derivative(symbol) / base_expr.clone();
                    base_expr.pow(exponent_expr) * rate
                } else {
                    exponent_expr.clone()
                        * base_expr.pow(exponent_expr - 1.0)
                        * base.derivative(symbol)
                }
            }
            Expr::Ln(a) => a.derivative(symbol) / a.as_ref(),
        }
    }
}
