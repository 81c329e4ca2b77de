use std::{
    ops::{Add, Div, Mul, Neg, Sub},
    sync::Arc,
};

use crate::{Expr, Symbol};

/// Implements a binary operator for every combination of `Expr`, `&Expr`,
/// `Symbol`, and `f64` that has an expression on at least one side.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $variant:ident) => {
        impl<R: Into<Expr>> $trait<R> for Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::$variant(Arc::new(self), Arc::new(rhs.into()))
            }
        }

        impl<R: Into<Expr>> $trait<R> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::$variant(Arc::new(self.clone()), Arc::new(rhs.into()))
            }
        }

        impl<R: Into<Expr>> $trait<R> for Symbol {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::$variant(Arc::new(Expr::Symbol(self)), Arc::new(rhs.into()))
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::$variant(Arc::new(Expr::Const(self)), Arc::new(rhs))
            }
        }

        impl $trait<&Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                Expr::$variant(Arc::new(Expr::Const(self)), Arc::new(rhs.clone()))
            }
        }

        impl $trait<Symbol> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Symbol) -> Expr {
                Expr::$variant(Arc::new(Expr::Const(self)), Arc::new(Expr::Symbol(rhs)))
            }
        }
    };
}

binary_op!(Add, add, Add);
binary_op!(Sub, sub, Sub);
binary_op!(Mul, mul, Mul);
binary_op!(Div, div, Div);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Arc::new(self))
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Arc::new(self.clone()))
    }
}

impl Neg for Symbol {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Arc::new(Expr::Symbol(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Symbol = Symbol::new("x");

    #[test]
    fn operators_build_the_expected_nodes() {
        let e = 1.0 - X;
        assert!(matches!(e, Expr::Sub(ref a, ref b) if a.is_const(1.0) && **b == Expr::Symbol(X)));

        let e = -X;
        assert!(matches!(e, Expr::Neg(_)));

        let base = Expr::from(X);
        let e = &base / 2.0;
        assert!(matches!(e, Expr::Div(_, _)));
        assert_eq!(base, Expr::Symbol(X));
    }

    #[test]
    fn mixed_operands_render_in_order() {
        let e = 2.0 * (X + 1.0) / X;
        assert_eq!(e.to_string(), "2*(x + 1)/x");
    }
}
