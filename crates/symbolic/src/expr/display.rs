use std::fmt;

use crate::Expr;

// Binding strength, loosest first.
const SUM: u8 = 1;
const PRODUCT: u8 = 2;
const UNARY: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Const(value) if value.is_sign_negative() => UNARY,
            Expr::Const(_) | Expr::Symbol(_) | Expr::Ln(_) => ATOM,
            Expr::Neg(_) => UNARY,
            Expr::Add(..) | Expr::Sub(..) => SUM,
            Expr::Mul(..) | Expr::Div(..) => PRODUCT,
            Expr::Pow(..) => POWER,
        }
    }

    /// Writes `self`, wrapped in parentheses if it binds looser than `min`.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Renders an expression in infix form with minimal parentheses.
///
/// Powers are written with `^`, products with `*`, and constants with
/// Rust's shortest round-trip formatting (so `2.0` renders as `2`).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{value}"),
            Expr::Symbol(symbol) => write!(f, "{symbol}"),
            Expr::Neg(a) => {
                f.write_str("-")?;
                a.fmt_operand(f, POWER)
            }
            Expr::Add(a, b) => {
                a.fmt_operand(f, SUM)?;
                f.write_str(" + ")?;
                b.fmt_operand(f, SUM)
            }
            Expr::Sub(a, b) => {
                a.fmt_operand(f, SUM)?;
                f.write_str(" - ")?;
                b.fmt_operand(f, PRODUCT)
            }
            Expr::Mul(a, b) => {
                a.fmt_operand(f, PRODUCT)?;
                f.write_str("*")?;
                b.fmt_operand(f, PRODUCT)
            }
            Expr::Div(a, b) => {
                a.fmt_operand(f, PRODUCT)?;
                f.write_str("/")?;
                b.fmt_operand(f, UNARY)
            }
            Expr::Pow(a, b) => {
                a.fmt_operand(f, ATOM)?;
                f.write_str("^")?;
                b.fmt_operand(f, ATOM)
            }
            Expr::Ln(a) => write!(f, "ln({a})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expr, Symbol};

    const X: Symbol = Symbol::new("x");
    const Y: Symbol = Symbol::new("y");

    #[test]
    fn sums_and_differences() {
        assert_eq!((X + Y).to_string(), "x + y");
        assert_eq!((X - (Y + 1.0)).to_string(), "x - (y + 1)");
        assert_eq!(((X - Y) - 1.0).to_string(), "x - y - 1");
    }

    #[test]
    fn products_and_quotients() {
        assert_eq!((X * (Y + 1.0)).to_string(), "x*(y + 1)");
        assert_eq!((X / (Y * 2.0)).to_string(), "x/(y*2)");
        assert_eq!(((X + 1.0) / 2.0).to_string(), "(x + 1)/2");
    }

    #[test]
    fn powers_wrap_compound_operands() {
        let e = (X + 1.0).pow(Expr::from(Y) / 2.0);
        assert_eq!(e.to_string(), "(x + 1)^(y/2)");

        let e = Expr::from(X).pow(-1.0);
        assert_eq!(e.to_string(), "x^(-1)");
    }

    #[test]
    fn negation_and_logarithm() {
        assert_eq!((-(X * Y)).to_string(), "-(x*y)");
        assert_eq!((-X).to_string(), "-x");
        assert_eq!(Expr::from(X).ln().to_string(), "ln(x)");
    }

    #[test]
    fn constants_use_shortest_form() {
        assert_eq!(Expr::constant(2.0).to_string(), "2");
        assert_eq!(Expr::constant(0.2).to_string(), "0.2");
    }
}
