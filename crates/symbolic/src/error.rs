use thiserror::Error;

use crate::Symbol;

/// Errors that can occur when evaluating an expression numerically.
///
/// Evaluation never returns NaN or infinity silently: any operation whose
/// result would be non-finite is reported as one of these variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A symbol in the expression has no bound value.
    #[error("symbol `{symbol}` has no bound value")]
    UnboundSymbol { symbol: Symbol },

    /// A denominator evaluated to zero.
    ///
    /// For example, the area–Mach relation at `M = 0`, or any pressure or
    /// density relation built with `γ = 1`.
    #[error("division by zero in `{expression}`")]
    DivisionByZero { expression: String },

    /// The argument of a logarithm was zero or negative.
    #[error("logarithm of non-positive value {value} in `{expression}`")]
    LogOfNonPositive { value: f64, expression: String },

    /// An operation produced NaN or infinity.
    #[error("non-finite result {value} in `{expression}`")]
    NonFinite { value: f64, expression: String },
}

/// Errors that can occur when compiling an expression into a numeric function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The expression depends on a symbol other than the compiled variable.
    ///
    /// Substitute a value for it first, e.g. with [`Expr::subs_value`].
    ///
    /// [`Expr::subs_value`]: crate::Expr::subs_value
    #[error("symbol `{symbol}` must be substituted before compiling for `{variable}`")]
    UnboundSymbol { symbol: Symbol, variable: Symbol },
}

/// Returned when a string key does not name any isentropic ratio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ratio key `{0}` (expected one of T_T0, p_p0, rho_rho0, A_Astar)")]
pub struct UnknownRatioKey(pub String);
