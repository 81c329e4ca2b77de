//! Symbolic isentropic relations for quasi-1D nozzle flow.
//!
//! The four classical perfect-gas relations (temperature, pressure, and
//! density ratios, plus the area–Mach relation) are built as expression
//! trees over the Mach number `M` and the specific heat ratio `γ`.
//! Keeping them symbolic means a caller can substitute a numeric `γ`,
//! simplify, differentiate, or print a relation before compiling it into a
//! fast numeric function of `M`.
//!
//! # Example
//!
//! ```
//! use symgas_symbolic::{RatioKind, expressions_for_gamma, mach_symbol};
//!
//! let exprs = expressions_for_gamma(1.4);
//! let area_ratio = exprs[RatioKind::AreaRatio].compile(mach_symbol()).unwrap();
//!
//! let at_throat = area_ratio.call(1.0).unwrap();
//! assert!((at_throat - 1.0).abs() < 1e-9);
//! ```

mod compile;
mod error;
mod eval;
mod expr;
mod relations;
mod symbol;

pub use compile::CompiledExpr;
pub use error::{CompileError, EvalError, UnknownRatioKey};
pub use eval::Bindings;
pub use expr::Expr;
pub use relations::{
    RatioExpressions, RatioKind, area_mach_relation, density_ratio, expressions_for_gamma,
    pressure_ratio, ratio_expression, temperature_ratio,
};
pub use symbol::{GAMMA, MACH, Symbol, gamma_symbol, mach_symbol};
