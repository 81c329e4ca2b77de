use symgas_core::constraint::ConstraintError;
use symgas_solvers::bisection;
use symgas_symbolic::{CompileError, EvalError, RatioKind};
use thiserror::Error;

/// Errors that can occur when building or evaluating an isentropic nozzle.
#[derive(Debug, Error)]
pub enum NozzleError {
    /// The specific heat ratio is not a finite value greater than one.
    #[error("specific heat ratio must be finite and greater than one, got {value}")]
    InvalidGamma {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// A Mach number is negative or NaN.
    #[error("invalid Mach number {value} at index {index}")]
    InvalidMach {
        index: usize,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// A stagnation reference value is not strictly positive.
    #[error("stagnation {quantity} must be strictly positive, got {value} (SI)")]
    InvalidStagnation {
        quantity: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// `A/A*` was requested for a fluid at rest.
    ///
    /// The area ratio grows without bound as `M → 0`.
    #[error("area ratio A/A* is undefined at M = 0 (index {index})")]
    AreaRatioAtRest { index: usize },

    /// A compiled relation failed to evaluate.
    #[error("failed to evaluate {kind} at M = {mach}")]
    Evaluation {
        kind: RatioKind,
        mach: f64,
        #[source]
        source: EvalError,
    },

    /// A relation could not be compiled into a function of `M`.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A target area ratio below one has no Mach number solution.
    #[error("area ratio must be finite and at least one, got {value}")]
    InvalidAreaRatio { value: f64 },

    /// The supersonic search bound is not a finite value greater than one.
    #[error("maximum Mach number must be finite and greater than one, got {value}")]
    InvalidMaxMach {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The area–Mach inversion failed.
    #[error("area-Mach inversion failed for A/A* = {area_ratio}")]
    Inversion {
        area_ratio: f64,
        #[source]
        source: bisection::Error,
    },
}
