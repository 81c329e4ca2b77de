use thiserror::Error;

/// Reasons an interval cannot seed a bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,
    #[error("bracket has zero width")]
    ZeroWidth,
    #[error("residual has the same sign at both bracket endpoints")]
    NoSignChange,
}

/// An interval known to contain a sign change of the residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
    lower_sign: Sign,
}

impl Bracket {
    /// Builds a bracket from ordered endpoints and the residual signs there.
    pub(super) fn new(
        [lower, upper]: [f64; 2],
        lower_sign: Sign,
        upper_sign: Sign,
    ) -> Result<Self, BracketError> {
        if lower_sign == upper_sign {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self {
            lower,
            upper,
            lower_sign,
        })
    }

    /// Returns `[lower, upper]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true once the width is within `x_abs_tol + x_rel_tol·|mid|`.
    #[must_use]
    pub fn is_x_converged(&self, x_abs_tol: f64, x_rel_tol: f64) -> bool {
        self.width() <= x_abs_tol + x_rel_tol * self.midpoint().abs()
    }

    /// Moves whichever endpoint shares `sign` to `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if sign == self.lower_sign {
            self.lower = x;
        } else {
            self.upper = x;
        }
    }
}

/// Sign of a residual, with zero counted as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// Checks that the endpoints are finite and distinct, and sorts them.
pub(super) fn ordered([a, b]: [f64; 2]) -> Result<[f64; 2], BracketError> {
    if !(a.is_finite() && b.is_finite()) {
        return Err(BracketError::NonFinite);
    }
    match a.partial_cmp(&b) {
        Some(std::cmp::Ordering::Less) => Ok([a, b]),
        Some(std::cmp::Ordering::Greater) => Ok([b, a]),
        _ => Err(BracketError::ZeroWidth),
    }
}
