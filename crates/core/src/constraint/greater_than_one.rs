use std::cmp::Ordering;

use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a finite value is strictly greater than one.
///
/// The isentropic relations raise to powers of `1 / (γ − 1)`, so a specific
/// heat ratio must satisfy `γ > 1` for any of them to be defined.
///
/// # Examples
///
/// ```
/// use symgas_core::constraint::{ConstraintError, GreaterThanOne};
///
/// let gamma = GreaterThanOne::new(1.4).unwrap();
/// assert_eq!(gamma.into_inner(), 1.4);
///
/// assert_eq!(GreaterThanOne::new(1.0), Err(ConstraintError::BelowMinimum));
/// assert_eq!(GreaterThanOne::new(f64::INFINITY), Err(ConstraintError::NotFinite));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs `Constrained<T, GreaterThanOne>` if `1 < value < ∞`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if the value is one or less.
    /// - [`ConstraintError::NotFinite`] if the value is infinite.
    /// - [`ConstraintError::NotANumber`] if the value is NaN.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: Float> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) if value.is_finite() => Ok(()),
            Some(Ordering::Greater) => Err(ConstraintError::NotFinite),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
