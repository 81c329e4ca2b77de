//! Numeric invariants checked once, at construction.
//!
//! Gasdynamic inputs have hard physical bounds: a Mach number cannot be
//! negative, stagnation temperature and pressure must be positive, and the
//! isentropic relations divide by `γ − 1`. Wrapping an input in a
//! [`Constrained`] value lets downstream code trust those bounds without
//! checking again.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: zero or greater, for Mach numbers
//! - [`StrictlyPositive`]: greater than zero, for stagnation conditions
//! - [`GreaterThanOne`]: finite and above one, for the specific heat ratio
//!
//! Each marker pairs with the generic [`Constrained<T, C>`] wrapper and also
//! offers a `new()` shorthand. Implement [`Constraint<T>`] on a zero-sized
//! marker to add another bound.

mod greater_than_one;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use greater_than_one::GreaterThanOne;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is not finite")]
    NotFinite,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as [`NonNegative`])
/// or your own [`Constraint<T>`] implementation.
///
/// See the [module documentation](crate::constraint) for details and usage patterns.
///
/// # Example
///
/// ```
/// use symgas_core::constraint::{Constrained, StrictlyPositive};
///
/// let n = Constrained::<_, StrictlyPositive>::new(300.0).unwrap();
/// assert_eq!(n.into_inner(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
