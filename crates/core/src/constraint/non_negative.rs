use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::{Float, Zero};

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Works with any type `T` that implements [`PartialOrd`] and [`Zero`].
///
/// You can construct a value constrained to be non-negative using either the
/// generic [`Constrained::new`] method or the convenient [`NonNegative::new`]
/// associated function.
///
/// # Examples
///
/// ```
/// use linreg_core::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let a = Constrained::<_, NonNegative>::new(2.5).unwrap();
/// assert_eq!(a.into_inner(), 2.5);
///
/// // Associated constructor:
/// let b = NonNegative::new(0).unwrap();
/// assert_eq!(b.as_ref(), &0);
///
/// // Error cases:
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if the value is zero or greater.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns the additive identity (zero) as a constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative floating point values.
///
/// Neither operand is negative or NaN, so the sum is never negative either.
/// Overflow rounds to positive infinity.
/// Integer types are left out because their overflow wraps below zero.
impl<T: Float> Add for Constrained<T, NonNegative> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            _marker: PhantomData,
        }
    }
}
