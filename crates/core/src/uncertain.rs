use std::ops::{Add, Neg, Sub};

use num_traits::{Float, Zero};
use thiserror::Error;
use tracing::debug;

use crate::constraint::{Constrained, ConstraintError, NonNegative};

/// A measured or estimated quantity paired with its variance.
///
/// The variance is guaranteed to be non-negative.
/// This invariant is verified at construction time and preserved by every
/// operation on the type, including the propagation rules for `+`, `-`, and
/// negation of independent values.
/// Variances are only added for floating point `T`, where overflow saturates
/// at infinity instead of wrapping below zero.
///
/// Equality is exact: two values are equal only if both their values and their
/// variances compare equal.
///
/// # Examples
///
/// ```
/// use linreg_core::{UncertainValue, UncertainValueError};
///
/// let slope = UncertainValue::new(3.0, 5.0).unwrap();
/// assert_eq!(slope.value(), 3.0);
/// assert_eq!(slope.variance(), 5.0);
///
/// assert!(matches!(
///     UncertainValue::new(3.0, -5.0),
///     Err(UncertainValueError::InvalidVariance(_)),
/// ));
/// ```
///
/// Integer values can be stored but not combined:
///
/// ```compile_fail
/// use linreg_core::UncertainValue;
///
/// let a = UncertainValue::new(0_i32, i32::MAX).unwrap();
/// let _ = a + a;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertainValue<T: PartialOrd + Zero> {
    value: T,
    variance: Constrained<T, NonNegative>,
}

/// Errors that can occur when constructing an [`UncertainValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UncertainValueError {
    #[error("invalid variance: {0}")]
    InvalidVariance(ConstraintError),
}

impl<T: PartialOrd + Zero> UncertainValue<T> {
    /// Creates an uncertain value from a value and its variance.
    ///
    /// # Errors
    ///
    /// Returns [`UncertainValueError::InvalidVariance`] if `variance` is
    /// negative or is not comparable to zero (NaN).
    pub fn new(value: T, variance: T) -> Result<Self, UncertainValueError> {
        let variance = NonNegative::new(variance).map_err(|error| {
            debug!(%error, "rejected variance for uncertain value");
            UncertainValueError::InvalidVariance(error)
        })?;

        Ok(Self { value, variance })
    }

    /// Creates a value that is known without uncertainty (zero variance).
    #[must_use]
    pub fn exact(value: T) -> Self {
        Self {
            value,
            variance: NonNegative::zero(),
        }
    }

    /// Returns `true` if the variance is zero.
    pub fn is_exact(&self) -> bool {
        self.variance.as_ref().is_zero()
    }

    /// Consumes the value and returns its `(value, variance)` parts.
    pub fn into_parts(self) -> (T, T) {
        (self.value, self.variance.into_inner())
    }
}

impl<T: PartialOrd + Zero + Copy> UncertainValue<T> {
    /// Returns the measured or estimated quantity.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the variance of the quantity.
    #[must_use]
    pub fn variance(&self) -> T {
        *self.variance.as_ref()
    }
}

impl<T: Float> UncertainValue<T> {
    /// Returns the standard deviation, the square root of the variance.
    #[must_use]
    pub fn std_dev(&self) -> T {
        self.variance.as_ref().sqrt()
    }
}

impl<T: PartialOrd + Zero> TryFrom<(T, T)> for UncertainValue<T> {
    type Error = UncertainValueError;

    fn try_from((value, variance): (T, T)) -> Result<Self, Self::Error> {
        Self::new(value, variance)
    }
}

/// Sums two independent uncertain values; their variances add.
impl<T: Float> Add for UncertainValue<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            variance: self.variance + rhs.variance,
        }
    }
}

/// Subtracts two independent uncertain values; their variances still add.
impl<T: Float> Sub for UncertainValue<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            variance: self.variance + rhs.variance,
        }
    }
}

impl<T: PartialOrd + Zero + Neg<Output = T>> Neg for UncertainValue<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: -self.value,
            variance: self.variance,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use num_traits::Zero;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeStruct};

    use super::UncertainValue;

    impl<T: PartialOrd + Zero + Serialize> Serialize for UncertainValue<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("UncertainValue", 2)?;
            state.serialize_field("value", &self.value)?;
            state.serialize_field("variance", self.variance.as_ref())?;
            state.end()
        }
    }

    /// Deserialized values go through [`UncertainValue::new`], so a negative
    /// variance is rejected here too.
    impl<'de, T: PartialOrd + Zero + Deserialize<'de>> Deserialize<'de> for UncertainValue<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            #[serde(rename = "UncertainValue")]
            struct Parts<U> {
                value: U,
                variance: U,
            }

            let Parts { value, variance } = Parts::deserialize(deserializer)?;
            UncertainValue::new(value, variance).map_err(de::Error::custom)
        }
    }
}
