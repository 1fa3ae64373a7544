use std::ops::Neg;

use num_traits::{NumOps, Zero};

/// A real-number-like type usable as the element of regression results.
///
/// Requires ordering, the four arithmetic operations, negation, and a zero.
/// This is implemented automatically for every type meeting those bounds,
/// including `f32`, `f64`, and the signed integers.
pub trait Scalar: Copy + PartialOrd + Zero + NumOps + Neg<Output = Self> {}

impl<T> Scalar for T where T: Copy + PartialOrd + Zero + NumOps + Neg<Output = T> {}
