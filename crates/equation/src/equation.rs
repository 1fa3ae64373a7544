
use linreg_core::{Scalar, UncertainValue};

/// The result of fitting a straight line to a set of points.
///
/// Exactly one variant is active for the lifetime of an equation.
/// Equality is exact and variant-sensitive: a horizontal `FiniteSlope` line is
/// never equal to an `InfiniteSlope` or `Degenerate` equation, whatever its
/// numbers.
///
/// # Examples
///
/// ```
/// use linreg_equation::{LinearRegressionEquation, UncertainValue};
///
/// let slope = UncertainValue::new(3.0, 5.0).unwrap();
/// let intercept_y = UncertainValue::new(-4.0, 2.0).unwrap();
/// let line = LinearRegressionEquation::finite_slope(slope, intercept_y);
///
/// assert_eq!(line.slope(), Some(slope));
/// assert_eq!(line.intercept_x(), Some(4.0 / 3.0));
///
/// let point = LinearRegressionEquation::degenerate(7.0, -4.0);
/// assert_eq!(point.intercept_y(), Some(UncertainValue::exact(-4.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub enum LinearRegressionEquation<T: Scalar> {
    /// A non-vertical line, `y = slope·x + intercept_y`.
    FiniteSlope {
        slope: UncertainValue<T>,
        intercept_y: UncertainValue<T>,
    },

    /// A vertical line, `x = intercept_x`.
    InfiniteSlope { intercept_x: T },

    /// A single point with exactly known coordinates and no direction.
    Degenerate { intercept_x: T, intercept_y: T },
}

impl<T: Scalar> LinearRegressionEquation<T> {
    /// Creates a non-vertical line from its slope and y-intercept.
    #[must_use]
    pub fn finite_slope(slope: UncertainValue<T>, intercept_y: UncertainValue<T>) -> Self {
        Self::FiniteSlope { slope, intercept_y }
    }

    /// Creates a vertical line crossing the x-axis at `intercept_x`.
    #[must_use]
    pub fn infinite_slope(intercept_x: T) -> Self {
        Self::InfiniteSlope { intercept_x }
    }

    /// Creates a degenerate equation for the single point `(intercept_x, intercept_y)`.
    #[must_use]
    pub fn degenerate(intercept_x: T, intercept_y: T) -> Self {
        Self::Degenerate {
            intercept_x,
            intercept_y,
        }
    }

    /// Returns `true` if the fit collapsed to a single point.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }

    /// Returns `true` if the equation is a non-vertical line.
    pub fn has_finite_slope(&self) -> bool {
        matches!(self, Self::FiniteSlope { .. })
    }

    /// Returns `true` if the equation is a horizontal line.
    ///
    /// Only a [`FiniteSlope`](Self::FiniteSlope) line whose slope value is
    /// exactly zero is horizontal; the variance of the slope is ignored.
    pub fn has_zero_slope(&self) -> bool {
        match self {
            Self::FiniteSlope { slope, .. } => slope.value().is_zero(),
            Self::InfiniteSlope { .. } | Self::Degenerate { .. } => false,
        }
    }

    /// Returns the slope, if the line has a finite one.
    pub fn slope(&self) -> Option<UncertainValue<T>> {
        match *self {
            Self::FiniteSlope { slope, .. } => Some(slope),
            Self::InfiniteSlope { .. } | Self::Degenerate { .. } => None,
        }
    }

    /// Returns the y-intercept.
    ///
    /// A vertical line has none.
    /// The point of a degenerate equation is reported with zero variance.
    pub fn intercept_y(&self) -> Option<UncertainValue<T>> {
        match *self {
            Self::FiniteSlope { intercept_y, .. } => Some(intercept_y),
            Self::InfiniteSlope { .. } => None,
            Self::Degenerate { intercept_y, .. } => Some(UncertainValue::exact(intercept_y)),
        }
    }

    /// Returns the x-intercept.
    ///
    /// For a sloped line this is `-(intercept_y / slope)`.
    /// A horizontal line always returns `None`, including the line `y = 0`.
    pub fn intercept_x(&self) -> Option<T> {
        match *self {
            Self::FiniteSlope { slope, intercept_y } => {
                let slope = slope.value();
                if slope.is_zero() {
                    None
                } else {
                    Some(-(intercept_y.value() / slope))
                }
            }
            Self::InfiniteSlope { intercept_x } | Self::Degenerate { intercept_x, .. } => {
                Some(intercept_x)
            }
        }
    }

    /// Returns the value of `y` on the line at `x`.
    ///
    /// Only defined for a [`FiniteSlope`](Self::FiniteSlope) line.
    pub fn y_at(&self, x: T) -> Option<T> {
        match *self {
            Self::FiniteSlope { slope, intercept_y } => {
                Some(slope.value() * x + intercept_y.value())
            }
            Self::InfiniteSlope { .. } | Self::Degenerate { .. } => None,
        }
    }

    /// Returns the value of `x` on the line at `y`.
    ///
    /// A horizontal line has no single answer and returns `None`, as does a
    /// degenerate equation.
    /// A vertical line returns its x-intercept for every `y`.
    pub fn x_at(&self, y: T) -> Option<T> {
        match *self {
            Self::FiniteSlope { slope, intercept_y } => {
                let slope = slope.value();
                if slope.is_zero() {
                    None
                } else {
                    Some((y - intercept_y.value()) / slope)
                }
            }
            Self::InfiniteSlope { intercept_x } => Some(intercept_x),
            Self::Degenerate { .. } => None,
        }
    }

    /// Returns `true` if the point `(x, y)` lies exactly on the equation.
    pub fn contains(&self, x: T, y: T) -> bool {
        match *self {
            Self::FiniteSlope { .. } => self.y_at(x) == Some(y),
            Self::InfiniteSlope { intercept_x } => x == intercept_x,
            Self::Degenerate {
                intercept_x,
                intercept_y,
            } => x == intercept_x && y == intercept_y,
        }
    }
}
