//! Equations of fitted lines.
//!
//! A straight-line fit over a stream of points can come out in one of three
//! shapes, modeled by the variants of [`LinearRegressionEquation`]:
//!
//! - a sloped (or horizontal) line with an uncertain slope and y-intercept
//! - a vertical line, which has no finite slope and no y-intercept
//! - a single repeated point, which has no direction at all
//!
//! Quantities that do not exist for a shape are reported as `None`.

mod equation;

pub use equation::LinearRegressionEquation;
pub use linreg_core::{Scalar, UncertainValue, UncertainValueError};
