//! Core types for representing the results of a linear regression.
//!
//! This crate defines the leaf-level building blocks that fitted-line
//! equations are assembled from:
//!
//! - [`UncertainValue`] — a quantity paired with its non-negative variance
//! - [`constraint`] — type-level numeric invariants checked at construction
//! - [`Scalar`] — the numeric bound shared by every generic type in the workspace

pub mod constraint;
mod scalar;
mod uncertain;

pub use scalar::Scalar;
pub use uncertain::{UncertainValue, UncertainValueError};
