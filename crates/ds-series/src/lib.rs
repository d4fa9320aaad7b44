//! # ds-series
//!
//! Immutable date → `f64` time series.
//!
//! A [`DateDoubleSeries`] maps strictly increasing calendar dates to
//! floating-point observations.  It is built once through a
//! [`SeriesBuilder`] (or collected from an iterator) and never changes
//! afterwards; every transformation returns a new series.
//!
//! Storage is either a [`DenseSeries`] (one array slot per calendar
//! position, weekends optionally skipped) or a [`SparseSeries`] (explicit
//! date list).  The builder picks the layout from the density of the data
//! unless [`BuildOptions`] force one.  Callers never observe the difference.
//!
//! NaN is the "no observation" marker: it is never stored, never yielded and
//! never compared.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Accumulating builder.
pub mod builder;

/// Position ↔ date policies for dense storage.
pub mod calculation;

/// Array-backed layout.
pub mod dense;

/// Builder configuration.
pub mod options;

/// The `(date, value)` element type.
pub mod point;

/// The series sum type and its iterator.
pub mod series;

/// Explicit-date layout.
pub mod sparse;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use builder::SeriesBuilder;
pub use calculation::DateCalculation;
pub use dense::DenseSeries;
pub use options::{BuildOptions, Representation, DEFAULT_DENSITY_THRESHOLD};
pub use point::Point;
pub use series::{DateDoubleSeries, Iter};
pub use sparse::SparseSeries;
