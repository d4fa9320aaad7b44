//! # dateseries
//!
//! Immutable time series of `f64` observations keyed by calendar date.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ds-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! dateseries = "0.1"
//! ```
//!
//! ```rust
//! use dateseries::{Date, DateDoubleSeries};
//!
//! let monday = Date::from_ymd(2015, 1, 5).unwrap();
//! let series: DateDoubleSeries = (0..5).map(|i| (monday + i, 10.0 + i as f64)).collect();
//! assert_eq!(series.len(), 5);
//! assert_eq!(series.latest_value().unwrap(), 14.0);
//!
//! let doubled = series.map_values(|v| v * 2.0);
//! assert_eq!(doubled.get(monday), Some(20.0));
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for dates, points, series and options |
//! | `chrono` | Conversions between `Date` and `chrono::NaiveDate` |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias and numeric aliases.
pub use ds_core as core;

/// Calendar dates and weekdays.
pub use ds_time as time;

/// The series types, builder and options.
pub use ds_series as series;

/// IBOR rate observation over fixing series.
pub use ds_rates as rates;

// ── Prelude-style re-exports ─────────────────────────────────────────────────

pub use ds_core::{Error, Real, Result};
pub use ds_series::{
    BuildOptions, DateCalculation, DateDoubleSeries, Point, Representation, SeriesBuilder,
};
pub use ds_time::{Date, Weekday};
