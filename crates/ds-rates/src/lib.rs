//! # ds-rates
//!
//! IBOR rate observation on top of `ds-series`.
//!
//! Historic fixings are held in a [`DateDoubleSeries`](ds_series::DateDoubleSeries)
//! and combined with a forward curve by [`HistoricIborIndexRates`].  A
//! [`RatesProvider`] hands those rates to observation functions such as
//! [`ForwardIborRateObservationFn`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `IborIndex` and common index constants.
pub mod index;

/// Rate observations and observation functions.
pub mod observation;

/// `RatesProvider` and `SimpleRatesProvider`.
pub mod provider;

/// Index rates and forward curves.
pub mod rates;

/// Point sensitivities.
pub mod sensitivity;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use index::IborIndex;
pub use observation::{ForwardIborRateObservationFn, IborRateObservation, RateObservationFn};
pub use provider::{RatesProvider, SimpleRatesProvider};
pub use rates::{FlatForwardCurve, ForwardCurve, HistoricIborIndexRates, IborIndexRates};
pub use sensitivity::IborRateSensitivity;
