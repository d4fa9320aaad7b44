//! IBOR index rates: historic fixings in front of a forward curve.
//!
//! A rate for a fixing date is either *known* (the fixing already happened
//! and is stored in a [`DateDoubleSeries`]) or *forecast* (taken from a
//! [`ForwardCurve`]).  Only forecast rates carry a curve sensitivity.

use ds_core::{ensure, Error, Rate, Result};
use ds_series::DateDoubleSeries;
use ds_time::Date;
use tracing::{debug, trace};

use crate::index::IborIndex;
use crate::sensitivity::IborRateSensitivity;

/// Rates for a single IBOR index as seen on a valuation date.
pub trait IborIndexRates: std::fmt::Debug + Send + Sync {
    /// The index the rates are for.
    fn index(&self) -> &IborIndex;

    /// The date the rates are valid on.
    fn valuation_date(&self) -> Date;

    /// The rate observed (or forecast) for `fixing_date`.
    fn rate(&self, fixing_date: Date) -> Result<Rate>;

    /// Sensitivity of [`rate`](Self::rate) to the forward curve.
    ///
    /// `None` when the rate is a known fixing and therefore insensitive.
    fn point_sensitivity(&self, fixing_date: Date) -> Result<Option<IborRateSensitivity>>;
}

/// Forward rates of an index by fixing date.
pub trait ForwardCurve: std::fmt::Debug + Send + Sync {
    /// The forward rate for `fixing_date`.
    fn forward_rate(&self, fixing_date: Date) -> Result<Rate>;
}

/// A curve returning the same forward rate for every fixing date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatForwardCurve {
    rate: Rate,
}

impl FlatForwardCurve {
    /// Create a flat curve.  Fails with `InvalidArgument` unless `rate` is
    /// finite.
    pub fn new(rate: Rate) -> Result<Self> {
        ensure!(rate.is_finite(), "forward rate must be finite, got {rate}");
        Ok(Self { rate })
    }

    /// The flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl ForwardCurve for FlatForwardCurve {
    fn forward_rate(&self, _fixing_date: Date) -> Result<Rate> {
        Ok(self.rate)
    }
}

/// Index rates backed by a series of historic fixings and a forward curve.
///
/// | Fixing date vs valuation date | Source |
/// |---|---|
/// | before | fixing series; [`Error::MissingFixing`] if absent |
/// | same day | fixing series when present, else forward curve |
/// | after | forward curve |
#[derive(Debug, Clone)]
pub struct HistoricIborIndexRates<C> {
    index: IborIndex,
    valuation_date: Date,
    fixings: DateDoubleSeries,
    curve: C,
}

impl<C: ForwardCurve> HistoricIborIndexRates<C> {
    /// Create index rates.
    pub fn new(index: IborIndex, valuation_date: Date, fixings: DateDoubleSeries, curve: C) -> Self {
        Self {
            index,
            valuation_date,
            fixings,
            curve,
        }
    }

    /// The historic fixings.
    pub fn fixings(&self) -> &DateDoubleSeries {
        &self.fixings
    }

    /// The forward curve.
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// The stored fixing to use for `fixing_date`, if the date calls for one.
    ///
    /// `Ok(None)` means the forward curve applies.
    fn known_fixing(&self, fixing_date: Date) -> Result<Option<Rate>> {
        if fixing_date > self.valuation_date {
            return Ok(None);
        }
        match self.fixings.get(fixing_date) {
            Some(fixing) => {
                debug!(index = %self.index, %fixing_date, fixing, "using historic fixing");
                Ok(Some(fixing))
            }
            None if fixing_date == self.valuation_date => Ok(None),
            None => Err(Error::MissingFixing {
                index: self.index.to_string(),
                date: fixing_date.to_string(),
            }),
        }
    }
}

impl<C: ForwardCurve> IborIndexRates for HistoricIborIndexRates<C> {
    fn index(&self) -> &IborIndex {
        &self.index
    }

    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn rate(&self, fixing_date: Date) -> Result<Rate> {
        if let Some(fixing) = self.known_fixing(fixing_date)? {
            return Ok(fixing);
        }
        let rate = self.curve.forward_rate(fixing_date)?;
        trace!(index = %self.index, %fixing_date, rate, "forecast from forward curve");
        Ok(rate)
    }

    fn point_sensitivity(&self, fixing_date: Date) -> Result<Option<IborRateSensitivity>> {
        Ok(match self.known_fixing(fixing_date)? {
            Some(_) => None,
            None => Some(IborRateSensitivity::new(self.index.clone(), fixing_date, 1.0)),
        })
    }
}
