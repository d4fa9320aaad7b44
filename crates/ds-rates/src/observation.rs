//! Rate observations and the functions that price them.

use ds_core::{Rate, Result};
use ds_time::Date;
use tracing::trace;

use crate::index::IborIndex;
use crate::provider::RatesProvider;
use crate::sensitivity::IborRateSensitivity;

/// Observation of an IBOR index on a single fixing date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborRateObservation {
    index: IborIndex,
    fixing_date: Date,
}

impl IborRateObservation {
    /// Create an observation.
    pub fn new(index: IborIndex, fixing_date: Date) -> Self {
        Self { index, fixing_date }
    }

    /// The observed index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// The fixing date.
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }
}

/// Computes the rate of an observation of type `T` over an accrual period.
pub trait RateObservationFn<T>: std::fmt::Debug + Send + Sync {
    /// The point sensitivity type produced.
    type Sensitivity;

    /// The rate applying from `accrual_start` to `accrual_end`.
    fn rate(
        &self,
        observation: &T,
        accrual_start: Date,
        accrual_end: Date,
        provider: &dyn RatesProvider,
    ) -> Result<Rate>;

    /// Sensitivity of [`rate`](Self::rate) to the underlying curves.
    fn rate_sensitivity(
        &self,
        observation: &T,
        accrual_start: Date,
        accrual_end: Date,
        provider: &dyn RatesProvider,
    ) -> Result<Self::Sensitivity>;
}

/// Observes an IBOR rate as the index rate on the fixing date.
///
/// The accrual period does not enter the calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardIborRateObservationFn;

impl ForwardIborRateObservationFn {
    /// Default instance.
    pub const DEFAULT: ForwardIborRateObservationFn = ForwardIborRateObservationFn;
}

impl RateObservationFn<IborRateObservation> for ForwardIborRateObservationFn {
    type Sensitivity = Option<IborRateSensitivity>;

    fn rate(
        &self,
        observation: &IborRateObservation,
        _accrual_start: Date,
        _accrual_end: Date,
        provider: &dyn RatesProvider,
    ) -> Result<Rate> {
        trace!(index = %observation.index, fixing_date = %observation.fixing_date, "observing ibor rate");
        provider
            .ibor_index_rates(&observation.index)?
            .rate(observation.fixing_date)
    }

    fn rate_sensitivity(
        &self,
        observation: &IborRateObservation,
        _accrual_start: Date,
        _accrual_end: Date,
        provider: &dyn RatesProvider,
    ) -> Result<Option<IborRateSensitivity>> {
        provider
            .ibor_index_rates(&observation.index)?
            .point_sensitivity(observation.fixing_date)
    }
}
