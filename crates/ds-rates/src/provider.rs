//! `RatesProvider` — source of market rates for pricing functions.

use std::collections::HashMap;

use ds_core::{Error, Result};
use ds_time::Date;

use crate::index::IborIndex;
use crate::rates::IborIndexRates;

/// Market data needed to observe rates.
pub trait RatesProvider: std::fmt::Debug + Send + Sync {
    /// The valuation date.
    fn valuation_date(&self) -> Date;

    /// The rates for `index`.  Fails with `NotFound` when the provider holds
    /// none.
    fn ibor_index_rates(&self, index: &IborIndex) -> Result<&dyn IborIndexRates>;
}

/// A provider holding one [`IborIndexRates`] per index.
#[derive(Debug)]
pub struct SimpleRatesProvider {
    valuation_date: Date,
    ibor_rates: HashMap<IborIndex, Box<dyn IborIndexRates>>,
}

impl SimpleRatesProvider {
    /// Create an empty provider.
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            ibor_rates: HashMap::new(),
        }
    }

    /// Register rates, keyed by their own index.  Replaces any rates
    /// previously registered for that index.
    pub fn with_ibor_rates(mut self, rates: impl IborIndexRates + 'static) -> Self {
        self.set_ibor_rates(rates);
        self
    }

    /// In-place form of [`with_ibor_rates`](Self::with_ibor_rates).
    pub fn set_ibor_rates(&mut self, rates: impl IborIndexRates + 'static) {
        self.ibor_rates.insert(rates.index().clone(), Box::new(rates));
    }
}

impl RatesProvider for SimpleRatesProvider {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn ibor_index_rates(&self, index: &IborIndex) -> Result<&dyn IborIndexRates> {
        self.ibor_rates
            .get(index)
            .map(|rates| &**rates)
            .ok_or_else(|| Error::NotFound(format!("no rates for index {index}")))
    }
}
