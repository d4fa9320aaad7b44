//! `IborIndex` — identifies an interbank offered-rate index by name.

use std::borrow::Cow;
use std::fmt;

/// An Interbank Offered Rate index (e.g. `"GBP-LIBOR-3M"`).
///
/// Only the name is carried: conventions such as the fixing calendar live
/// with whoever supplies rates for the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IborIndex {
    name: Cow<'static, str>,
}

impl IborIndex {
    /// Create an index from any name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    /// Create an index from a static name, usable in constants.
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Unique name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// GBP LIBOR, 3 months.
pub const GBP_LIBOR_3M: IborIndex = IborIndex::from_static("GBP-LIBOR-3M");

/// GBP LIBOR, 6 months.
pub const GBP_LIBOR_6M: IborIndex = IborIndex::from_static("GBP-LIBOR-6M");

/// USD LIBOR, 3 months.
pub const USD_LIBOR_3M: IborIndex = IborIndex::from_static("USD-LIBOR-3M");

/// Euribor, 3 months.
pub const EUR_EURIBOR_3M: IborIndex = IborIndex::from_static("EUR-EURIBOR-3M");
