//! `IborRateSensitivity` — point sensitivity to an IBOR fixing.

use ds_core::Real;
use ds_time::Date;

use crate::index::IborIndex;

/// Sensitivity of a value to the forward rate of `index` at `fixing_date`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborRateSensitivity {
    index: IborIndex,
    fixing_date: Date,
    sensitivity: Real,
}

impl IborRateSensitivity {
    /// Create a sensitivity.
    pub fn new(index: IborIndex, fixing_date: Date, sensitivity: Real) -> Self {
        Self {
            index,
            fixing_date,
            sensitivity,
        }
    }

    /// The index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// The fixing date the rate is observed on.
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }

    /// The sensitivity value.
    pub fn sensitivity(&self) -> Real {
        self.sensitivity
    }

    /// Copy with the sensitivity scaled by `factor`.
    pub fn multiplied_by(&self, factor: Real) -> Self {
        Self {
            sensitivity: self.sensitivity * factor,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::GBP_LIBOR_3M;

    #[test]
    fn scaling_keeps_key() {
        let d = Date::from_ymd(2014, 6, 30).unwrap();
        let s = IborRateSensitivity::new(GBP_LIBOR_3M, d, 1.0).multiplied_by(2.5);
        assert_eq!(s.index(), &GBP_LIBOR_3M);
        assert_eq!(s.fixing_date(), d);
        assert_eq!(s.sensitivity(), 2.5);
    }
}
