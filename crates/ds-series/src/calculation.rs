//! `DateCalculation` — how positions in a dense series map to dates.
//!
//! A dense series stores its values in a plain array; element `i` belongs to
//! the `i`-th *valid* date counted from the start date.  Which dates count as
//! valid is the only thing that differs between the two policies.

use ds_core::Size;
use ds_time::{Date, Weekday};

/// Position ↔ date mapping policy for dense series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DateCalculation {
    /// Every calendar day occupies a position.
    IncludeWeekends,
    /// Saturdays and Sundays never occupy a position.
    SkipWeekends,
}

impl DateCalculation {
    /// Pick the policy able to hold every date in `dates`: `SkipWeekends`
    /// unless at least one of them falls on a weekend.
    pub fn for_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = Date>,
    {
        if dates.into_iter().any(|d| d.is_weekend()) {
            DateCalculation::IncludeWeekends
        } else {
            DateCalculation::SkipWeekends
        }
    }

    /// Whether `date` can occupy a position under this policy.
    pub fn allows_date(&self, date: Date) -> bool {
        match self {
            DateCalculation::IncludeWeekends => true,
            DateCalculation::SkipWeekends => !date.is_weekend(),
        }
    }

    /// The earliest date on or after `date` that can occupy a position.
    pub fn adjust_date(&self, date: Date) -> Date {
        match (self, date.weekday()) {
            (DateCalculation::SkipWeekends, Weekday::Saturday) => date + 2,
            (DateCalculation::SkipWeekends, Weekday::Sunday) => date + 1,
            _ => date,
        }
    }

    /// The date held at `position` in a series starting at `start`.
    ///
    /// `start` must itself be allowed by the policy.
    pub fn date_at(&self, start: Date, position: Size) -> Date {
        debug_assert!(self.allows_date(start), "{start} is not a valid start date");
        let position = position as i32;
        match self {
            DateCalculation::IncludeWeekends => start + position,
            DateCalculation::SkipWeekends => {
                let weeks = position / 5;
                let rem = position % 5;
                let crossed = weekday_index(start) + rem >= 5;
                start + weeks * 7 + rem + if crossed { 2 } else { 0 }
            }
        }
    }

    /// Position of `date` in a series starting at `start`, or `None` when
    /// `date` precedes `start` or is not allowed by the policy.
    pub fn position_of(&self, start: Date, date: Date) -> Option<Size> {
        if date < start || !self.allows_date(date) {
            return None;
        }
        let days = date - start;
        let position = match self {
            DateCalculation::IncludeWeekends => days,
            DateCalculation::SkipWeekends => {
                let rem = days % 7;
                let crossed = weekday_index(start) + rem >= 5;
                (days / 7) * 5 + rem - if crossed { 2 } else { 0 }
            }
        };
        Some(position as Size)
    }

    /// Number of positions from `start` to `end`, both inclusive.
    ///
    /// Both dates must be allowed by the policy and `start <= end`.
    pub fn positions_between(&self, start: Date, end: Date) -> Size {
        self.position_of(start, end).map_or(0, |p| p + 1)
    }
}

/// Monday = 0 … Sunday = 6.
fn weekday_index(date: Date) -> i32 {
    date.weekday().ordinal() as i32 - 1
}
