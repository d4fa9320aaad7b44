//! `DenseSeries` — array-backed storage for calendar-regular data.
//!
//! A dense series keeps one `f64` slot per valid date between its start and
//! end date under a [`DateCalculation`].  Slots without an observation hold
//! NaN.  Leading and trailing NaN slots are trimmed on construction, so the
//! start and end dates are always the earliest and latest stored dates and a
//! `DenseSeries` is never empty.

use ds_core::{Real, Size};
use ds_time::Date;
use tracing::trace;

use crate::calculation::DateCalculation;
use crate::point::Point;

/// A series stored as a contiguous array indexed by calendar position.
#[derive(Debug, Clone)]
pub struct DenseSeries {
    start: Date,
    calculation: DateCalculation,
    values: Vec<Real>,
    len: Size,
}

impl DenseSeries {
    /// Take ownership of `values`, slot `i` belonging to the `i`-th valid
    /// date from `start`.  Returns `None` when every slot is NaN.
    pub(crate) fn from_slots(start: Date, calculation: DateCalculation, values: Vec<Real>) -> Option<Self> {
        let first = values.iter().position(|v| !v.is_nan())?;
        let last = values.iter().rposition(|v| !v.is_nan())?;
        let len = values[first..=last].iter().filter(|v| !v.is_nan()).count();
        let start = calculation.date_at(start, first);
        let values = if first == 0 && last + 1 == values.len() {
            values
        } else {
            trace!(leading = first, trailing = values.len() - last - 1, "trimming empty dense slots");
            values[first..=last].to_vec()
        };
        Some(Self {
            start,
            calculation,
            values,
            len,
        })
    }

    /// Lay out points already sorted by increasing date, every one of them
    /// allowed by `calculation`.
    pub(crate) fn from_sorted_points(calculation: DateCalculation, points: &[Point]) -> Option<Self> {
        let (first, last) = (points.first()?, points.last()?);
        let start = first.date();
        let mut values = vec![Real::NAN; calculation.positions_between(start, last.date())];
        for p in points {
            if let Some(slot) = calculation
                .position_of(start, p.date())
                .and_then(|i| values.get_mut(i))
            {
                *slot = p.value();
            }
        }
        Self::from_slots(start, calculation, values)
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of stored points (filled slots).
    pub fn len(&self) -> Size {
        self.len
    }

    /// Always `false`: a dense series holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Date of the first slot, which is also the earliest stored date.
    pub fn start_date(&self) -> Date {
        self.start
    }

    /// Date of the last slot, which is also the latest stored date.
    pub fn end_date(&self) -> Date {
        self.date_at(self.values.len() - 1)
    }

    /// The position ↔ date policy.
    pub fn calculation(&self) -> DateCalculation {
        self.calculation
    }

    /// Copy of the backing array, NaN marking slots without an observation.
    ///
    /// The copy is detached: mutating it never affects the series.
    pub fn raw_values(&self) -> Vec<Real> {
        self.values.clone()
    }

    /// Look up the value stored for `date`.
    pub fn get(&self, date: Date) -> Option<Real> {
        self.calculation
            .position_of(self.start, date)
            .and_then(|i| self.values.get(i))
            .copied()
            .filter(|v| !v.is_nan())
    }

    // ── Crate-internal operations ────────────────────────────────────────

    pub(crate) fn slots(&self) -> Size {
        self.values.len()
    }

    pub(crate) fn slot(&self, i: Size) -> Real {
        self.values[i]
    }

    pub(crate) fn date_at(&self, i: Size) -> Date {
        self.calculation.date_at(self.start, i)
    }

    pub(crate) fn first(&self) -> Point {
        Point::new(self.start, self.values[0])
    }

    pub(crate) fn last(&self) -> Point {
        let i = self.values.len() - 1;
        Point::new(self.date_at(i), self.values[i])
    }

    /// First slot whose date is on or after `date`.
    fn lower_bound(&self, date: Date) -> Size {
        if date <= self.start {
            return 0;
        }
        if date > self.end_date() {
            return self.values.len();
        }
        let adjusted = self.calculation.adjust_date(date);
        self.calculation
            .position_of(self.start, adjusted)
            .map_or(self.values.len(), |i| i.min(self.values.len()))
    }

    /// Slot holding the `n`-th (zero-based) stored point.
    fn nth_filled_slot(&self, n: Size) -> Option<Size> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .nth(n)
            .map(|(i, _)| i)
    }

    fn slice(&self, lo: Size, hi: Size) -> Option<Self> {
        if lo >= hi {
            return None;
        }
        Self::from_slots(self.date_at(lo), self.calculation, self.values[lo..hi].to_vec())
    }

    /// Points with `start <= date < end`.
    pub(crate) fn sub_series(&self, start: Date, end: Date) -> Option<Self> {
        self.slice(self.lower_bound(start), self.lower_bound(end))
    }

    /// The first `count` stored points.
    pub(crate) fn head(&self, count: Size) -> Option<Self> {
        if count >= self.len {
            return Some(self.clone());
        }
        let hi = self.nth_filled_slot(count)?;
        self.slice(0, hi)
    }

    /// The last `count` stored points.
    pub(crate) fn tail(&self, count: Size) -> Option<Self> {
        if count >= self.len {
            return Some(self.clone());
        }
        if count == 0 {
            return None;
        }
        let lo = self.nth_filled_slot(self.len - count)?;
        self.slice(lo, self.values.len())
    }

    /// Apply `f` to every stored value, keeping the layout.  Results that
    /// are NaN empty their slot.
    pub(crate) fn map_values<F>(&self, mut f: F) -> Option<Self>
    where
        F: FnMut(Real) -> Real,
    {
        let values = self
            .values
            .iter()
            .map(|&v| if v.is_nan() { v } else { f(v) })
            .collect();
        Self::from_slots(self.start, self.calculation, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn week() -> DenseSeries {
        // Monday 2015-01-05 .. Friday 2015-01-09
        DenseSeries::from_slots(
            date(2015, 1, 5),
            DateCalculation::SkipWeekends,
            vec![10.0, 11.0, 12.0, 13.0, 14.0],
        )
        .unwrap()
    }

    #[test]
    fn trims_empty_edges() {
        let s = DenseSeries::from_slots(
            date(2010, 1, 1),
            DateCalculation::IncludeWeekends,
            vec![Real::NAN, 5.0, Real::NAN, 4.0, Real::NAN],
        )
        .unwrap();
        assert_eq!(s.start_date(), date(2010, 1, 2));
        assert_eq!(s.end_date(), date(2010, 1, 4));
        assert_eq!(s.len(), 2);
        assert_eq!(s.raw_values().len(), 3);
        assert!(DenseSeries::from_slots(date(2010, 1, 1), DateCalculation::IncludeWeekends, vec![Real::NAN]).is_none());
    }

    #[test]
    fn raw_values_is_a_copy() {
        let s = week();
        let mut copy = s.raw_values();
        copy[0] = -1.0;
        assert_eq!(s.get(date(2015, 1, 5)), Some(10.0));
    }

    #[test]
    fn lookup() {
        let s = week();
        assert_eq!(s.get(date(2015, 1, 7)), Some(12.0));
        assert_eq!(s.get(date(2015, 1, 3)), None);
        assert_eq!(s.get(date(2015, 1, 10)), None);
        assert_eq!(s.get(date(2015, 1, 12)), None);
        assert_eq!(s.last().value(), 14.0);
    }

    #[test]
    fn sub_series_with_weekend_bounds() {
        let s = week();
        let sub = s.sub_series(date(2015, 1, 4), date(2015, 1, 10)).unwrap();
        assert_eq!(sub.len(), 5);
        let sub = s.sub_series(date(2015, 1, 6), date(2015, 1, 8)).unwrap();
        assert_eq!(sub.start_date(), date(2015, 1, 6));
        assert_eq!(sub.end_date(), date(2015, 1, 7));
        assert!(s.sub_series(date(2015, 1, 10), date(2015, 1, 11)).is_none());
    }

    #[test]
    fn head_and_tail_skip_gaps() {
        let s = DenseSeries::from_slots(
            date(2015, 1, 5),
            DateCalculation::SkipWeekends,
            vec![1.0, Real::NAN, 3.0, Real::NAN, 5.0],
        )
        .unwrap();
        let head = s.head(2).unwrap();
        assert_eq!(head.len(), 2);
        assert_eq!(head.end_date(), date(2015, 1, 7));
        let tail = s.tail(2).unwrap();
        assert_eq!(tail.start_date(), date(2015, 1, 7));
        assert!(s.tail(0).is_none());
        assert!(s.head(0).is_none());
    }

    #[test]
    fn map_keeps_layout() {
        let s = week().map_values(|v| v * 2.0).unwrap();
        assert_eq!(s.calculation(), DateCalculation::SkipWeekends);
        assert_eq!(s.raw_values(), vec![20.0, 22.0, 24.0, 26.0, 28.0]);
    }
}
