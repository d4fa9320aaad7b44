//! `SparseSeries` — explicit sorted dates with parallel values.

use ds_core::{Real, Size};
use ds_time::Date;

use crate::point::Point;

/// A series holding an explicit, strictly increasing list of dates and the
/// value observed on each.
///
/// Used whenever the dates are too irregular for a dense array.  The empty
/// sparse series, [`SparseSeries::EMPTY`], is the canonical empty series.
#[derive(Debug, Clone)]
pub struct SparseSeries {
    dates: Vec<Date>,
    values: Vec<Real>,
}

impl SparseSeries {
    /// The canonical empty series.
    pub const EMPTY: SparseSeries = SparseSeries {
        dates: Vec::new(),
        values: Vec::new(),
    };

    /// Build from points already sorted by strictly increasing date.
    ///
    /// NaN values mark missing observations and are skipped.
    pub(crate) fn from_sorted_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let (dates, values): (Vec<Date>, Vec<Real>) = points
            .into_iter()
            .filter(|p| !p.value().is_nan())
            .map(|p| (p.date(), p.value()))
            .unzip();
        debug_assert!(dates.windows(2).all(|w| w[0] < w[1]), "dates must be strictly increasing");
        Self { dates, values }
    }

    /// Number of stored points.
    pub fn len(&self) -> Size {
        self.dates.len()
    }

    /// Whether no point is stored.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The stored dates, in increasing order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The stored values, parallel to [`dates`](Self::dates).
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Binary-search lookup.
    pub fn get(&self, date: Date) -> Option<Real> {
        self.dates
            .binary_search(&date)
            .ok()
            .map(|i| self.values[i])
    }

    pub(crate) fn first(&self) -> Option<Point> {
        self.point_at(0)
    }

    pub(crate) fn last(&self) -> Option<Point> {
        self.len().checked_sub(1).and_then(|i| self.point_at(i))
    }

    fn point_at(&self, i: Size) -> Option<Point> {
        Some(Point::new(*self.dates.get(i)?, self.values[i]))
    }

    /// Points with `start <= date < end`.
    pub(crate) fn sub_series(&self, start: Date, end: Date) -> Self {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d < end);
        self.slice(lo, hi.max(lo))
    }

    /// The first `count` points (all of them when `count >= len`).
    pub(crate) fn head(&self, count: Size) -> Self {
        self.slice(0, count.min(self.len()))
    }

    /// The last `count` points (all of them when `count >= len`).
    pub(crate) fn tail(&self, count: Size) -> Self {
        self.slice(self.len().saturating_sub(count), self.len())
    }

    /// Apply `f` to every value; results that are NaN drop their date.
    pub(crate) fn map_values<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Real) -> Real,
    {
        Self::from_sorted_points(
            self.dates
                .iter()
                .zip(&self.values)
                .map(|(&d, &v)| Point::new(d, f(v))),
        )
    }

    fn slice(&self, lo: Size, hi: Size) -> Self {
        Self {
            dates: self.dates[lo..hi].to_vec(),
            values: self.values[lo..hi].to_vec(),
        }
    }
}
