//! `DateDoubleSeries` — the immutable date → `f64` series.
//!
//! The series has two layouts, [`DenseSeries`] and [`SparseSeries`].  Every
//! operation below is written once against the enum and only dispatches on
//! the layout where it pays off (lookup, iteration, slicing).  Results of
//! transformations never depend on the layout of their inputs, and two
//! series holding the same points compare equal whatever their layouts.

use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use ds_core::{ensure, Error, Real, Result, Size};
use ds_time::Date;

use crate::builder::{materialize, SeriesBuilder};
use crate::calculation::DateCalculation;
use crate::dense::DenseSeries;
use crate::options::BuildOptions;
use crate::point::Point;
use crate::sparse::SparseSeries;

/// An immutable, strictly date-ordered series of `f64` observations.
#[derive(Debug, Clone)]
pub enum DateDoubleSeries {
    /// Array-backed layout for calendar-regular data.
    Dense(DenseSeries),
    /// Explicit date list for irregular data.
    Sparse(SparseSeries),
}

impl Default for DateDoubleSeries {
    fn default() -> Self {
        Self::empty()
    }
}

impl DateDoubleSeries {
    /// The canonical empty series.
    pub const EMPTY: DateDoubleSeries = DateDoubleSeries::Sparse(SparseSeries::EMPTY);

    // ── Constructors ─────────────────────────────────────────────────────

    /// The canonical empty series.
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// A series holding a single point.
    pub fn of(date: Date, value: Real) -> Self {
        Self::builder().put(date, value).build()
    }

    /// A fresh builder.
    pub fn builder() -> SeriesBuilder {
        SeriesBuilder::new()
    }

    /// Dense fast path: slot `i` of `values` belongs to the `i`-th date from
    /// `start` under `calculation`.  NaN marks an empty slot.
    ///
    /// The slice is copied; later changes to it are not seen by the series.
    /// Fails with `InvalidArgument` when `start` is not allowed by
    /// `calculation` (a weekend under `SkipWeekends`).
    pub fn dense_from_values(start: Date, calculation: DateCalculation, values: &[Real]) -> Result<Self> {
        ensure!(
            calculation.allows_date(start),
            "start date {start} is not a valid position under {calculation:?}"
        );
        let capacity = (0..3i32)
            .map(|back| Date::MAX - back)
            .find(|d| calculation.allows_date(*d))
            .map_or(0, |last| calculation.positions_between(start, last));
        ensure!(
            values.len() <= capacity,
            "{} values starting {start} extend past the supported date range",
            values.len()
        );
        Ok(DenseSeries::from_slots(start, calculation, values.to_vec())
            .map_or_else(Self::empty, Self::Dense))
    }

    /// Dense construction from points bounded by `[start, end]`.
    ///
    /// Fails with `InvalidArgument` when `start > end` or a point lies
    /// outside the bounds.  Points that `calculation` cannot represent
    /// (weekends under `SkipWeekends`) are dropped.  Repeated dates keep the
    /// last value.
    pub fn dense_from_points<I>(start: Date, end: Date, points: I, calculation: DateCalculation) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        ensure!(start <= end, "start date {start} is after end date {end}");
        let mut kept = std::collections::BTreeMap::new();
        for p in points {
            ensure!(
                (start..=end).contains(&p.date()),
                "point dated {} lies outside [{start}, {end}]",
                p.date()
            );
            if calculation.allows_date(p.date()) {
                kept.insert(p.date(), p.value());
            }
        }
        let points: Vec<Point> = kept
            .into_iter()
            .filter(|(_, v)| !v.is_nan())
            .map(Point::from)
            .collect();
        Ok(DenseSeries::from_sorted_points(calculation, &points).map_or_else(Self::empty, Self::Dense))
    }

    /// A builder pre-populated with this series' points.
    pub fn to_builder(&self) -> SeriesBuilder {
        SeriesBuilder::new().put_points(self.iter())
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of stored points.
    pub fn len(&self) -> Size {
        match self {
            Self::Dense(d) => d.len(),
            Self::Sparse(s) => s.len(),
        }
    }

    /// Whether the series holds no point.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the array-backed layout is in use.
    pub fn is_dense(&self) -> bool {
        matches!(self, Self::Dense(_))
    }

    /// Whether a value is stored for `date`.
    pub fn contains_date(&self, date: Date) -> bool {
        self.get(date).is_some()
    }

    /// The value stored for `date`, if any.
    pub fn get(&self, date: Date) -> Option<Real> {
        match self {
            Self::Dense(d) => d.get(date),
            Self::Sparse(s) => s.get(date),
        }
    }

    /// The earliest stored point.  Fails with `NotFound` when empty.
    pub fn earliest_point(&self) -> Result<Point> {
        match self {
            Self::Dense(d) => Some(d.first()),
            Self::Sparse(s) => s.first(),
        }
        .ok_or_else(|| Error::NotFound("earliest point of an empty series".into()))
    }

    /// The latest stored point.  Fails with `NotFound` when empty.
    pub fn latest_point(&self) -> Result<Point> {
        match self {
            Self::Dense(d) => Some(d.last()),
            Self::Sparse(s) => s.last(),
        }
        .ok_or_else(|| Error::NotFound("latest point of an empty series".into()))
    }

    /// Date of the earliest stored point.
    pub fn earliest_date(&self) -> Result<Date> {
        self.earliest_point().map(|p| p.date())
    }

    /// Value of the earliest stored point.
    pub fn earliest_value(&self) -> Result<Real> {
        self.earliest_point().map(|p| p.value())
    }

    /// Date of the latest stored point.
    pub fn latest_date(&self) -> Result<Date> {
        self.latest_point().map(|p| p.date())
    }

    /// Value of the latest stored point.
    pub fn latest_value(&self) -> Result<Real> {
        self.latest_point().map(|p| p.value())
    }

    // ── Slicing ──────────────────────────────────────────────────────────

    /// Points dated in the half-open range `[start, end)`.
    ///
    /// The bounds need not be stored dates (weekends included).  Fails with
    /// `InvalidArgument` when `start > end`; `start == end` is empty.
    pub fn sub_series(&self, start: Date, end: Date) -> Result<Self> {
        ensure!(start <= end, "sub-series start {start} is after end {end}");
        Ok(match self {
            Self::Dense(d) => d.sub_series(start, end).map_or_else(Self::empty, Self::Dense),
            Self::Sparse(s) => Self::Sparse(s.sub_series(start, end)),
        })
    }

    /// The first `count` points; the whole series when `count >= len()`.
    pub fn head_series(&self, count: Size) -> Self {
        match self {
            Self::Dense(d) => d.head(count).map_or_else(Self::empty, Self::Dense),
            Self::Sparse(s) => Self::Sparse(s.head(count)),
        }
    }

    /// The last `count` points; the whole series when `count >= len()`.
    pub fn tail_series(&self, count: Size) -> Self {
        match self {
            Self::Dense(d) => d.tail(count).map_or_else(Self::empty, Self::Dense),
            Self::Sparse(s) => Self::Sparse(s.tail(count)),
        }
    }

    // ── Iteration ────────────────────────────────────────────────────────

    /// Iterate over the points in increasing date order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        let inner = match self {
            Self::Dense(d) => IterInner::Dense {
                series: d,
                front: 0,
                back: d.slots(),
                remaining: d.len(),
            },
            Self::Sparse(s) => IterInner::Sparse {
                dates: s.dates().iter(),
                values: s.values().iter(),
            },
        };
        Iter { inner }
    }

    /// The stored dates, in increasing order.
    pub fn dates(&self) -> impl DoubleEndedIterator<Item = Date> + ExactSizeIterator + '_ {
        self.iter().map(|p| p.date())
    }

    /// The stored values, in increasing date order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = Real> + ExactSizeIterator + '_ {
        self.iter().map(|p| p.value())
    }

    /// Call `action` once per point, in increasing date order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(Date, Real),
    {
        self.iter().for_each(|p| action(p.date(), p.value()));
    }

    // ── Transformations ──────────────────────────────────────────────────

    /// Inner join: for each date present in both series, the result holds
    /// `combiner(self_value, other_value)`.  Dates found on one side only
    /// are dropped.
    ///
    /// Both inputs are already sorted, so a single merge pass suffices.
    pub fn combine_with<F>(&self, other: &DateDoubleSeries, mut combiner: F) -> Self
    where
        F: FnMut(Real, Real) -> Real,
    {
        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();
        let mut combined = Vec::new();
        while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
            match l.date().cmp(&r.date()) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    let value = combiner(l.value(), r.value());
                    if !value.is_nan() {
                        combined.push(Point::new(l.date(), value));
                    }
                    left.next();
                    right.next();
                }
            }
        }
        materialize(combined, &BuildOptions::default())
    }

    /// Apply `mapper` to every value, keeping the dates (and the layout).
    ///
    /// A NaN result marks the date as having no observation, removing it.
    pub fn map_values<F>(&self, mapper: F) -> Self
    where
        F: FnMut(Real) -> Real,
    {
        match self {
            Self::Dense(d) => d.map_values(mapper).map_or_else(Self::empty, Self::Dense),
            Self::Sparse(s) => Self::Sparse(s.map_values(mapper)),
        }
    }

    /// Keep only the points for which `predicate(date, value)` holds.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(Date, Real) -> bool,
    {
        let kept = self.iter().filter(|p| predicate(p.date(), p.value())).collect();
        materialize(kept, &BuildOptions::default())
    }
}

// ── Iterator ─────────────────────────────────────────────────────────────────

/// Iterator over the points of a [`DateDoubleSeries`], in date order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Dense {
        series: &'a DenseSeries,
        front: Size,
        back: Size,
        remaining: Size,
    },
    Sparse {
        dates: std::slice::Iter<'a, Date>,
        values: std::slice::Iter<'a, Real>,
    },
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match &mut self.inner {
            IterInner::Dense {
                series,
                front,
                back,
                remaining,
            } => {
                while *front < *back {
                    let i = *front;
                    *front += 1;
                    let value = series.slot(i);
                    if !value.is_nan() {
                        *remaining -= 1;
                        return Some(Point::new(series.date_at(i), value));
                    }
                }
                None
            }
            IterInner::Sparse { dates, values } => {
                Some(Point::new(*dates.next()?, *values.next()?))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match &self.inner {
            IterInner::Dense { remaining, .. } => *remaining,
            IterInner::Sparse { dates, .. } => dates.len(),
        };
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Point> {
        match &mut self.inner {
            IterInner::Dense {
                series,
                front,
                back,
                remaining,
            } => {
                while *back > *front {
                    *back -= 1;
                    let value = series.slot(*back);
                    if !value.is_nan() {
                        *remaining -= 1;
                        return Some(Point::new(series.date_at(*back), value));
                    }
                }
                None
            }
            IterInner::Sparse { dates, values } => {
                Some(Point::new(*dates.next_back()?, *values.next_back()?))
            }
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DateDoubleSeries {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// ── Collecting ───────────────────────────────────────────────────────────────

impl FromIterator<Point> for DateDoubleSeries {
    /// Feed the points through a fresh [`SeriesBuilder`].
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        SeriesBuilder::new().put_points(iter).build()
    }
}

impl FromIterator<(Date, Real)> for DateDoubleSeries {
    fn from_iter<I: IntoIterator<Item = (Date, Real)>>(iter: I) -> Self {
        SeriesBuilder::new().put_entries(iter).build()
    }
}

// ── Equality ─────────────────────────────────────────────────────────────────

impl PartialEq for DateDoubleSeries {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for DateDoubleSeries {}

impl Hash for DateDoubleSeries {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for p in self {
            p.hash(state);
        }
    }
}

impl std::fmt::Display for DateDoubleSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in self {
            writeln!(f, "{p}")?;
        }
        Ok(())
    }
}

impl From<SparseSeries> for DateDoubleSeries {
    fn from(s: SparseSeries) -> Self {
        Self::Sparse(s)
    }
}

impl From<DenseSeries> for DateDoubleSeries {
    fn from(d: DenseSeries) -> Self {
        Self::Dense(d)
    }
}

// ── Serialisation ────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for DateDoubleSeries {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateDoubleSeries {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let points = <Vec<Point> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(points.into_iter().collect())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn hash_of(s: &DateDoubleSeries) -> u64 {
        let mut h = DefaultHasher::new();
        s.hash(&mut h);
        h.finish()
    }

    #[test]
    fn empty_series() {
        let s = DateDoubleSeries::empty();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.get(date(2015, 1, 5)), None);
        assert!(s.earliest_date().unwrap_err().is_not_found());
        assert!(s.latest_value().unwrap_err().is_not_found());
        assert_eq!(s, DateDoubleSeries::default());
    }

    #[test]
    fn dense_and_sparse_equal_and_hash_alike() {
        let dense = DateDoubleSeries::dense_from_values(
            date(2015, 1, 5),
            DateCalculation::SkipWeekends,
            &[1.0, 2.0, 3.0],
        )
        .unwrap();
        let sparse: DateDoubleSeries = SparseSeries::from_sorted_points(dense.iter()).into();
        assert!(dense.is_dense());
        assert!(!sparse.is_dense());
        assert_eq!(dense, sparse);
        assert_eq!(hash_of(&dense), hash_of(&sparse));
    }

    #[test]
    fn dense_from_values_copies_input() {
        let mut values = [6.0, 5.0, 4.0];
        let s = DateDoubleSeries::dense_from_values(
            date(2010, 1, 1),
            DateCalculation::IncludeWeekends,
            &values,
        )
        .unwrap();
        values[0] = -1.0;
        let points: Vec<Point> = s.iter().collect();
        assert_eq!(points[0], Point::new(date(2010, 1, 1), 6.0));
        assert_eq!(points[1], Point::new(date(2010, 1, 2), 5.0));
        assert_eq!(points[2], Point::new(date(2010, 1, 3), 4.0));
    }

    #[test]
    fn dense_from_values_rejects_weekend_start() {
        let err = DateDoubleSeries::dense_from_values(
            date(2015, 1, 3),
            DateCalculation::SkipWeekends,
            &[1.0],
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn iterator_runs_both_ways() {
        let s = DateDoubleSeries::dense_from_values(
            date(2015, 1, 5),
            DateCalculation::SkipWeekends,
            &[1.0, Real::NAN, 3.0, 4.0],
        )
        .unwrap();
        let mut it = s.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back().unwrap().date(), date(2015, 1, 8));
        assert_eq!(it.next().unwrap().date(), date(2015, 1, 5));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next().unwrap().value(), 3.0);
        assert!(it.next().is_none());
        assert!(it.next_back().is_none());
    }

    #[test]
    fn display_lists_points() {
        let s = DateDoubleSeries::of(date(2014, 1, 1), 1.5);
        assert_eq!(s.to_string(), "2014-01-01 => 1.5\n");
    }
}
