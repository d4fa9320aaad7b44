//! `SeriesBuilder` — accumulate points, then freeze them into a series.

use std::collections::BTreeMap;

use ds_core::{ensure, Real, Result};
use ds_time::Date;
use tracing::debug;

use crate::calculation::DateCalculation;
use crate::dense::DenseSeries;
use crate::options::BuildOptions;
use crate::point::Point;
use crate::series::DateDoubleSeries;
use crate::sparse::SparseSeries;

/// Mutable accumulator of `(date, value)` pairs.
///
/// Dates may arrive in any order.  When the same date is put more than once
/// the last value wins.  A NaN value records that the date has no
/// observation: it is never stored in the built series.
///
/// # Example
/// ```
/// use ds_series::DateDoubleSeries;
/// use ds_time::Date;
///
/// let d1 = Date::from_ymd(2012, 1, 1).unwrap();
/// let d2 = Date::from_ymd(2011, 1, 1).unwrap();
/// let series = DateDoubleSeries::builder()
///     .put_all([d1, d2], [2.0, 1.0])
///     .unwrap()
///     .build();
/// assert_eq!(series.earliest_date().unwrap(), d2);
/// assert_eq!(series.get(d1), Some(2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    entries: BTreeMap<Date, Real>,
    options: BuildOptions,
}

impl SeriesBuilder {
    /// Create an empty builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the build options.  Fails if they do not validate.
    pub fn with_options(mut self, options: BuildOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    /// The options the builder will use.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Number of distinct dates accumulated so far (NaN entries included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been put yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add or overwrite the value for `date`.
    pub fn put(mut self, date: Date, value: Real) -> Self {
        self.entries.insert(date, value);
        self
    }

    /// Add or overwrite a single point.
    pub fn put_point(self, point: Point) -> Self {
        self.put(point.date(), point.value())
    }

    /// Add paired collections of dates and values.
    ///
    /// Fails with `InvalidArgument`, leaving nothing added, when the two
    /// collections differ in length.
    pub fn put_all<D, V>(mut self, dates: D, values: V) -> Result<Self>
    where
        D: IntoIterator<Item = Date>,
        V: IntoIterator<Item = Real>,
    {
        let dates: Vec<Date> = dates.into_iter().collect();
        let values: Vec<Real> = values.into_iter().collect();
        ensure!(
            dates.len() == values.len(),
            "dates and values must have the same length ({} != {})",
            dates.len(),
            values.len()
        );
        self.entries.extend(dates.into_iter().zip(values));
        Ok(self)
    }

    /// Add every entry of a date → value mapping (or any pair iterator).
    pub fn put_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (Date, Real)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Add a sequence of points.
    pub fn put_points<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        self.extend(points);
        self
    }

    /// Freeze the accumulated points into an immutable series.
    pub fn build(self) -> DateDoubleSeries {
        let points: Vec<Point> = self
            .entries
            .into_iter()
            .filter(|(_, v)| !v.is_nan())
            .map(Point::from)
            .collect();
        materialize(points, &self.options)
    }
}

impl Extend<Point> for SeriesBuilder {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(<(Date, Real)>::from));
    }
}

impl Extend<(Date, Real)> for SeriesBuilder {
    fn extend<I: IntoIterator<Item = (Date, Real)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// Pick a layout for points already sorted by strictly increasing date with
/// no NaN values, and build it.
pub(crate) fn materialize(points: Vec<Point>, options: &BuildOptions) -> DateDoubleSeries {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return DateDoubleSeries::empty();
    };
    let calculation = DateCalculation::for_dates(points.iter().map(Point::date));
    let positions = calculation.positions_between(first.date(), last.date());
    let dense = options.wants_dense(points.len(), positions);
    debug!(
        points = points.len(),
        positions,
        ?calculation,
        dense,
        "materializing series"
    );
    if dense {
        if let Some(series) = DenseSeries::from_sorted_points(calculation, &points) {
            return DateDoubleSeries::Dense(series);
        }
    }
    DateDoubleSeries::Sparse(SparseSeries::from_sorted_points(points))
}
