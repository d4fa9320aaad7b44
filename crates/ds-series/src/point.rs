//! `Point` — a single dated observation.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use ds_core::Real;
use ds_time::Date;

/// An immutable `(date, value)` pair.
///
/// Equality compares the value bit-for-bit after folding every NaN onto one
/// canonical NaN, so `NaN == NaN` while `0.0 != -0.0`.  Ordering is by date
/// first; ties (which never occur inside a series) fall back to a total
/// order on the value so that `Ord` agrees with `Eq`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    date: Date,
    value: Real,
}

impl Point {
    /// Create a point.
    pub fn new(date: Date, value: Real) -> Self {
        Self { date, value }
    }

    /// The observation date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The observed value.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Copy of this point carrying a different value.
    pub fn with_value(self, value: Real) -> Self {
        Self { value, ..self }
    }

    /// Copy of this point carrying a different date.
    pub fn with_date(self, date: Date) -> Self {
        Self { date, ..self }
    }
}

/// Bit pattern used for equality and hashing; all NaNs share one pattern.
pub(crate) fn canonical_bits(value: Real) -> u64 {
    if value.is_nan() {
        Real::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && canonical_bits(self.value) == canonical_bits(other.value)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
        canonical_bits(self.value).hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = Real::from_bits(canonical_bits(self.value));
        let rhs = Real::from_bits(canonical_bits(other.value));
        self.date.cmp(&other.date).then_with(|| lhs.total_cmp(&rhs))
    }
}

impl From<(Date, Real)> for Point {
    fn from((date, value): (Date, Real)) -> Self {
        Self::new(date, value)
    }
}

impl From<Point> for (Date, Real) {
    fn from(p: Point) -> Self {
        (p.date, p.value)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.date, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn equality_is_nan_aware() {
        let d = date(2015, 1, 5);
        assert_eq!(Point::new(d, Real::NAN), Point::new(d, -Real::NAN));
        assert_ne!(Point::new(d, 0.0), Point::new(d, -0.0));
        assert_ne!(Point::new(d, 1.0), Point::new(date(2015, 1, 6), 1.0));
        assert_eq!(Point::new(d, 1.5), Point::from((d, 1.5)));
    }

    #[test]
    fn hash_agrees_with_eq() {
        let d = date(2015, 1, 5);
        let set: HashSet<Point> = [Point::new(d, Real::NAN), Point::new(d, -Real::NAN)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordered_by_date() {
        let mut points = vec![
            Point::new(date(2012, 1, 1), 1.0),
            Point::new(date(2010, 1, 1), 3.0),
            Point::new(date(2011, 1, 1), 2.0),
        ];
        points.sort();
        let dates: Vec<_> = points.iter().map(Point::date).collect();
        assert_eq!(dates, [date(2010, 1, 1), date(2011, 1, 1), date(2012, 1, 1)]);
    }

    #[test]
    fn withers() {
        let p = Point::new(date(2015, 1, 5), 1.0);
        assert_eq!(p.with_value(1.5).value(), 1.5);
        assert_eq!(p.with_value(1.5).date(), p.date());
        assert_eq!(p.with_date(date(2015, 1, 6)).date(), date(2015, 1, 6));
        assert_eq!(p.to_string(), "2015-01-05 => 1");
    }
}
