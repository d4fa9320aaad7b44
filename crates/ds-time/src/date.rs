//! `Date` — a calendar date stored as a serial day number.
//!
//! # Serial number convention
//! * Serial 0 is 1970-01-01; earlier dates have negative serials.
//! * The supported range is 0001-01-01 to 9999-12-31 (proleptic Gregorian).
//!
//! Conversions between serials and civil dates use the closed-form
//! era/day-of-era arithmetic, so no lookup tables or loops are involved.

use std::str::FromStr;

use crate::weekday::Weekday;
use ds_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum supported date: January 1, 0001.
    pub const MIN: Date = Date(days_from_civil(1, 1, 1));

    /// Maximum supported date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(9999, 12, 31));

    /// The serial-number epoch, January 1, 1970.
    pub const EPOCH: Date = Date(0);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12) and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::InvalidArgument(format!(
                "year {year} out of range [1, 9999]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidArgument(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year as i32, month as u32, day as u32)))
    }

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::InvalidArgument(format!(
                "serial {serial} outside the supported date range"
            )));
        }
        Ok(d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        civil_from_days(self.0).0 as u16
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0).1 as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2 as u8
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let ordinal = (self.0 + 3).rem_euclid(7) + 1;
        Weekday::from_ordinal(ordinal as u8).expect("rem_euclid always in 1..=7")
    }

    /// Return `true` for Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::InvalidArgument(format!("{self} + {n} days overflows")))
            .and_then(Date::from_serial)
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Formatting and parsing ────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 calendar date, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::InvalidArgument(format!("malformed date '{s}'"));
        let mut parts = s.splitn(3, '-');
        let mut next = |len: usize| -> Result<u16> {
            let part = parts.next().ok_or_else(malformed)?;
            if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u16>().map_err(|_| malformed())
        };
        let year = next(4)?;
        let month = next(2)?;
        let day = next(2)?;
        Date::from_ymd(year, month as u8, day as u8)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = civil_from_days(d.0);
        chrono::NaiveDate::from_ymd_opt(y, m, day).expect("supported range is inside chrono's")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::InvalidArgument(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Serial of the civil date `y-m-d` (days since 1970-01-01).
///
/// Years are shifted to start in March so the leap day falls last.
const fn days_from_civil(y: i32, m: u32, d: u32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = (y - era * 400) as u32;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe as i32 - 719_468
}

/// Inverse of [`days_from_civil`]: `(year, month, day)`.
fn civil_from_days(z: i32) -> (i32, u32, u32) {
    let z = z + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe as i32 + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1970, 1, 1).serial(), 0);
        assert_eq!(date(1970, 1, 2).serial(), 1);
        assert_eq!(date(1969, 12, 31).serial(), -1);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2015, 1, 5),
            (2023, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = date(y, m, d);
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_components() {
        assert!(Date::from_ymd(0, 1, 1).unwrap_err().is_invalid_argument());
        assert!(Date::from_ymd(2015, 13, 1).is_err());
        assert!(Date::from_ymd(2015, 2, 29).is_err());
        assert!(Date::from_ymd(2016, 2, 30).is_err());
        assert!(Date::from_ymd(2015, 4, 0).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2015-01-05 is a Monday
        assert_eq!(date(2015, 1, 5).weekday(), Weekday::Monday);
        assert_eq!(date(2015, 1, 3).weekday(), Weekday::Saturday);
        assert_eq!(date(2015, 1, 4).weekday(), Weekday::Sunday);
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        // before the epoch
        assert_eq!(date(1969, 12, 28).weekday(), Weekday::Sunday);
        assert!(date(2015, 1, 3).is_weekend());
        assert!(!date(2015, 1, 2).is_weekend());
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        assert_eq!(d + 31, date(2023, 2, 1));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(d.days_between(date(2022, 12, 25)), -7);
        assert_eq!(date(2016, 3, 1) - 1, date(2016, 2, 29));
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2015, 1, 5);
        assert_eq!(d.to_string(), "2015-01-05");
        assert_eq!(format!("{d:?}"), "Date(2015-01-05)");
        assert_eq!("2015-01-05".parse::<Date>().unwrap(), d);
        assert!("2015-1-05".parse::<Date>().is_err());
        assert!("2015-01".parse::<Date>().is_err());
        assert!("2015-02-30".parse::<Date>().is_err());
        assert!("20150105".parse::<Date>().is_err());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_interop() {
        let d = date(2015, 1, 5);
        let nd: chrono::NaiveDate = d.into();
        assert_eq!(nd, chrono::NaiveDate::from_ymd_opt(2015, 1, 5).unwrap());
        assert_eq!(Date::try_from(nd).unwrap(), d);
    }
}
