//! Error types for dateseries.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single [`Error`] enum below.  The [`ensure!`](crate::ensure)
//! and [`fail!`](crate::fail) macros are the usual way of producing one.

use thiserror::Error;

/// The top-level error type used throughout dateseries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed input: bad date components, mismatched collection lengths,
    /// reversed range bounds, out-of-range points, invalid options.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A positional accessor (earliest / latest) was used on an empty series,
    /// or a keyed lookup found nothing where a value is mandatory.
    #[error("no such element: {0}")]
    NotFound(String),

    /// A historic fixing is required but absent from the fixing series.
    #[error("missing fixing for {index} on {date}")]
    MissingFixing {
        /// Name of the index whose fixing is missing.
        index: String,
        /// The fixing date, formatted as `YYYY-MM-DD`.
        date: String,
    },

    /// General runtime failure.
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Return `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Return `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Shorthand `Result` type used throughout dateseries.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ds_core::ensure;
/// fn positive(x: f64) -> ds_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).unwrap_err().is_invalid_argument());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ds_core::fail;
/// fn always_err() -> ds_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_ratio(num: f64, den: f64) -> Result<f64> {
        crate::ensure!(den != 0.0, "denominator must be non-zero");
        Ok(num / den)
    }

    #[test]
    fn ensure_passes_and_fails() {
        approx::assert_relative_eq!(checked_ratio(3.0, 2.0).unwrap(), 1.5);
        let err = checked_ratio(1.0, 0.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid argument: denominator must be non-zero"
        );
    }

    #[test]
    fn missing_fixing_message() {
        let err = Error::MissingFixing {
            index: "GBP-LIBOR-3M".into(),
            date: "2014-06-30".into(),
        };
        assert_eq!(err.to_string(), "missing fixing for GBP-LIBOR-3M on 2014-06-30");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_predicate() {
        assert!(Error::NotFound("empty series".into()).is_not_found());
        assert!(!Error::Runtime("x".into()).is_invalid_argument());
    }
}
