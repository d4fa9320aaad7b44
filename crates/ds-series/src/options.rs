//! Configuration for [`SeriesBuilder`](crate::SeriesBuilder).

use ds_core::{ensure, Result};

/// Density above which [`Representation::Auto`] picks the dense layout.
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 0.7;

/// Which storage layout a builder should materialise.
///
/// The layout is never visible through the series contract; it only affects
/// memory use and lookup cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Representation {
    /// Dense when the data is dense enough, sparse otherwise.
    #[default]
    Auto,
    /// Always dense.  Memory grows with the calendar span, not the point count.
    Dense,
    /// Always sparse.
    Sparse,
}

/// Options controlling how a builder materialises its series.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `representation` | `Auto` | Layout selection |
/// | `density_threshold` | 0.7 | Points per calendar position above which `Auto` goes dense |
///
/// # Examples
///
/// ```
/// use ds_series::{BuildOptions, Representation};
///
/// let options = BuildOptions::new()
///     .with_representation(Representation::Auto)
///     .with_density_threshold(0.5);
/// assert!(options.validate().is_ok());
/// assert!(BuildOptions::new().with_density_threshold(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct BuildOptions {
    /// Layout selection.
    pub representation: Representation,

    /// Density (stored points divided by calendar positions between the first
    /// and last date) that must be strictly exceeded for `Auto` to go dense.
    pub density_threshold: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            density_threshold: DEFAULT_DENSITY_THRESHOLD,
        }
    }
}

impl BuildOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout selection.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Sets the density threshold.
    pub fn with_density_threshold(mut self, threshold: f64) -> Self {
        self.density_threshold = threshold;
        self
    }

    /// Validates the options.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.density_threshold.is_finite() && (0.0..=1.0).contains(&self.density_threshold),
            "density_threshold must lie in [0, 1], got {}",
            self.density_threshold
        );
        Ok(())
    }

    /// Whether `points` stored over `positions` calendar slots should be dense.
    pub(crate) fn wants_dense(&self, points: usize, positions: usize) -> bool {
        match self.representation {
            Representation::Dense => true,
            Representation::Sparse => false,
            Representation::Auto => {
                positions > 0 && points as f64 / positions as f64 > self.density_threshold
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = BuildOptions::default();
        assert_eq!(options.representation, Representation::Auto);
        assert!((options.density_threshold - 0.7).abs() < 1e-12);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_threshold() {
        for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let err = BuildOptions::new().with_density_threshold(bad).validate().unwrap_err();
            assert!(err.is_invalid_argument(), "{bad}");
        }
    }

    #[test]
    fn test_density_decision() {
        let auto = BuildOptions::default();
        assert!(auto.wants_dense(5, 5));
        assert!(auto.wants_dense(8, 11));
        assert!(!auto.wants_dense(7, 10));
        assert!(!auto.wants_dense(3, 366 * 2));
        assert!(BuildOptions::new().with_representation(Representation::Dense).wants_dense(1, 1000));
        assert!(!BuildOptions::new().with_representation(Representation::Sparse).wants_dense(5, 5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let options: BuildOptions = serde_json::from_str(r#"{"representation":"sparse"}"#).unwrap();
        assert_eq!(options.representation, Representation::Sparse);
        assert!((options.density_threshold - DEFAULT_DENSITY_THRESHOLD).abs() < 1e-12);
    }
}
