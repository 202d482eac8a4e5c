//! Uniform integration grid and trapezoidal rule.
//!
//! The grid is built by accumulating `x_step` from `x_min` while the point
//! stays at or below `x_max`. When the step does not divide the range, the
//! last point falls short of `x_max`; that truncation is part of the
//! contract.

use num_traits::Float;

use crate::types::PricingError;

/// Integration grid settings.
///
/// Settings are immutable values: an override produces a new value via
/// [`GridSettings::new`] rather than mutating an existing one.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::GridSettings;
///
/// let settings = GridSettings::new(1.0, 0.5, 100.0).unwrap();
/// assert_eq!(settings.points().count(), 199);
///
/// // x_max must leave room for at least one step
/// assert!(GridSettings::new(1.0, 0.5, 1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSettings {
    /// First grid point (non-negative).
    pub x_min: f64,
    /// Distance between consecutive points (positive).
    pub x_step: f64,
    /// Upper bound for grid points (at least `x_min + x_step`).
    pub x_max: f64,
}

impl Default for GridSettings {
    /// Default values:
    /// - `x_min`: 0.01
    /// - `x_step`: 0.5
    /// - `x_max`: 100.01
    fn default() -> Self {
        Self {
            x_min: 0.01,
            x_step: 0.5,
            x_max: 100.01,
        }
    }
}

impl GridSettings {
    /// Creates validated grid settings.
    ///
    /// # Errors
    /// `PricingError::Validation` when `x_min < 0`, `x_step <= 0`,
    /// `x_max < x_min + x_step`, or any value is not finite.
    pub fn new(x_min: f64, x_step: f64, x_max: f64) -> Result<Self, PricingError> {
        let settings = Self {
            x_min,
            x_step,
            x_max,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the grid invariants.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.x_min.is_finite() || self.x_min < 0.0 {
            return Err(PricingError::validation(format!(
                "x_min must be a non-negative number, got {}",
                self.x_min
            )));
        }
        if !self.x_step.is_finite() || self.x_step <= 0.0 {
            return Err(PricingError::validation(format!(
                "x_step must be a positive number, got {}",
                self.x_step
            )));
        }
        if !self.x_max.is_finite() || self.x_max < self.x_min + self.x_step {
            return Err(PricingError::validation(format!(
                "x_max must be greater than x_min + x_step, got {}",
                self.x_max
            )));
        }
        Ok(())
    }

    /// Iterates over the grid points in increasing order.
    pub fn points(&self) -> GridPoints {
        GridPoints {
            next: self.x_min,
            step: self.x_step,
            max: self.x_max,
            exhausted: false,
        }
    }
}

impl std::fmt::Display for GridSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{x_min: {}, x_step: {}, x_max: {}}}",
            self.x_min, self.x_step, self.x_max
        )
    }
}

/// Iterator over grid points produced by [`GridSettings::points`].
#[derive(Debug, Clone)]
pub struct GridPoints {
    next: f64,
    step: f64,
    max: f64,
    exhausted: bool,
}

impl Iterator for GridPoints {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.exhausted || self.next > self.max {
            return None;
        }
        let current = self.next;
        self.next = current + self.step;
        // Step lost to rounding: the accumulation can no longer advance.
        if self.next <= current {
            self.exhausted = true;
        }
        Some(current)
    }
}

/// Running trapezoidal sum over pre-weighted integrand samples.
///
/// Keeps the first sample, the latest sample and the running total, so a
/// grid of any length is integrated in constant memory.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::TrapezoidalAccumulator;
///
/// let mut acc = TrapezoidalAccumulator::new();
/// for v in [0.0_f64, 1.0, 2.0] {
///     acc.push(v);
/// }
/// assert_eq!(acc.len(), 3);
/// assert!((acc.finish() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidalAccumulator<T> {
    first: Option<T>,
    last: T,
    total: T,
    len: usize,
}

impl<T: Float> TrapezoidalAccumulator<T> {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            first: None,
            last: T::zero(),
            total: T::zero(),
            len: 0,
        }
    }

    /// Adds the next sample.
    #[inline]
    pub fn push(&mut self, sample: T) {
        if self.first.is_none() {
            self.first = Some(sample);
        }
        self.last = sample;
        self.total = self.total + sample;
        self.len += 1;
    }

    /// Number of samples pushed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no sample has been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum minus half of the first and last samples; zero when empty.
    pub fn finish(self) -> T {
        match self.first {
            Some(first) => {
                let half = T::from(0.5).unwrap_or_else(T::zero);
                self.total - half * (first + self.last)
            }
            None => T::zero(),
        }
    }
}

impl<T: Float> Default for TrapezoidalAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Extend<T> for TrapezoidalAccumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

/// Trapezoidal rule over pre-weighted integrand samples.
///
/// Each sample must already carry the step weight (`f(x_i) * h`). Returns
/// the plain sum minus half of the first and last samples, in one pass.
/// No samples integrate to zero.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::trapezoidal_sum;
///
/// // f(x) = x on [0, 2] with h = 1
/// let samples = [0.0_f64, 1.0, 2.0];
/// assert!((trapezoidal_sum(samples) - 2.0).abs() < 1e-12);
/// ```
pub fn trapezoidal_sum<T, I>(samples: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut acc = TrapezoidalAccumulator::new();
    acc.extend(samples);
    acc.finish()
}
