//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[min, max)` have
//! equal likelyhood of happening.
//!

use std::fmt;

use rand::Rng;

use crate::{
    configuration::DISPLAY_PRECISION,
    distribution_trait::{Distribution, Parametric, check_arity, check_finite},
    errors::DistError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    /// The minimum value
    min: f64,
    /// The maximum value
    max: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `min` indicates the minimum value.
    ///  - `max` indicates the maximum value.
    ///  - `min < max` must be fulfilled or an error will be returned.
    ///     (`min == max` is also rejected)
    ///  - `min` and `max` must both be finite values (no `+-inf` or NaNs)
    pub fn new(min: f64, max: f64) -> Result<Uniform, DistError> {
        check_finite(Self::NAME, &[min, max])?;

        if max <= min {
            return Err(DistError::InvalidParameter {
                kind: Self::NAME,
                reason: "min must be less than max",
            });
        }

        return Ok(Uniform { min, max });
    }

    /// Return `min` (minimum value).
    pub const fn get_min(&self) -> f64 {
        return self.min;
    }

    /// Return `max` (maximum value).
    pub const fn get_max(&self) -> f64 {
        return self.max;
    }
}

impl Distribution for Uniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random::<f64>();
        // `max - min` can overflow for huge ranges, so interpolate instead of scaling
        let ret: f64 = (1.0 - u) * self.min + u * self.max;
        // rounding can land outside `[min, max)` for very narrow ranges
        if ret < self.min || self.max <= ret {
            return self.min;
        }
        return ret;
    }

    fn expected_value(&self) -> f64 {
        return 0.5 * (self.min + self.max);
    }

    fn variance(&self) -> f64 {
        let d: f64 = self.max - self.min;
        return d * d / 12.0;
    }
}

impl Parametric for Uniform {
    const NAME: &'static str = "uniform";

    /// ### Parameters for Uniform:
    ///
    /// The uniform has 2 parameters that determine the domain size, where
    /// `min < max`. The ordering is:
    ///
    /// > \[min, max\]
    fn number_of_parameters() -> u16 {
        2
    }

    fn get_parameters(&self, parameters: &mut [f64]) {
        parameters[0] = self.min;
        parameters[1] = self.max;
    }

    fn from_parameters(parameters: &[f64]) -> Result<Self, DistError> {
        check_arity::<Self>(parameters)?;
        return Uniform::new(parameters[0], parameters[1]);
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Uniform(min={:.*}, max={:.*})",
            DISPLAY_PRECISION, self.min, DISPLAY_PRECISION, self.max
        )
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform { min: 0.0, max: 1.0 }
    }
}
