//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! It has 2 parameters: the `mean` and the `standard_deviation`. The records
//! store them in that order.
//!

use std::f64::consts::PI;
use std::fmt;

use rand::Rng;

use crate::{
    configuration::DISPLAY_PRECISION,
    distribution_trait::{Distribution, Parametric, check_arity, check_finite},
    errors::DistError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, [DistError::InvalidParameter]
    /// will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, DistError> {
        check_finite(Self::NAME, &[mean, standard_deviation])?;

        if standard_deviation <= 0.0 {
            return Err(DistError::InvalidParameter {
                kind: Self::NAME,
                reason: "the standard deviation must be greater than 0",
            });
        }

        return Ok(Normal {
            mean,
            standard_deviation,
        });
    }

    /// Returns the mean, the first parameter of the normal distribution.
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal distribution.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }
}

/// Draws a standard normal value (`mean = 0`, `standard_deviation = 1`).
pub(crate) fn std_normal_sample<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    /*
        [Box-Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform):

        > z = sqrt(-2 * ln(u1)) * cos(2 * pi * u2)

        with `u1` and `u2` uniform. `u1` must be in `(0, 1]` so the
        logarithm is finite, therefore we use `1 - r` with `r` in `[0, 1)`.
        Only one of the 2 generated values is used.
    */
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();

    return (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
}

impl Distribution for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = std_normal_sample(rng);
        // huge (but finite) standard deviations can overflow to `+-inf`
        return z
            .mul_add(self.standard_deviation, self.mean)
            .clamp(f64::MIN, f64::MAX);
    }

    fn expected_value(&self) -> f64 {
        return self.mean;
    }

    fn variance(&self) -> f64 {
        return self.standard_deviation * self.standard_deviation;
    }
}

impl Parametric for Normal {
    const NAME: &'static str = "normal";

    /// ### Parameters for Normal:
    ///
    /// > \[mean, standard_deviation\]
    fn number_of_parameters() -> u16 {
        2
    }

    fn get_parameters(&self, parameters: &mut [f64]) {
        parameters[0] = self.mean;
        parameters[1] = self.standard_deviation;
    }

    fn from_parameters(parameters: &[f64]) -> Result<Self, DistError> {
        check_arity::<Self>(parameters)?;
        return Normal::new(parameters[0], parameters[1]);
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Normal(μ={:.*}, σ={:.*})",
            DISPLAY_PRECISION, self.mean, DISPLAY_PRECISION, self.standard_deviation
        )
    }
}

impl Default for Normal {
    /// The standard normal, `mean = 0.0` and `standard_deviation = 1.0`.
    fn default() -> Self {
        Normal {
            mean: 0.0,
            standard_deviation: 1.0,
        }
    }
}
