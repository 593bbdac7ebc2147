//! # Poisson distribution
//!
//! The [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
//! is a discrete distribution that counts the number of poisson events in a
//! given time with a given rate.
//!
//! The poisson distribution has a single parameter: the rate `lambda`. Lambda
//! represents the avarage number of events that happen in a given amount of time.
//!
//! The sumation of 2 Poisson distributed random variables is also poisson
//! distributed with the sum of the 2 original lambdas as it's own lambda.
//! The sampler relies on this for moderate lambdas and switches to a rounded
//! normal approximation above [POISSON_NORMAL_APPROX_LAMBDA].

use std::fmt;

use rand::Rng;

use crate::{
    configuration::{DISPLAY_PRECISION, POISSON_CHUNK_LAMBDA, POISSON_NORMAL_APPROX_LAMBDA},
    distribution_trait::{Distribution, Parametric, check_arity, check_finite},
    distributions::Normal::std_normal_sample,
    errors::DistError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new [Poisson] distribution.
    ///
    ///  - `lambda` indicates rate. And must fullfill:
    ///      - Must be finite (no `+-inf` nor NaNs)
    ///      - `0.0 < lambda`
    ///
    /// Otherwise [DistError::InvalidParameter] will be returned.
    pub fn new(lambda: f64) -> Result<Poisson, DistError> {
        check_finite(Self::NAME, &[lambda])?;

        if lambda <= 0.0 {
            return Err(DistError::InvalidParameter {
                kind: Self::NAME,
                reason: "lambda must be greater than 0",
            });
        }

        return Ok(Poisson { lambda });
    }

    /// Returns the value of `lambda`
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }
}

/// [Knuth's algorithm](https://en.wikipedia.org/wiki/Poisson_distribution#Random_variate_generation)
/// for a single rate. It is O(lambda), so `lambda` is expected to be at most
/// [POISSON_CHUNK_LAMBDA].
fn knuth_sample<R: Rng + ?Sized>(lambda: f64, rng: &mut R) -> f64 {
    let L: f64 = (-lambda).exp();
    let mut p: f64 = 1.0;
    let mut k: f64 = 0.0;

    loop {
        k += 1.0;
        let u: f64 = rng.random();
        p = p * u;

        if p <= L {
            break;
        }
    }

    return k - 1.0;
}

impl Distribution for Poisson {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if POISSON_NORMAL_APPROX_LAMBDA < self.lambda {
            // CLT: Poisson(lambda) ~= Normal(lambda, sqrt(lambda)) for big lambdas
            let z: f64 = std_normal_sample(rng);
            let ret: f64 = z.mul_add(self.lambda.sqrt(), self.lambda).round();
            return ret.max(0.0);
        }

        // at most POISSON_NORMAL_APPROX_LAMBDA / POISSON_CHUNK_LAMBDA chunks
        let mut remaining: f64 = self.lambda;
        let mut ret: f64 = 0.0;

        while POISSON_CHUNK_LAMBDA < remaining {
            ret += knuth_sample(POISSON_CHUNK_LAMBDA, rng);
            remaining -= POISSON_CHUNK_LAMBDA;
        }

        ret += knuth_sample(remaining, rng);
        return ret;
    }

    fn expected_value(&self) -> f64 {
        return self.lambda;
    }

    fn variance(&self) -> f64 {
        return self.lambda;
    }
}

impl Parametric for Poisson {
    const NAME: &'static str = "poisson";

    /// ### Parameters for Poisson:
    ///
    /// > \[lambda\]
    fn number_of_parameters() -> u16 {
        1
    }

    fn get_parameters(&self, parameters: &mut [f64]) {
        parameters[0] = self.lambda;
    }

    fn from_parameters(parameters: &[f64]) -> Result<Self, DistError> {
        check_arity::<Self>(parameters)?;
        return Poisson::new(parameters[0]);
    }
}

impl fmt::Display for Poisson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poisson(λ={:.*})", DISPLAY_PRECISION, self.lambda)
    }
}

impl Default for Poisson {
    fn default() -> Self {
        Poisson { lambda: 1.0 }
    }
}
