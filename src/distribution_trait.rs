//! This script contains the interfaces used to comunicate with the distributions.
//!
//! [Distribution] is the capability set shared by every variant (sampling,
//! labels and basic statistics) and [Parametric] exposes the parameters in the
//! fixed order used by the `{type, params}` records.

use std::fmt;

use rand::Rng;

use crate::errors::DistError;

/// The trait for any distribution that can be built by the factory.
///
/// The random source is always given by the caller. Nothing in this crate
/// keeps a global or thread local generator, so seeding a generator and
/// passing it is enough to get reproducible samples.
pub trait Distribution: fmt::Display {
    //Requiered method:

    /// Samples the distribution at random, consuming randomness from `rng`.
    ///
    /// Reusing the same `rng` for consecutive calls gives a sequence of
    /// independent samples.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Returns the [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution.
    fn expected_value(&self) -> f64;

    /// Returns the [variance](https://en.wikipedia.org/wiki/Variance) of
    /// the distribution.
    fn variance(&self) -> f64;

    // Provided methods:

    /// sample_multiple allows to evaluate the [Distribution::sample] multiple times.
    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        return (0..n).map(|_| self.sample(rng)).collect::<Vec<f64>>();
    }

    /// A human readable description of the distribution and it's parameters.
    /// Parameters are shown with 2 decimals, for example `Normal(μ=0.00, σ=1.00)`.
    fn label(&self) -> String {
        return self.to_string();
    }
}

/// A distribution fully determined by a fixed list of `f64` parameters.
pub trait Parametric: Sized {
    /// The canonical (lowercase) name, also used as the `type` of the records.
    const NAME: &'static str;

    /// Returns the number of parameters of the distribution (it's arity).
    fn number_of_parameters() -> u16;

    /// Writes the parameters of the distribution into `parameters`, in the
    /// same order [Parametric::from_parameters] reads them.
    ///
    /// `parameters` must have at least [Parametric::number_of_parameters] elements.
    fn get_parameters(&self, parameters: &mut [f64]);

    /// Creates the distribution from it's parameters.
    ///
    /// Returns [DistError::ArityMismatch] if `parameters` does not have exactly
    /// [Parametric::number_of_parameters] elements and
    /// [DistError::InvalidParameter] if they are not valid.
    fn from_parameters(parameters: &[f64]) -> Result<Self, DistError>;

    /// Returns the parameters in a new vector.
    fn parameters(&self) -> Vec<f64> {
        let mut ret: Vec<f64> = vec![0.0; Self::number_of_parameters() as usize];
        self.get_parameters(&mut ret);
        return ret;
    }
}

/// Checks that `parameters` has exactly the arity of `P`.
pub(crate) fn check_arity<P: Parametric>(parameters: &[f64]) -> Result<(), DistError> {
    let expected: usize = P::number_of_parameters() as usize;
    if parameters.len() != expected {
        return Err(DistError::ArityMismatch {
            kind: P::NAME,
            expected,
            found: parameters.len(),
        });
    }
    return Ok(());
}

/// Returns [DistError::InvalidParameter] if any of the values is `+-inf` or NaN.
pub(crate) fn check_finite(kind: &'static str, values: &[f64]) -> Result<(), DistError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(DistError::InvalidParameter {
            kind,
            reason: "parameters must be finite (no `+-inf` or NaN)",
        });
    }
    return Ok(());
}
