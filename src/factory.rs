//! # Distribution factory
//!
//! Maps a type tag (`"normal"`, `"poisson"` or `"uniform"`) and a list of
//! parameters to a concrete distribution. The result is an [AnyDistribution],
//! wich can be sampled, labeled and encoded without knowing the variant.
//!

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    codec::TaggedRecord,
    distribution_trait::{Distribution, Parametric},
    distributions::{Normal::Normal, Poisson::Poisson, Uniform::Uniform},
    errors::DistError,
};

/// The kinds of distribution the factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Normal,
    Poisson,
    Uniform,
}

impl DistributionKind {
    /// All the kinds, in the order they are shown to the user.
    pub const ALL: [DistributionKind; 3] = [
        DistributionKind::Normal,
        DistributionKind::Poisson,
        DistributionKind::Uniform,
    ];

    /// The canonical lowercase name (the `type` of a record).
    pub const fn name(self) -> &'static str {
        return match self {
            DistributionKind::Normal => Normal::NAME,
            DistributionKind::Poisson => Poisson::NAME,
            DistributionKind::Uniform => Uniform::NAME,
        };
    }

    /// The exact number of parameters needed to build this kind.
    pub fn arity(self) -> usize {
        let n: u16 = match self {
            DistributionKind::Normal => Normal::number_of_parameters(),
            DistributionKind::Poisson => Poisson::number_of_parameters(),
            DistributionKind::Uniform => Uniform::number_of_parameters(),
        };
        return n as usize;
    }

    /// The names of the parameters, in record order.
    pub const fn parameter_names(self) -> &'static [&'static str] {
        return match self {
            DistributionKind::Normal => &["mean", "standard deviation"],
            DistributionKind::Poisson => &["lambda"],
            DistributionKind::Uniform => &["min", "max"],
        };
    }
}

impl FromStr for DistributionKind {
    type Err = DistError;

    /// Case sensitive: only the canonical lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return DistributionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DistError::UnknownDistributionType(s.to_string()));
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A distribution of any of the supported kinds.
///
/// Once built, the parameters can not change and are always valid for the
/// variant. (De)serializes as a `{"type": ..., "params": [...]}` record with
/// the same checks as [create_distribution].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "TaggedRecord", try_from = "TaggedRecord")]
pub enum AnyDistribution {
    Normal(Normal),
    Poisson(Poisson),
    Uniform(Uniform),
}

impl AnyDistribution {
    /// Returns the kind of the variant.
    pub const fn kind(&self) -> DistributionKind {
        return match self {
            AnyDistribution::Normal(_) => DistributionKind::Normal,
            AnyDistribution::Poisson(_) => DistributionKind::Poisson,
            AnyDistribution::Uniform(_) => DistributionKind::Uniform,
        };
    }

    /// Returns the defining parameters in record order:
    ///  - Normal: `[mean, standard_deviation]`
    ///  - Poisson: `[lambda]`
    ///  - Uniform: `[min, max]`
    pub fn parameters(&self) -> Vec<f64> {
        return match self {
            AnyDistribution::Normal(n) => n.parameters(),
            AnyDistribution::Poisson(p) => p.parameters(),
            AnyDistribution::Uniform(u) => u.parameters(),
        };
    }
}

impl Distribution for AnyDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return match self {
            AnyDistribution::Normal(n) => n.sample(rng),
            AnyDistribution::Poisson(p) => p.sample(rng),
            AnyDistribution::Uniform(u) => u.sample(rng),
        };
    }

    fn expected_value(&self) -> f64 {
        return match self {
            AnyDistribution::Normal(n) => n.expected_value(),
            AnyDistribution::Poisson(p) => p.expected_value(),
            AnyDistribution::Uniform(u) => u.expected_value(),
        };
    }

    fn variance(&self) -> f64 {
        return match self {
            AnyDistribution::Normal(n) => n.variance(),
            AnyDistribution::Poisson(p) => p.variance(),
            AnyDistribution::Uniform(u) => u.variance(),
        };
    }
}

impl fmt::Display for AnyDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyDistribution::Normal(n) => fmt::Display::fmt(n, f),
            AnyDistribution::Poisson(p) => fmt::Display::fmt(p, f),
            AnyDistribution::Uniform(u) => fmt::Display::fmt(u, f),
        }
    }
}

impl From<Normal> for AnyDistribution {
    fn from(value: Normal) -> Self {
        AnyDistribution::Normal(value)
    }
}

impl From<Poisson> for AnyDistribution {
    fn from(value: Poisson) -> Self {
        AnyDistribution::Poisson(value)
    }
}

impl From<Uniform> for AnyDistribution {
    fn from(value: Uniform) -> Self {
        AnyDistribution::Uniform(value)
    }
}

/// Creates a distribution with the given type tag and parameters.
///
///  - `type_tag` must be `"normal"`, `"poisson"` or `"uniform"` (case sensitive),
///     otherwise [DistError::UnknownDistributionType] is returned.
///  - `params` must have exactly 2, 1 or 2 elements respectively. The count is
///     checked before the values, a wrong count is always [DistError::ArityMismatch].
///  - The values must fulfill the constraints of the variant, otherwise
///     [DistError::InvalidParameter] is returned.
///
/// ```
/// use DistributionFactory::factory::create_distribution;
/// use DistributionFactory::distribution_trait::Distribution;
///
/// let uniform = create_distribution("uniform", &[0.0, 10.0]).unwrap();
/// assert_eq!(uniform.label(), "Uniform(min=0.00, max=10.00)");
/// ```
pub fn create_distribution(type_tag: &str, params: &[f64]) -> Result<AnyDistribution, DistError> {
    let result: Result<AnyDistribution, DistError> =
        type_tag.parse::<DistributionKind>().and_then(|kind| match kind {
            DistributionKind::Normal => Normal::from_parameters(params).map(AnyDistribution::from),
            DistributionKind::Poisson => Poisson::from_parameters(params).map(AnyDistribution::from),
            DistributionKind::Uniform => Uniform::from_parameters(params).map(AnyDistribution::from),
        });

    match &result {
        Ok(distribution) => tracing::debug!(%distribution, "distribution created"),
        Err(error) => tracing::debug!(type_tag, ?params, %error, "distribution rejected"),
    }

    return result;
}
