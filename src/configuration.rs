//! This file contains the deafult values and other value choices used trough the library.
//!

/// The seed used by the interactive prompt when none is given, so two runs
/// with the same input print the same samples.
pub const DEFAULT_SEED: u64 = 42;

/// The line that ends the interactive prompt.
pub const QUIT_COMMAND: &str = "quit";

/// Knuth's Poisson sampler multiplies uniforms until the product drops under
/// `exp(-lambda)`. For big lambdas that bound underflows, so the rate is
/// split in chunks of at most this size and the counts of every chunk are added.
///
/// `exp(-256) ~= 6.6 * 10^-112`, far from the smallest normal `f64`.
pub const POISSON_CHUNK_LAMBDA: f64 = 256.0;

/// Above this rate the Poisson sampler stops using Knuth's algorithm (which
/// needs about `lambda` uniform draws) and uses a rounded normal
/// approximation `round(lambda + sqrt(lambda) * z)` instead, so every sample
/// costs a bounded number of draws whatever the rate.
pub const POISSON_NORMAL_APPROX_LAMBDA: f64 = 1000.0;

/// Number of decimals used in labels and in the samples printed by the prompt.
pub const DISPLAY_PRECISION: usize = 2;
