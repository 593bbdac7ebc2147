#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `DistributionFactory` should have a snake case name"
// and allow the CamelCase modules in `distributions`.
// The rest of the names will follow the snake_case convention.

//! # Distribution Factory
//!
//! A small registry to create, sample and store probability distributions:
//!
//!  - [x] [Normal distribution](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Poisson distribution](crate::distributions::Poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!
//! ## Creating distributions
//!
//! [create_distribution](factory::create_distribution) takes a type tag and a
//! list of parameters and returns an [AnyDistribution](factory::AnyDistribution).
//! The number of parameters is checked first
//! ([ArityMismatch](errors::DistError::ArityMismatch)), then their values
//! ([InvalidParameter](errors::DistError::InvalidParameter)).
//!
//! Every distribution implements [Distribution](distribution_trait::Distribution):
//!  - [sample](distribution_trait::Distribution::sample): draws a value with a
//!     random source given by the caller (any [rand::Rng]). Seeding the
//!     generator makes the samples reproducible.
//!  - [label](distribution_trait::Distribution::label): a description such as
//!     `Uniform(min=0.00, max=10.00)`.
//!
//! ## Records
//!
//! The [codec] stores a distribution as `{"type": "normal", "params": [0.0, 1.0]}`.
//! [decode](codec::decode) checks the record exactly like the factory does, and
//! `decode(encode(d))` always gives back the same parameters.
//!
//! ```
//! use DistributionFactory::{codec, factory::create_distribution};
//!
//! let normal = create_distribution("normal", &[0.0, 1.0]).unwrap();
//! let bytes: Vec<u8> = codec::encode(&normal);
//! assert_eq!(bytes, br#"{"type":"normal","params":[0.0,1.0]}"#);
//! assert_eq!(codec::decode(&bytes).unwrap(), normal);
//! ```
//!
//! ***
//!

pub mod codec;
pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod errors;
pub mod factory;
pub mod prompt;
