// Discrete
pub mod Poisson;

// Continuous
pub mod Normal;
pub mod Uniform;
