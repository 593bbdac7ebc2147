use thiserror::Error;

/// Everything that can go wrong while creating or decoding a distribution.
///
/// Construction is all or nothing: when one of these is returned, no
/// distribution was built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistError {
    /// The type tag is not one of `normal`, `poisson` or `uniform`.
    #[error("Unknown distribution type `{0}`. Expected one of: normal, poisson, uniform. ")]
    UnknownDistributionType(String),
    /// The number of parameters does not match the distribution type.
    #[error("`{kind}` requires exactly {expected} parameter(s) but {found} were given. ")]
    ArityMismatch {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    /// A parameter is outside the domain of the distribution. Non-finite
    /// values (`+-inf` or NaN) are always rejected.
    #[error("Invalid parameter for `{kind}`: {reason}. ")]
    InvalidParameter {
        kind: &'static str,
        reason: &'static str,
    },
    /// The serialized input could not be read as a `{type, params}` record.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}
