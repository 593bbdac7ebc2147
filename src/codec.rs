//! # Serialization codec
//!
//! Distributions are stored as JSON records with a type tag and the
//! parameters in a fixed order:
//!
//! ```json
//! {"type":"normal","params":[0.0,1.0]}
//! ```
//!
//! Decoding goes trough [create_distribution], so a record is checked
//! exactly like the parameters typed by a user.
//!

use serde::{Deserialize, Serialize};

use crate::{
    errors::DistError,
    factory::{AnyDistribution, create_distribution},
};

/// The wire shape of a distribution. Field names and order are part of the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedRecord {
    /// `"normal"`, `"poisson"` or `"uniform"`
    #[serde(rename = "type")]
    pub kind: String,
    /// The parameters, in the order given by [AnyDistribution::parameters]
    pub params: Vec<f64>,
}

impl From<AnyDistribution> for TaggedRecord {
    fn from(value: AnyDistribution) -> Self {
        TaggedRecord::from(&value)
    }
}

impl From<&AnyDistribution> for TaggedRecord {
    fn from(value: &AnyDistribution) -> Self {
        TaggedRecord {
            kind: value.kind().name().to_string(),
            params: value.parameters(),
        }
    }
}

impl TryFrom<TaggedRecord> for AnyDistribution {
    type Error = DistError;

    fn try_from(record: TaggedRecord) -> Result<Self, Self::Error> {
        return create_distribution(&record.kind, &record.params);
    }
}

/// Serializes `distribution` as a JSON `{type, params}` record.
///
/// Decoding the returned bytes with [decode] gives back a distribution with
/// the exact same parameters.
pub fn encode(distribution: &AnyDistribution) -> Vec<u8> {
    let record: TaggedRecord = TaggedRecord::from(distribution);
    // a string and a list of `f64` always serialize, the `Err` arm is unreachable
    return match serde_json::to_vec(&record) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, ?record, "record could not be serialized");
            Vec::new()
        }
    };
}

/// Same as [encode] but returns a `String`.
pub fn encode_to_string(distribution: &AnyDistribution) -> String {
    let bytes: Vec<u8> = encode(distribution);
    // serde_json only writes valid UTF-8
    return String::from_utf8_lossy(&bytes).into_owned();
}

/// Deserializes a JSON `{type, params}` record and builds the distribution.
///
/// Returns [DistError::MalformedRecord] if `bytes` is not a record with a
/// string `type` and a list of numbers `params`. Otherwise the errors of
/// [create_distribution] ([DistError::UnknownDistributionType],
/// [DistError::ArityMismatch], [DistError::InvalidParameter]) are returned unchanged.
pub fn decode(bytes: &[u8]) -> Result<AnyDistribution, DistError> {
    let record: TaggedRecord = match serde_json::from_slice::<TaggedRecord>(bytes) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "record could not be parsed");
            return Err(DistError::MalformedRecord(e.to_string()));
        }
    };

    return AnyDistribution::try_from(record);
}
