//! Decode errors for the coordinate wire format.

use thiserror::Error;

/// Errors that can occur when decoding a coordinates string.
///
/// Every variant is terminal for the decode call that produced it: a failed
/// decode never yields a partial or defaulted value, and there is nothing to
/// retry. An unrecognized label means the input is corrupt or was produced
/// by a newer schema revision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinatesError {
    /// The first segment does not name a known package ecosystem.
    #[error("Unknown component type: '{0}'")]
    UnknownComponentType(String),

    /// The second segment does not name a known hosting service.
    #[error("Unknown provider: '{0}'")]
    UnknownProvider(String),

    /// The input has fewer slash-separated segments than required.
    #[error("Missing '{field}' segment in coordinates '{input}'")]
    MissingField {
        /// The first segment that was expected but absent.
        field: &'static str,
        /// The input string that failed to decode.
        input: String,
    },
}
