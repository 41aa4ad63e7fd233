//! Payload rejection errors.

use thiserror::Error;

/// A payload that cannot be turned back into an assertion failure.
///
/// Always a defect on the producing side (corruption or schema mismatch);
/// decoding never substitutes defaults for missing diagnostic fields.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedDiagnosticPayload {
    #[error("payload is missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("field `{field}` must be {expected}, found {found}")]
    WrongFieldType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field `{field}` is out of range: {value}")]
    FieldOutOfRange { field: &'static str, value: i64 },
    #[error("unknown failure kind `{kind}`")]
    UnknownKind { kind: String },
    #[error("unsupported wire version {found}; this reader supports 1 through {supported}")]
    UnsupportedVersion { found: i64, supported: u32 },
    #[error("unexpected field `{field}` in `{kind}` payload")]
    UnknownField { field: String, kind: &'static str },
    #[error("payload is not a valid JSON field map: {detail}")]
    InvalidJson { detail: String },
}

impl From<serde_json::Error> for MalformedDiagnosticPayload {
    fn from(err: serde_json::Error) -> Self {
        MalformedDiagnosticPayload::InvalidJson {
            detail: err.to_string(),
        }
    }
}
