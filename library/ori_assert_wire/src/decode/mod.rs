//! Payload → failure.
//!
//! Decoding rebuilds the failure from its captured text and fields; it
//! never re-runs comparison or re-flow logic, so the rebuilt failure's
//! `message()` and `stack_trace()` are byte-identical to the original's.
//!
//! Every field the payload's kind requires must be present with the right
//! primitive type. A missing count is an error, never a silent 0.

use std::str::FromStr;

use ori_assert::{
    AssertionFailure, CollectionComparison, FailureKind, FailureParts, FailureTag,
};

use crate::field::{self, WIRE_VERSION};
use crate::{FieldValue, MalformedDiagnosticPayload, SerializedFailure, WireConfig};

/// Rebuild a failure with the default [`WireConfig`].
pub fn decode(payload: &SerializedFailure) -> Result<AssertionFailure, MalformedDiagnosticPayload> {
    decode_with(payload, &WireConfig::default())
}

/// Rebuild a failure.
#[tracing::instrument(level = "trace", skip_all, fields(len = payload.len()))]
pub fn decode_with(
    payload: &SerializedFailure,
    config: &WireConfig,
) -> Result<AssertionFailure, MalformedDiagnosticPayload> {
    let result = decode_parts(&FieldReader { payload }, config);
    if let Err(err) = &result {
        tracing::debug!(%err, "rejected diagnostic payload");
    }
    result.map(AssertionFailure::from_parts)
}

fn decode_parts(
    reader: &FieldReader<'_>,
    config: &WireConfig,
) -> Result<FailureParts, MalformedDiagnosticPayload> {
    check_version(reader.required_int(field::VERSION)?, config)?;

    let kind_str = reader.required_str(field::KIND)?;
    let tag = FailureTag::from_str(kind_str).map_err(|()| MalformedDiagnosticPayload::UnknownKind {
        kind: kind_str.to_string(),
    })?;

    if config.reject_unknown_fields {
        if let Some((name, _)) = reader
            .payload
            .iter()
            .find(|(name, _)| !field::is_known(tag, name))
        {
            return Err(MalformedDiagnosticPayload::UnknownField {
                field: name.to_string(),
                kind: tag.as_str(),
            });
        }
    }

    Ok(FailureParts {
        kind: decode_kind(tag, reader)?,
        summary: reader.required_str(field::SUMMARY)?.to_string(),
        inner_cause_message: reader.optional_string(field::INNER_CAUSE_MESSAGE)?,
        inner_cause_trace: reader.optional_string(field::INNER_CAUSE_TRACE)?,
        own_trace: reader.optional_string(field::STACK_TRACE)?,
    })
}

fn check_version(found: i64, config: &WireConfig) -> Result<(), MalformedDiagnosticPayload> {
    let current = i64::from(WIRE_VERSION);
    let supported = found >= 1 && (found <= current || config.accept_newer_versions);
    if supported {
        Ok(())
    } else {
        Err(MalformedDiagnosticPayload::UnsupportedVersion {
            found,
            supported: WIRE_VERSION,
        })
    }
}

fn decode_kind(
    tag: FailureTag,
    reader: &FieldReader<'_>,
) -> Result<FailureKind, MalformedDiagnosticPayload> {
    let kind = match tag {
        FailureTag::CollectionComparison => {
            FailureKind::CollectionComparison(CollectionComparison::from_sentinel(
                reader.required_count(field::EXPECTED_COUNT)?,
                reader.required_count(field::ACTUAL_COUNT)?,
                reader.required_int(field::INDEX_FAILURE_POINT)?,
            ))
        }
        FailureTag::Equality => FailureKind::Equality {
            expected: reader.required_str(field::EXPECTED)?.to_string(),
            actual: reader.required_str(field::ACTUAL)?.to_string(),
        },
        FailureTag::Condition => FailureKind::Condition {
            expected: match reader.required_int(field::EXPECTED_VALUE)? {
                0 => false,
                1 => true,
                value => {
                    return Err(MalformedDiagnosticPayload::FieldOutOfRange {
                        field: field::EXPECTED_VALUE,
                        value,
                    })
                }
            },
        },
        FailureTag::Range => FailureKind::Range {
            low: reader.required_str(field::LOW)?.to_string(),
            high: reader.required_str(field::HIGH)?.to_string(),
            actual: reader.required_str(field::ACTUAL)?.to_string(),
        },
        FailureTag::Throws => FailureKind::Throws {
            expected_type: reader.required_str(field::EXPECTED_TYPE)?.to_string(),
            actual_type: reader.optional_string(field::ACTUAL_TYPE)?,
        },
        FailureTag::Custom => FailureKind::Custom,
    };
    Ok(kind)
}

/// Typed field access over a payload.
struct FieldReader<'a> {
    payload: &'a SerializedFailure,
}

impl<'a> FieldReader<'a> {
    fn required(&self, name: &'static str) -> Result<&'a FieldValue, MalformedDiagnosticPayload> {
        self.payload
            .get(name)
            .ok_or(MalformedDiagnosticPayload::MissingField { field: name })
    }

    fn required_int(&self, name: &'static str) -> Result<i64, MalformedDiagnosticPayload> {
        let value = self.required(name)?;
        value.as_int().ok_or(MalformedDiagnosticPayload::WrongFieldType {
            field: name,
            expected: "an integer",
            found: value.type_name(),
        })
    }

    /// A non-negative integer.
    fn required_count(&self, name: &'static str) -> Result<usize, MalformedDiagnosticPayload> {
        let value = self.required_int(name)?;
        usize::try_from(value)
            .map_err(|_| MalformedDiagnosticPayload::FieldOutOfRange { field: name, value })
    }

    fn required_str(&self, name: &'static str) -> Result<&'a str, MalformedDiagnosticPayload> {
        let value = self.required(name)?;
        Self::expect_str(name, value)
    }

    /// Absent is fine; present with the wrong type is not.
    fn optional_string(
        &self,
        name: &'static str,
    ) -> Result<Option<String>, MalformedDiagnosticPayload> {
        self.payload
            .get(name)
            .map(|value| Self::expect_str(name, value).map(str::to_string))
            .transpose()
    }

    fn expect_str(
        name: &'static str,
        value: &'a FieldValue,
    ) -> Result<&'a str, MalformedDiagnosticPayload> {
        value.as_str().ok_or(MalformedDiagnosticPayload::WrongFieldType {
            field: name,
            expected: "a string",
            found: value.type_name(),
        })
    }
}

impl TryFrom<&SerializedFailure> for AssertionFailure {
    type Error = MalformedDiagnosticPayload;

    fn try_from(payload: &SerializedFailure) -> Result<Self, Self::Error> {
        decode(payload)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
