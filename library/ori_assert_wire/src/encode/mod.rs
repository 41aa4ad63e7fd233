//! Failure → payload.

use ori_assert::{AssertionFailure, FailureKind};

use crate::field::{self, WIRE_VERSION};
use crate::SerializedFailure;

/// Flatten a failure into a payload.
///
/// Emits the envelope (version, kind, summary, captured cause, own trace)
/// and every field of the failure's kind. Absent optional text is omitted
/// rather than written as an empty string.
#[tracing::instrument(level = "trace", skip_all, fields(kind = failure.kind().tag().as_str()))]
pub fn encode(failure: &AssertionFailure) -> SerializedFailure {
    let mut payload = SerializedFailure::new();
    payload.insert(field::VERSION, i64::from(WIRE_VERSION));
    payload.insert(field::KIND, failure.kind().tag().as_str());
    payload.insert(field::SUMMARY, failure.summary());

    if let Some(message) = failure.inner_cause_message() {
        payload.insert(field::INNER_CAUSE_MESSAGE, message);
    }
    if let Some(trace) = failure.inner_cause_trace() {
        payload.insert(field::INNER_CAUSE_TRACE, trace);
    }
    if let Some(trace) = failure.own_trace() {
        payload.insert(field::STACK_TRACE, trace);
    }

    encode_kind(failure.kind(), &mut payload);
    payload
}

fn encode_kind(kind: &FailureKind, payload: &mut SerializedFailure) {
    match kind {
        FailureKind::CollectionComparison(fields) => {
            payload.insert(field::EXPECTED_COUNT, fields.expected_count_i64());
            payload.insert(field::ACTUAL_COUNT, fields.actual_count_i64());
            payload.insert(field::INDEX_FAILURE_POINT, fields.index_sentinel());
        }
        FailureKind::Equality { expected, actual } => {
            payload.insert(field::EXPECTED, expected.as_str());
            payload.insert(field::ACTUAL, actual.as_str());
        }
        FailureKind::Condition { expected } => {
            payload.insert(field::EXPECTED_VALUE, i64::from(*expected));
        }
        FailureKind::Range { low, high, actual } => {
            payload.insert(field::LOW, low.as_str());
            payload.insert(field::HIGH, high.as_str());
            payload.insert(field::ACTUAL, actual.as_str());
        }
        FailureKind::Throws {
            expected_type,
            actual_type,
        } => {
            payload.insert(field::EXPECTED_TYPE, expected_type.as_str());
            if let Some(actual_type) = actual_type {
                payload.insert(field::ACTUAL_TYPE, actual_type.as_str());
            }
        }
        FailureKind::Custom => {}
    }
}

impl From<&AssertionFailure> for SerializedFailure {
    fn from(failure: &AssertionFailure) -> Self {
        encode(failure)
    }
}
