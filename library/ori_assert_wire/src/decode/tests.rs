use ori_assert::CapturedCause;
use pretty_assertions::assert_eq;

use super::*;
use crate::encode;

fn count_mismatch_payload() -> SerializedFailure {
    encode(
        &AssertionFailure::collection_comparison(CollectionComparison::count_mismatch(2, 5), None)
            .with_trace("at outer()"),
    )
}

fn item_mismatch_failure() -> AssertionFailure {
    let cause = CapturedCause::new("Values differ\nExpected: 5\nActual: 7").with_trace("at Compare()");
    AssertionFailure::collection_comparison(
        CollectionComparison::item_mismatch(3, 3, 1),
        Some(&cause),
    )
    .with_trace("at outer()")
}

#[test]
fn test_decode_count_mismatch() {
    let failure = decode(&count_mismatch_payload()).unwrap();
    assert_eq!(
        failure.message(),
        "Collection comparison failure\nExpected item count: 2\nActual item count:   5"
    );
    assert_eq!(failure.stack_trace(), "at outer()");
    assert_eq!(
        failure.collection().copied(),
        Some(CollectionComparison::count_mismatch(2, 5))
    );
}

#[test]
fn test_decode_item_mismatch_is_identical() {
    let original = item_mismatch_failure();
    let rebuilt = decode(&encode(&original)).unwrap();
    assert_eq!(rebuilt.message(), original.message());
    assert_eq!(rebuilt.stack_trace(), "at Compare()\nat outer()");
    assert_eq!(rebuilt, original);
}

#[test]
fn test_missing_expected_count_is_rejected() {
    let mut payload = count_mismatch_payload();
    payload.remove(field::EXPECTED_COUNT);
    assert_eq!(
        decode(&payload),
        Err(MalformedDiagnosticPayload::MissingField {
            field: "ExpectedCount"
        })
    );
}

#[test]
fn test_every_required_collection_field_is_checked() {
    for name in [
        field::VERSION,
        field::KIND,
        field::SUMMARY,
        field::EXPECTED_COUNT,
        field::ACTUAL_COUNT,
        field::INDEX_FAILURE_POINT,
    ] {
        let mut payload = count_mismatch_payload();
        payload.remove(name);
        assert_eq!(
            decode(&payload),
            Err(MalformedDiagnosticPayload::MissingField { field: name }),
            "removing {name}"
        );
    }
}

#[test]
fn test_optional_fields_may_be_absent() {
    let mut payload = encode(&item_mismatch_failure());
    payload.remove(field::INNER_CAUSE_MESSAGE);
    payload.remove(field::INNER_CAUSE_TRACE);
    payload.remove(field::STACK_TRACE);

    let failure = decode(&payload).unwrap();
    assert_eq!(failure.inner_cause_message(), None);
    assert_eq!(failure.stack_trace(), "");
}

#[test]
fn test_wrong_type_is_rejected() {
    let mut payload = count_mismatch_payload();
    payload.insert(field::ACTUAL_COUNT, "5");
    assert_eq!(
        decode(&payload),
        Err(MalformedDiagnosticPayload::WrongFieldType {
            field: "ActualCount",
            expected: "an integer",
            found: "a string",
        })
    );

    let mut payload = count_mismatch_payload();
    payload.insert(field::STACK_TRACE, 7_i64);
    assert_eq!(
        decode(&payload),
        Err(MalformedDiagnosticPayload::WrongFieldType {
            field: "StackTrace",
            expected: "a string",
            found: "an integer",
        })
    );
}

#[test]
fn test_negative_count_is_rejected() {
    let mut payload = count_mismatch_payload();
    payload.insert(field::EXPECTED_COUNT, -3_i64);
    assert_eq!(
        decode(&payload),
        Err(MalformedDiagnosticPayload::FieldOutOfRange {
            field: "ExpectedCount",
            value: -3,
        })
    );
}

#[test]
fn test_any_negative_index_decodes_as_not_applicable() {
    let mut payload = count_mismatch_payload();
    payload.insert(field::INDEX_FAILURE_POINT, -42_i64);
    let failure = decode(&payload).unwrap();
    assert_eq!(failure.collection().unwrap().index_failure_point(), None);
    assert!(failure.message().contains("Expected item count: 2"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let mut payload = count_mismatch_payload();
    payload.insert(field::KIND, "approximate");
    assert_eq!(
        decode(&payload),
        Err(MalformedDiagnosticPayload::UnknownKind {
            kind: "approximate".into()
        })
    );
}

#[test]
fn test_version_checks() {
    for version in [0_i64, -1, 2] {
        let mut payload = count_mismatch_payload();
        payload.insert(field::VERSION, version);
        assert_eq!(
            decode(&payload),
            Err(MalformedDiagnosticPayload::UnsupportedVersion {
                found: version,
                supported: WIRE_VERSION,
            })
        );
    }
}

#[test]
fn test_newer_version_accepted_when_configured() {
    let mut payload = count_mismatch_payload();
    payload.insert(field::VERSION, 2_i64);
    payload.insert("ElementTypeName", "int");
    let config = WireConfig {
        accept_newer_versions: true,
        ..WireConfig::default()
    };
    let failure = decode_with(&payload, &config).unwrap();
    assert_eq!(failure.collection().unwrap().actual_count(), 5);
}

#[test]
fn test_unknown_fields_tolerated_by_default() {
    let mut payload = count_mismatch_payload();
    payload.insert("ElementTypeName", "int");
    assert!(decode(&payload).is_ok());
}

#[test]
fn test_unknown_fields_rejected_when_strict() {
    let mut payload = count_mismatch_payload();
    payload.insert(field::EXPECTED, "5");
    assert_eq!(
        decode_with(&payload, &WireConfig::strict()),
        Err(MalformedDiagnosticPayload::UnknownField {
            field: "Expected".into(),
            kind: "collection_comparison",
        })
    );
    assert!(decode_with(&count_mismatch_payload(), &WireConfig::strict()).is_ok());
}

#[test]
fn test_condition_value_out_of_range() {
    let mut payload = encode(&AssertionFailure::condition(true));
    payload.insert(field::EXPECTED_VALUE, 2_i64);
    assert_eq!(
        decode(&payload),
        Err(MalformedDiagnosticPayload::FieldOutOfRange {
            field: "ExpectedValue",
            value: 2,
        })
    );
}

#[test]
fn test_missing_equality_field() {
    let mut payload = encode(&AssertionFailure::equality("5", "7"));
    payload.remove(field::ACTUAL);
    assert_eq!(
        decode(&payload),
        Err(MalformedDiagnosticPayload::MissingField { field: "Actual" })
    );
}

#[test]
fn test_try_from_payload() {
    let payload = count_mismatch_payload();
    let failure = AssertionFailure::try_from(&payload).unwrap();
    assert_eq!(failure.summary(), "Collection comparison failure");
}

#[test]
fn test_error_display() {
    let err = MalformedDiagnosticPayload::MissingField {
        field: "ExpectedCount",
    };
    assert_eq!(
        err.to_string(),
        "payload is missing required field `ExpectedCount`"
    );
}
