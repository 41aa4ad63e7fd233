//! Stable wire field names.
//!
//! Persisted and transmitted payloads may predate the reader, so these
//! names must never change without bumping [`WIRE_VERSION`].

use ori_assert::FailureTag;

/// Current wire format version.
pub const WIRE_VERSION: u32 = 1;

// Envelope
pub const VERSION: &str = "Version";
pub const KIND: &str = "Kind";
pub const SUMMARY: &str = "Summary";
pub const INNER_CAUSE_MESSAGE: &str = "InnerCauseMessage";
pub const INNER_CAUSE_TRACE: &str = "InnerCauseTrace";
/// Trace of the site that raised the failure.
pub const STACK_TRACE: &str = "StackTrace";

// Collection comparison
pub const EXPECTED_COUNT: &str = "ExpectedCount";
pub const ACTUAL_COUNT: &str = "ActualCount";
/// -1 when counts differed before any element comparison.
pub const INDEX_FAILURE_POINT: &str = "IndexFailurePoint";

// Equality and range
pub const EXPECTED: &str = "Expected";
pub const ACTUAL: &str = "Actual";
pub const LOW: &str = "Low";
pub const HIGH: &str = "High";

// Condition (0 or 1)
pub const EXPECTED_VALUE: &str = "ExpectedValue";

// Throws
pub const EXPECTED_TYPE: &str = "ExpectedType";
pub const ACTUAL_TYPE: &str = "ActualType";

/// Fields every payload may carry, regardless of kind.
pub(crate) const ENVELOPE: &[&str] = &[
    VERSION,
    KIND,
    SUMMARY,
    INNER_CAUSE_MESSAGE,
    INNER_CAUSE_TRACE,
    STACK_TRACE,
];

/// Kind-specific fields a payload of `tag` may carry.
pub(crate) fn kind_fields(tag: FailureTag) -> &'static [&'static str] {
    match tag {
        FailureTag::CollectionComparison => &[EXPECTED_COUNT, ACTUAL_COUNT, INDEX_FAILURE_POINT],
        FailureTag::Equality => &[EXPECTED, ACTUAL],
        FailureTag::Condition => &[EXPECTED_VALUE],
        FailureTag::Range => &[LOW, HIGH, ACTUAL],
        FailureTag::Throws => &[EXPECTED_TYPE, ACTUAL_TYPE],
        FailureTag::Custom => &[],
    }
}

/// Whether `name` belongs in a payload of kind `tag`.
pub(crate) fn is_known(tag: FailureTag, name: &str) -> bool {
    ENVELOPE.contains(&name) || kind_fields(tag).contains(&name)
}
