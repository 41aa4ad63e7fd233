//! Diagnostic fields for element-by-element sequence comparison.
//!
//! A collection comparison fails in one of two mutually exclusive modes:
//!
//! - **Count mismatch**: the sequences had different lengths, so no element
//!   was compared. The message reports both counts.
//! - **Item mismatch**: comparison reached an element that differed. The
//!   message reports its index and the captured inner cause.
//!
//! The rendered message alone discloses which mode applies.
//!
//! Counts and indices cross the wire as signed 64-bit integers, so every
//! field is capped at [`CollectionComparison::MAX_REPORTED`] when the
//! fields are built. A capped value is logged at `warn`.

use std::fmt::Write;

use crate::cause::NEWLINE;

/// Fields of a failed sequence comparison.
///
/// Set once at construction; read through accessors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CollectionComparison {
    expected_count: usize,
    actual_count: usize,
    /// First mismatching element, or `None` when counts differed first.
    index_failure_point: Option<usize>,
}

impl CollectionComparison {
    /// Largest count or index a failure reports: `i64::MAX`, or `usize::MAX`
    /// where that is smaller.
    #[allow(clippy::cast_possible_truncation)]
    pub const MAX_REPORTED: usize = if usize::BITS >= i64::BITS {
        i64::MAX as usize
    } else {
        usize::MAX
    };

    /// Counts differed before any element was compared.
    pub fn count_mismatch(expected_count: usize, actual_count: usize) -> Self {
        CollectionComparison {
            expected_count: cap("expected_count", expected_count),
            actual_count: cap("actual_count", actual_count),
            index_failure_point: None,
        }
    }

    /// The element at `index` (0-based) was the first to differ.
    pub fn item_mismatch(expected_count: usize, actual_count: usize, index: usize) -> Self {
        CollectionComparison {
            expected_count: cap("expected_count", expected_count),
            actual_count: cap("actual_count", actual_count),
            index_failure_point: Some(cap("index_failure_point", index)),
        }
    }

    /// Build from the sentinel form used by producers and on the wire.
    ///
    /// Any negative `index_failure_point` means "not applicable", not just -1.
    pub fn from_sentinel(
        expected_count: usize,
        actual_count: usize,
        index_failure_point: i64,
    ) -> Self {
        CollectionComparison {
            expected_count: cap("expected_count", expected_count),
            actual_count: cap("actual_count", actual_count),
            index_failure_point: usize::try_from(index_failure_point)
                .ok()
                .map(|index| cap("index_failure_point", index)),
        }
    }

    pub fn expected_count(&self) -> usize {
        self.expected_count
    }

    pub fn actual_count(&self) -> usize {
        self.actual_count
    }

    /// Index of the first mismatching element, if comparison got that far.
    pub fn index_failure_point(&self) -> Option<usize> {
        self.index_failure_point
    }

    /// Expected count as a wire integer.
    pub fn expected_count_i64(&self) -> i64 {
        to_i64(self.expected_count)
    }

    /// Actual count as a wire integer.
    pub fn actual_count_i64(&self) -> i64 {
        to_i64(self.actual_count)
    }

    /// Index in sentinel form: -1 when not applicable.
    pub fn index_sentinel(&self) -> i64 {
        self.index_failure_point.map_or(-1, to_i64)
    }

    /// Whether this failure reports a mismatching element rather than counts.
    pub fn is_item_mismatch(&self) -> bool {
        self.index_failure_point.is_some()
    }

    /// Write the detail lines for this comparison.
    ///
    /// Count mismatches never embed the inner cause, even when one was
    /// captured.
    pub(crate) fn write_detail(&self, out: &mut String, inner_cause: Option<&str>) {
        match self.index_failure_point {
            Some(index) => {
                let _ = write!(
                    out,
                    "Error during comparison of item at index {index}{NEWLINE}Inner exception: {}",
                    inner_cause.unwrap_or_default()
                );
            }
            None => {
                let _ = write!(
                    out,
                    "Expected item count: {}{NEWLINE}Actual item count:   {}",
                    self.expected_count, self.actual_count
                );
            }
        }
    }
}

/// Cap a field at [`CollectionComparison::MAX_REPORTED`].
fn cap(field: &'static str, value: usize) -> usize {
    if value > CollectionComparison::MAX_REPORTED {
        tracing::warn!(
            field,
            value,
            max = CollectionComparison::MAX_REPORTED,
            "collection comparison field exceeds the reportable maximum; capped"
        );
        CollectionComparison::MAX_REPORTED
    } else {
        value
    }
}

/// Fields are capped at `MAX_REPORTED`, so this conversion is exact.
#[allow(clippy::cast_possible_wrap)]
fn to_i64(value: usize) -> i64 {
    value as i64
}
