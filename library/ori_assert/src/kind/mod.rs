//! The closed set of assertion failure kinds.
//!
//! Every kind of assertion owns one [`FailureKind`] variant carrying its
//! diagnostic fields. Message composition and wire encoding match on this
//! enum exhaustively, so adding a kind forces every consumer to handle it.

use std::fmt::{self, Write};

use crate::cause::NEWLINE;
use crate::collection::CollectionComparison;

/// Stable identifier for each failure kind.
///
/// The string form (`as_str()`) is written to the wire and must not change
/// without bumping the wire version.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FailureTag {
    CollectionComparison,
    Equality,
    Condition,
    Range,
    Throws,
    Custom,
}

impl FailureTag {
    /// All tags, in declaration order.
    pub const ALL: &'static [FailureTag] = &[
        FailureTag::CollectionComparison,
        FailureTag::Equality,
        FailureTag::Condition,
        FailureTag::Range,
        FailureTag::Throws,
        FailureTag::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureTag::CollectionComparison => "collection_comparison",
            FailureTag::Equality => "equality",
            FailureTag::Condition => "condition",
            FailureTag::Range => "range",
            FailureTag::Throws => "throws",
            FailureTag::Custom => "custom",
        }
    }

    /// Summary line used when the producer does not supply its own.
    pub fn default_summary(&self) -> &'static str {
        match self {
            FailureTag::CollectionComparison => "Collection comparison failure",
            FailureTag::Equality => "Equality comparison failure",
            FailureTag::Condition => "Condition failure",
            FailureTag::Range => "Range failure",
            FailureTag::Throws => "Error type mismatch",
            FailureTag::Custom => "Assertion failure",
        }
    }
}

impl fmt::Display for FailureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a tag string like `"collection_comparison"`.
impl std::str::FromStr for FailureTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|tag| tag.as_str() == s)
            .copied()
            .ok_or(())
    }
}

/// Typed diagnostic fields, one variant per assertion kind.
///
/// Values compared by equality and range assertions are carried as the
/// producer's rendered text; this crate never inspects them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FailureKind {
    /// Two ordered sequences compared element by element.
    CollectionComparison(CollectionComparison),
    /// Two values were expected to be equal.
    Equality { expected: String, actual: String },
    /// A boolean condition did not hold.
    Condition { expected: bool },
    /// A value fell outside an inclusive range.
    Range {
        low: String,
        high: String,
        actual: String,
    },
    /// Code was expected to raise a particular error type.
    ///
    /// `actual_type` is `None` when nothing was raised.
    Throws {
        expected_type: String,
        actual_type: Option<String>,
    },
    /// Free-form failure; the summary is the whole message.
    Custom,
}

impl FailureKind {
    pub fn tag(&self) -> FailureTag {
        match self {
            FailureKind::CollectionComparison(_) => FailureTag::CollectionComparison,
            FailureKind::Equality { .. } => FailureTag::Equality,
            FailureKind::Condition { .. } => FailureTag::Condition,
            FailureKind::Range { .. } => FailureTag::Range,
            FailureKind::Throws { .. } => FailureTag::Throws,
            FailureKind::Custom => FailureTag::Custom,
        }
    }

    /// Write the detail lines that follow the summary.
    ///
    /// Writes nothing for kinds without detail lines.
    pub(crate) fn write_detail(&self, out: &mut String, inner_cause: Option<&str>) {
        match self {
            FailureKind::CollectionComparison(fields) => fields.write_detail(out, inner_cause),
            FailureKind::Equality { expected, actual } => {
                let _ = write!(out, "Expected: {expected}{NEWLINE}Actual:   {actual}");
            }
            FailureKind::Condition { expected } => {
                let _ = write!(out, "Expected: {expected}{NEWLINE}Actual:   {}", !expected);
            }
            FailureKind::Range { low, high, actual } => {
                let _ = write!(out, "Range:  ({low} - {high}){NEWLINE}Actual: {actual}");
            }
            FailureKind::Throws {
                expected_type,
                actual_type,
            } => {
                let actual = actual_type.as_deref().unwrap_or("(no error)");
                let _ = write!(out, "Expected: {expected_type}{NEWLINE}Actual:   {actual}");
                if let Some(inner) = inner_cause {
                    let _ = write!(out, "{NEWLINE}Inner exception: {inner}");
                }
            }
            FailureKind::Custom => {}
        }
    }
}
