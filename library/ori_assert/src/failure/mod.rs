//! The assertion failure envelope.
//!
//! [`AssertionFailure`] wraps a [`FailureKind`] with the state every kind
//! shares: the summary line, the captured inner cause, and the trace of the
//! site that raised it. Reporters read [`message`](AssertionFailure::message)
//! and [`stack_trace`](AssertionFailure::stack_trace); tooling reads the
//! typed fields through [`kind`](AssertionFailure::kind).

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt;

use crate::cause::{reflow_cause_message, InnerCause, NEWLINE};
use crate::collection::CollectionComparison;
use crate::kind::FailureKind;

/// The structured result of a failed assertion.
///
/// Immutable once built: the inner cause is captured and re-flowed at
/// construction, and the rendered message is derived from the fields on
/// every call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "assertion failures should be returned to the caller, not silently dropped"]
pub struct AssertionFailure {
    kind: FailureKind,
    summary: String,
    /// Re-flowed message of the wrapped cause.
    inner_cause_message: Option<String>,
    /// Raw trace text of the wrapped cause.
    inner_cause_trace: Option<String>,
    /// Trace text of the site that raised this failure.
    own_trace: Option<String>,
}

/// Every stored field of an [`AssertionFailure`], already captured.
///
/// Codecs use this to rebuild a failure on the far side of a boundary
/// without re-running comparison or re-flow logic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FailureParts {
    pub kind: FailureKind,
    pub summary: String,
    pub inner_cause_message: Option<String>,
    pub inner_cause_trace: Option<String>,
    pub own_trace: Option<String>,
}

impl AssertionFailure {
    /// Build a failure, capturing the inner cause if one is given.
    ///
    /// The cause's message is re-flowed now and its trace copied verbatim;
    /// the cause itself is not retained.
    pub fn new(
        kind: FailureKind,
        summary: impl Into<String>,
        cause: Option<&dyn InnerCause>,
    ) -> Self {
        let (inner_cause_message, inner_cause_trace) = match cause {
            Some(cause) => (
                Some(reflow_cause_message(&cause.cause_message())),
                cause.cause_trace().map(Cow::into_owned),
            ),
            None => (None, None),
        };

        tracing::trace!(
            kind = kind.tag().as_str(),
            has_cause = inner_cause_message.is_some(),
            "assertion failure constructed"
        );

        AssertionFailure {
            kind,
            summary: summary.into(),
            inner_cause_message,
            inner_cause_trace,
            own_trace: None,
        }
    }

    /// Build a failure with the kind's default summary.
    fn with_default_summary(kind: FailureKind, cause: Option<&dyn InnerCause>) -> Self {
        let summary = kind.tag().default_summary();
        Self::new(kind, summary, cause)
    }

    /// A sequence comparison failed.
    ///
    /// `cause` is only rendered when `fields` reports an item mismatch, but
    /// it is captured (and its trace chained) either way.
    #[cold]
    pub fn collection_comparison(
        fields: CollectionComparison,
        cause: Option<&dyn InnerCause>,
    ) -> Self {
        Self::with_default_summary(FailureKind::CollectionComparison(fields), cause)
    }

    /// Two values were expected to be equal.
    #[cold]
    pub fn equality(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::with_default_summary(
            FailureKind::Equality {
                expected: expected.into(),
                actual: actual.into(),
            },
            None,
        )
    }

    /// A condition expected to be `expected` evaluated to the opposite.
    #[cold]
    pub fn condition(expected: bool) -> Self {
        Self::with_default_summary(FailureKind::Condition { expected }, None)
    }

    /// A value fell outside `low..=high`.
    #[cold]
    pub fn range(
        low: impl Into<String>,
        high: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::with_default_summary(
            FailureKind::Range {
                low: low.into(),
                high: high.into(),
                actual: actual.into(),
            },
            None,
        )
    }

    /// Code did not raise the expected error type.
    ///
    /// Pass the raised error as `cause` so its message and trace survive.
    #[cold]
    pub fn throws(
        expected_type: impl Into<String>,
        actual_type: Option<String>,
        cause: Option<&dyn InnerCause>,
    ) -> Self {
        Self::with_default_summary(
            FailureKind::Throws {
                expected_type: expected_type.into(),
                actual_type,
            },
            cause,
        )
    }

    /// A free-form failure whose message is `message`.
    #[cold]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Custom, message, None)
    }

    /// Rebuild a failure from already-captured parts.
    ///
    /// Nothing is re-flowed; `inner_cause_message` is stored as given.
    pub fn from_parts(parts: FailureParts) -> Self {
        AssertionFailure {
            kind: parts.kind,
            summary: parts.summary,
            inner_cause_message: parts.inner_cause_message,
            inner_cause_trace: parts.inner_cause_trace,
            own_trace: parts.own_trace,
        }
    }

    /// Decompose into stored fields.
    pub fn into_parts(self) -> FailureParts {
        FailureParts {
            kind: self.kind,
            summary: self.summary,
            inner_cause_message: self.inner_cause_message,
            inner_cause_trace: self.inner_cause_trace,
            own_trace: self.own_trace,
        }
    }

    /// Attach the trace text of the raising site.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.own_trace = Some(trace.into());
        self
    }

    /// Attach the current thread's backtrace as the raising site's trace.
    pub fn capture_trace(self) -> Self {
        let trace = Backtrace::force_capture().to_string();
        self.with_trace(trace)
    }

    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The captured cause message, already re-flowed.
    pub fn inner_cause_message(&self) -> Option<&str> {
        self.inner_cause_message.as_deref()
    }

    pub fn inner_cause_trace(&self) -> Option<&str> {
        self.inner_cause_trace.as_deref()
    }

    pub fn own_trace(&self) -> Option<&str> {
        self.own_trace.as_deref()
    }

    /// Collection fields, if this is a collection comparison failure.
    pub fn collection(&self) -> Option<&CollectionComparison> {
        match &self.kind {
            FailureKind::CollectionComparison(fields) => Some(fields),
            _ => None,
        }
    }

    /// The summary line followed by the kind's detail lines.
    pub fn message(&self) -> String {
        let mut detail = String::new();
        self.kind
            .write_detail(&mut detail, self.inner_cause_message.as_deref());

        if detail.is_empty() {
            return self.summary.clone();
        }
        let mut message = String::with_capacity(self.summary.len() + NEWLINE.len() + detail.len());
        message.push_str(&self.summary);
        message.push_str(NEWLINE);
        message.push_str(&detail);
        message
    }

    /// The inner cause's trace followed by this failure's own trace.
    ///
    /// Reads top-down as "where the problem occurred", then "where it was
    /// reported". Either half is omitted (with its separator) when absent.
    pub fn stack_trace(&self) -> String {
        match (&self.inner_cause_trace, &self.own_trace) {
            (Some(inner), Some(own)) => format!("{inner}{NEWLINE}{own}"),
            (Some(trace), None) | (None, Some(trace)) => trace.clone(),
            (None, None) => String::new(),
        }
    }

    fn has_trace(&self) -> bool {
        self.inner_cause_trace.is_some() || self.own_trace.is_some()
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for AssertionFailure {}

/// Failures nest: the wrapped failure contributes its composed message
/// and composed trace.
impl InnerCause for AssertionFailure {
    fn cause_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.message())
    }

    fn cause_trace(&self) -> Option<Cow<'_, str>> {
        self.has_trace().then(|| Cow::Owned(self.stack_trace()))
    }
}
