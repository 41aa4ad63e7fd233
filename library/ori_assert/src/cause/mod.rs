//! Inner causes and the re-flow rule for embedding their messages.
//!
//! A failure that wraps another failure captures the wrapped message once,
//! at construction, in re-flowed form:
//!
//! ```text
//! Inner exception: Values differ
//!         Expected: 5
//!         Actual: 7
//! ```
//!
//! Continuation lines are indented by [`CAUSE_INDENT`] so the embedded text
//! stays visually subordinate to the line that introduces it.

use std::borrow::Cow;
use std::error::Error;

/// Line separator used when composing messages and traces.
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

/// Line separator used when composing messages and traces.
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";

/// Indent prefixed to every continuation line of an embedded cause message.
pub const CAUSE_INDENT: &str = "        ";

/// Re-flow a wrapped message for embedding inside a parent message.
///
/// Splits on every `\r` and `\n`, drops empty segments, and prefixes each
/// segment after the first with [`CAUSE_INDENT`]. An empty message yields an
/// empty string.
pub fn reflow_cause_message(message: &str) -> String {
    let mut reflowed = String::with_capacity(message.len());
    let segments = message
        .split(|c| c == '\r' || c == '\n')
        .filter(|segment| !segment.is_empty());

    for (i, segment) in segments.enumerate() {
        if i > 0 {
            reflowed.push_str(NEWLINE);
            reflowed.push_str(CAUSE_INDENT);
        }
        reflowed.push_str(segment);
    }
    reflowed
}

/// Anything that can be wrapped as the inner cause of an assertion failure.
///
/// Only the text is captured; the cause itself is not retained, so a
/// failure stays renderable after the wrapped value is gone.
pub trait InnerCause {
    /// Message text of the wrapped failure.
    fn cause_message(&self) -> Cow<'_, str>;

    /// Trace text of the wrapped failure, if it recorded one.
    fn cause_trace(&self) -> Option<Cow<'_, str>>;
}

/// An inner cause reduced to its message and optional trace text.
///
/// Use this to wrap failures that do not implement [`InnerCause`] directly,
/// such as errors from the code under test.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CapturedCause {
    message: String,
    trace: Option<String>,
}

impl CapturedCause {
    /// Create a cause with a message and no trace.
    pub fn new(message: impl Into<String>) -> Self {
        CapturedCause {
            message: message.into(),
            trace: None,
        }
    }

    /// Attach trace text to this cause.
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Capture an error and its `source()` chain.
    ///
    /// Each error in the chain contributes one line, outermost first.
    pub fn from_error(error: &dyn Error) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(NEWLINE);
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        CapturedCause::new(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

impl InnerCause for CapturedCause {
    fn cause_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn cause_trace(&self) -> Option<Cow<'_, str>> {
        self.trace.as_deref().map(Cow::Borrowed)
    }
}
