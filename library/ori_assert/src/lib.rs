//! Assertion failure diagnostics for the Ori test library.
//!
//! When an assertion fails, the assertion routine builds an
//! [`AssertionFailure`] and returns it as the `Err` of its result. The
//! failure carries:
//!
//! - Typed diagnostic fields ([`FailureKind`]) for tooling
//! - A composed human-readable [`message`](AssertionFailure::message)
//! - A composed [`stack_trace`](AssertionFailure::stack_trace) that chains
//!   the wrapped cause's trace ahead of the reporting site's trace
//!
//! # Example
//!
//! ```text
//! let cause = CapturedCause::new("Values differ\nExpected: 5\nActual: 7");
//! let failure = AssertionFailure::collection_comparison(
//!     CollectionComparison::item_mismatch(3, 3, 1),
//!     Some(&cause),
//! );
//!
//! // Collection comparison failure
//! // Error during comparison of item at index 1
//! // Inner exception: Values differ
//! //         Expected: 5
//! //         Actual: 7
//! println!("{}", failure.message());
//! ```
//!
//! Failures cross process and thread boundaries through the codec in
//! `ori_assert_wire`, which rebuilds them with [`AssertionFailure::from_parts`].

mod cause;
mod collection;
mod failure;
mod kind;

use std::sync::Once;

pub use cause::{reflow_cause_message, CapturedCause, InnerCause, CAUSE_INDENT, NEWLINE};
pub use collection::CollectionComparison;
pub use failure::{AssertionFailure, FailureParts};
pub use kind::{FailureKind, FailureTag};

/// Result of an assertion routine.
pub type AssertResult<T = ()> = Result<T, AssertionFailure>;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set;
/// enable with `RUST_LOG=ori_assert=trace,ori_assert_wire=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host harness.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
