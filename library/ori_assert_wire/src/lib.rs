//! Cross-boundary codec for Ori assertion failures.
//!
//! Test results cross thread and process boundaries (parallel runners,
//! isolated test hosts) where object references are meaningless. This crate
//! flattens an [`AssertionFailure`](ori_assert::AssertionFailure) into a
//! [`SerializedFailure`] (field name → string or integer) and rebuilds it on
//! the far side:
//!
//! ```text
//! let payload = encode(&failure);
//! let json = payload.to_json();
//! // ... cross the boundary ...
//! let rebuilt = decode(&SerializedFailure::from_json(&json)?)?;
//! assert_eq!(rebuilt.message(), failure.message());
//! ```
//!
//! # Wire Format
//!
//! The format is versioned ([`field::WIRE_VERSION`]) and its field names are
//! stable (see [`field`]). Payloads missing a field their kind requires, or
//! carrying a field of the wrong primitive type, are rejected with
//! [`MalformedDiagnosticPayload`] instead of defaulting.

mod config;
mod decode;
mod encode;
mod error;
pub mod field;
mod payload;

pub use config::WireConfig;
pub use decode::{decode, decode_with};
pub use encode::encode;
pub use error::MalformedDiagnosticPayload;
pub use payload::{FieldValue, SerializedFailure};
