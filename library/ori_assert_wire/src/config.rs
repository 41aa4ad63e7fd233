//! Decoder configuration.

/// Configuration for decoding payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireConfig {
    /// Reject fields this reader does not know for the payload's kind.
    ///
    /// Off by default so payloads from a newer writer that only add fields
    /// still decode.
    pub reject_unknown_fields: bool,
    /// Decode payloads whose version is newer than this reader's, using
    /// the fields this reader understands.
    pub accept_newer_versions: bool,
}

impl WireConfig {
    /// Strict decoding: unknown fields and newer versions are rejected.
    pub fn strict() -> Self {
        WireConfig {
            reject_unknown_fields: true,
            accept_newer_versions: false,
        }
    }
}
