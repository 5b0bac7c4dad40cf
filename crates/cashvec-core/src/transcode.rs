//! The `AddressTranscoder` seam between the engine and the concrete codec.
//!
//! The engine never decodes or encodes addresses itself; it hands tokens to
//! an `Arc<dyn AddressTranscoder>` and reacts to the result. The production
//! implementation lives in `cashvec-codec`; tests supply stubs.

use thiserror::Error;

/// Why one record's token could not be converted. Always recoverable: the
/// engine records a warning and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("field 0 is not a text token")]
    NotText,

    #[error("legacy address decode failed: {0}")]
    Decode(String),

    #[error("cashaddr encode failed: {0}")]
    Encode(String),
}

/// Decode a legacy address token and re-encode it in the target format.
///
/// Implementations must reject structurally invalid input (bad checksum,
/// unknown version byte) rather than guess; rejection is the engine's only
/// signal that a candidate token was not really an address. Failures must
/// be deterministic, the engine never retries.
pub trait AddressTranscoder: Send + Sync {
    fn reformat(&self, token: &str) -> Result<String, TranscodeError>;
}
