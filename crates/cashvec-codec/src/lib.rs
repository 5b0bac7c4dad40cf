//! # cashvec-codec
//!
//! The production [`AddressTranscoder`]: decode a legacy Base58Check
//! address, re-encode the payload as CashAddr. Checksum and hashing
//! internals belong to the `bitcoincash-addr` crate; this crate only maps
//! its results onto the engine's error taxonomy.

use bitcoincash_addr::{Address, Scheme};
use cashvec_core::{AddressTranscoder, TranscodeError};

/// Legacy address to CashAddr transcoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashAddrTranscoder;

impl CashAddrTranscoder {
    pub fn new() -> Self {
        Self
    }
}

impl AddressTranscoder for CashAddrTranscoder {
    fn reformat(&self, token: &str) -> Result<String, TranscodeError> {
        let mut address =
            Address::decode(token).map_err(|err| TranscodeError::Decode(detail(&err)))?;

        address.scheme = Scheme::CashAddr;
        address
            .encode()
            .map_err(|err| TranscodeError::Encode(detail(&err)))
    }
}

/// Render a codec error for the warning line.
fn detail<E: std::fmt::Debug>(err: &E) -> String {
    format!("{err:?}")
}
