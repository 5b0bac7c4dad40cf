//! # cashvec-core
//!
//! Record model, classifier, and conversion engine for CashVec.
//! The concrete Base58Check → CashAddr codec lives in `cashvec-codec`;
//! this crate only knows the [`AddressTranscoder`] seam.

pub mod classify;
pub mod engine;
pub mod record;
pub mod transcode;

pub use classify::{classify, Classification};
pub use engine::{ConvertEngine, ConvertReport, Warning};
pub use record::{Batch, Record, ShapeError};
pub use transcode::{AddressTranscoder, TranscodeError};
