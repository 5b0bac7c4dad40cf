//! `ConvertEngine` — walks a batch and converts candidate addresses in place.

use crate::classify::{classify, Classification};
use crate::record::{Batch, Record};
use crate::transcode::{AddressTranscoder, TranscodeError};
use std::sync::Arc;
use tracing::{info, warn};

/// One per-record conversion failure. The record itself is left exactly as
/// it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Position of the record in the batch.
    pub index: usize,
    /// The original token, or empty when field 0 was not a string.
    pub token: String,
    pub reason: TranscodeError,
}

/// Result of a batch conversion. A non-empty warning list is a data-quality
/// note, not a failure; the run still succeeds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Total records visited.
    pub total: usize,
    /// Records whose token was rewritten to the target format.
    pub converted: usize,
    /// Private keys passed through untouched.
    pub skipped: usize,
    /// Failures in record order.
    pub warnings: Vec<Warning>,
}

/// Outcome of converting a single record.
enum Outcome {
    Converted,
    Skipped,
    Failed(TranscodeError),
}

/// Batch conversion engine.
pub struct ConvertEngine {
    transcoder: Arc<dyn AddressTranscoder>,
}

impl ConvertEngine {
    pub fn new(transcoder: Arc<dyn AddressTranscoder>) -> Self {
        Self { transcoder }
    }

    /// Convert every candidate address in `batch`, in order, isolating
    /// per-record failures. Batch length, record order, and fields 1..2 of
    /// every record are invariant; only field 0 of successfully converted
    /// records changes.
    pub fn convert(&self, batch: &mut Batch) -> ConvertReport {
        let total = batch.len();
        info!("converting {} test vectors", total);

        let mut report = ConvertReport {
            total,
            ..ConvertReport::default()
        };

        for (index, record) in batch.iter_mut().enumerate() {
            match self.convert_record(record) {
                Outcome::Converted => report.converted += 1,
                Outcome::Skipped => report.skipped += 1,
                Outcome::Failed(reason) => {
                    let token = record.token().unwrap_or_default().to_owned();
                    warn!(index, token = %token, %reason, "conversion failed");
                    report.warnings.push(Warning {
                        index,
                        token,
                        reason,
                    });
                }
            }
        }

        info!(
            "conversion complete: {} converted, {} skipped, {} failed",
            report.converted,
            report.skipped,
            report.warnings.len()
        );
        report
    }

    fn convert_record(&self, record: &mut Record) -> Outcome {
        let token = match record.token() {
            Some(token) => token,
            None => return Outcome::Failed(TranscodeError::NotText),
        };

        if classify(token) == Classification::PrivateKey {
            return Outcome::Skipped;
        }

        match self.transcoder.reformat(token) {
            Ok(target) => {
                record.set_token(target);
                Outcome::Converted
            }
            Err(reason) => Outcome::Failed(reason),
        }
    }
}
