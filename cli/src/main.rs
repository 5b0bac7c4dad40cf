//! CashVec CLI — convert legacy Bitcoin address test vectors to CashAddr.
//!
//! ```text
//! cashvec <INPUT> <OUTPUT>
//! ```
//!
//! The input is a JSON array of 3-element arrays (the shape of Bitcoin
//! Core's `base58_keys_valid.json`). The first element of each vector is a
//! Bitcoin address, converted to CashAddr in place, or a WIF private key,
//! left untouched. All other fields are preserved in the output file.

use anyhow::{Context, Result};
use cashvec_codec::CashAddrTranscoder;
use cashvec_core::{Batch, ConvertEngine};
use clap::Parser;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "cashvec",
    about = "Generates CashAddr (Bitcoin Cash address format) test vectors from Bitcoin addresses",
    long_about = "
Converts a JSON file of Bitcoin address test vectors to CashAddr format.

The input must be a JSON array of test vectors, each an array with exactly
3 elements:

[
    [\"<Bitcoin address or private key>\", <extra field>, <extra field>],
    ...
]

Addresses are converted in place; private keys (51/52 characters) are
skipped; extra fields are preserved in the output file unchanged. A vector
whose address fails to convert is reported and left as-is; the rest of the
batch is still converted.
",
    version
)]
struct Cli {
    /// JSON file with Bitcoin address test vectors
    input: PathBuf,

    /// JSON file to write with addresses in CashAddr format
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!(
        "CashVec v{} - CashAddr test vector generator",
        env!("CARGO_PKG_VERSION")
    );

    println!("Reading input: {}", cli.input.display());
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("read input file '{}'", cli.input.display()))?;
    let json: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse input file '{}' as JSON", cli.input.display()))?;
    let mut batch = Batch::from_value(json)?;

    println!("Converting {} test vectors...", batch.len());
    let engine = ConvertEngine::new(Arc::new(CashAddrTranscoder::new()));
    let report = engine.convert(&mut batch);

    println!("Writing output: {}", cli.output.display());
    write_pretty(&cli.output, &batch.into_value())?;

    println!(
        "Done. {} converted, {} skipped, {} failed.",
        report.converted,
        report.skipped,
        report.warnings.len()
    );
    Ok(())
}

/// Per-failure warnings come from the engine's `tracing::warn!` as they
/// occur; the default filter keeps them visible on stderr without the
/// engine's info-level chatter.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Write the output batch once, after the whole run, with stable 4-space
/// indentation so repeated runs diff cleanly.
fn write_pretty(path: &Path, value: &Value) -> Result<()> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).context("serialize output JSON")?;
    buf.push(b'\n');
    std::fs::write(path, buf)
        .with_context(|| format!("write output file '{}'", path.display()))
}
