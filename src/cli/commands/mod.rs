//! Command implementation modules
//!
//! Each command reads its inputs, calls into [`crate::premium`], and writes
//! the rendered result to the supplied writer.

pub mod batch;
pub mod quote;
pub mod rates;

// Re-export command execution functions
pub use batch::{quote_csv, run_batch_command, BatchEntry, BatchParams, BatchReport, RowOutcome};
pub use quote::{run_quote_command, QuoteParams};
pub use rates::run_rates_command;

use crate::config::{CalcConfig, OutputFormat};
use crate::cli::validation::AgePolicy;
use crate::error::{CalcError, ErrorCode};
use serde::Serialize;
use std::io::Write;

/// Age policy for a command, with `--strict-age` forcing enforcement
pub(crate) fn effective_policy(config: &CalcConfig, strict_age: bool) -> AgePolicy {
    let mut policy = config.age_policy();
    policy.enforce |= strict_age;
    policy
}

pub(crate) fn effective_format(config: &CalcConfig, flag: Option<OutputFormat>) -> OutputFormat {
    flag.unwrap_or(config.output.format)
}

pub(crate) fn write_output<W: Write>(out: &mut W, text: &str) -> Result<(), CalcError> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| {
            CalcError::Other {
                code: ErrorCode::OTHER_OUTPUT_ERROR,
                message: "Failed to write output".to_string(),
                source: None,
            }
            .with_source(e)
        })
}

pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CalcError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        CalcError::Other {
            code: ErrorCode::OTHER_OUTPUT_ERROR,
            message: "Failed to serialize output".to_string(),
            source: None,
        }
        .with_source(e)
    })?;
    write_output(out, &format!("{}\n", json))
}
