//! Batch command implementation
//!
//! Quotes every row of a CSV file with `age`, `gender`, and `coverage`
//! columns (header names are matched case-insensitively, extra columns are
//! ignored) and previews the first rows of the result.

use super::{effective_format, effective_policy, write_json, write_output};
use crate::cli::output::render_batch;
use crate::cli::validation::{parse_request, AgePolicy};
use crate::config::{CalcConfig, OutputFormat};
use crate::error::{CalcError, ErrorCode, InputErrors};
use crate::premium::Quote;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const REQUIRED_COLUMNS: [&str; 3] = ["age", "gender", "coverage"];

/// Inputs for `premium batch`
#[derive(Debug, Clone)]
pub struct BatchParams {
    pub file: PathBuf,
    pub limit: Option<usize>,
    pub format: Option<OutputFormat>,
    pub fail_fast: bool,
    pub strict_age: bool,
}

/// Result of quoting one CSV row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RowOutcome {
    Quoted { quote: Quote },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// 1-based data row, not counting the header
    pub row: usize,
    #[serde(flatten)]
    pub outcome: RowOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn quoted(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, RowOutcome::Quoted { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.quoted()
    }

    pub fn all_failed(&self) -> bool {
        !self.entries.is_empty() && self.quoted() == 0
    }
}

/// JSON shape written by `--format json`
#[derive(Serialize)]
struct BatchSummary<'a> {
    total: usize,
    quoted: usize,
    failed: usize,
    rows: &'a [BatchEntry],
}

fn column_indices(headers: &csv::StringRecord) -> Result<[usize; 3], CalcError> {
    let mut indices = [0usize; 3];
    let mut missing = Vec::new();

    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h.eq_ignore_ascii_case(name)) {
            Some(i) => *slot = i,
            None => missing.push(name),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(CalcError::batch_with_code(
            ErrorCode::BATCH_MISSING_COLUMN,
            format!("Missing required column(s): {}", missing.join(", ")),
            None,
        ))
    }
}

/// Decode the required cells of one record.
///
/// Only the `age`, `gender`, and `coverage` cells must be valid UTF-8;
/// other columns are never looked at.
fn row_cells<'r>(
    record: &'r csv::ByteRecord,
    indices: &[usize; 3],
) -> Result<[&'r str; 3], String> {
    let mut cells = [""; 3];
    for ((cell, &idx), name) in cells.iter_mut().zip(indices).zip(REQUIRED_COLUMNS) {
        let bytes = record.get(idx).unwrap_or_default();
        *cell = std::str::from_utf8(bytes)
            .map_err(|_| format!("Column '{}' contains invalid UTF-8", name))?;
    }
    Ok(cells)
}

fn failed_row(
    row: usize,
    message: String,
    source: Option<InputErrors>,
    fail_fast: bool,
) -> Result<RowOutcome, CalcError> {
    warn!("Row {} could not be quoted: {}", row, message);
    if fail_fast {
        let err =
            CalcError::batch_with_code(ErrorCode::BATCH_ROW_FAILED, message, None).with_row(row);
        return Err(match source {
            Some(errs) => err.with_source(errs),
            None => err,
        });
    }
    Ok(RowOutcome::Failed { error: message })
}

/// Quote every row read from `reader`.
///
/// With `fail_fast`, the first row that cannot be quoted ends the batch with
/// an error carrying its row number. Undecodable cells fail their row only.
pub fn quote_csv<R: Read>(
    reader: R,
    policy: &AgePolicy,
    fail_fast: bool,
) -> Result<BatchReport, CalcError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv::StringRecord::from_byte_record_lossy(csv_reader.byte_headers()?.clone());
    let indices = column_indices(&headers)?;
    let mut report = BatchReport::default();

    for (i, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let row = i + 1;

        let outcome = match row_cells(&record, &indices) {
            Err(problem) => failed_row(row, problem, None, fail_fast)?,
            Ok([age, gender, coverage]) => match parse_request(age, gender, coverage, policy) {
                Ok(request) => {
                    let quote = request.quote();
                    debug!(
                        "Row {}: computed premium: {} (Rate: {})",
                        row, quote.premium, quote.rate
                    );
                    RowOutcome::Quoted { quote }
                }
                Err(errs) => failed_row(row, errs.to_string(), Some(errs), fail_fast)?,
            },
        };

        report.entries.push(BatchEntry { row, outcome });
    }

    Ok(report)
}

fn with_path(err: CalcError, path: &std::path::Path) -> CalcError {
    match err {
        CalcError::Batch {
            code,
            message,
            row,
            source,
            ..
        } => CalcError::Batch {
            code,
            message,
            path: Some(path.to_path_buf()),
            row,
            source,
        },
        other => other,
    }
}

/// Quote a CSV file and write a preview of the results
pub fn run_batch_command<W: Write>(
    params: BatchParams,
    config: &CalcConfig,
    out: &mut W,
) -> Result<BatchReport, CalcError> {
    let policy = effective_policy(config, params.strict_age);
    let limit = params.limit.unwrap_or(config.output.preview_rows);

    info!("Quoting rows from {}", params.file.display());
    let file = File::open(&params.file)
        .map_err(|e| with_path(CalcError::from(e), &params.file))?;
    let report = quote_csv(file, &policy, params.fail_fast)
        .map_err(|e| with_path(e, &params.file))?;

    match effective_format(config, params.format) {
        OutputFormat::Text => write_output(
            out,
            &render_batch(&report, limit, &config.output.currency_symbol),
        )?,
        OutputFormat::Json => {
            let shown = limit.min(report.entries.len());
            write_json(
                out,
                &BatchSummary {
                    total: report.entries.len(),
                    quoted: report.quoted(),
                    failed: report.failed(),
                    rows: &report.entries[..shown],
                },
            )?
        }
    }

    if report.all_failed() {
        return Err(CalcError::batch_with_code(
            ErrorCode::BATCH_ALL_ROWS_FAILED,
            format!("None of the {} rows could be quoted", report.entries.len()),
            Some(params.file.clone()),
        ));
    }

    Ok(report)
}
