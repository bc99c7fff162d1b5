//! Quote command implementation
//!
//! Calculates the premium for a single applicant.

use super::{effective_format, effective_policy, write_json, write_output};
use crate::cli::output::render_quote;
use crate::cli::validation::parse_request;
use crate::config::{CalcConfig, OutputFormat};
use crate::error::CalcError;
use crate::premium::Quote;
use std::io::Write;
use tracing::{debug, error, info};

/// Raw inputs for `premium quote`
#[derive(Debug, Clone)]
pub struct QuoteParams {
    pub age: String,
    pub gender: String,
    pub coverage: String,
    pub format: Option<OutputFormat>,
    pub strict_age: bool,
}

/// Validate the inputs, compute the premium, and write it out
pub fn run_quote_command<W: Write>(
    params: QuoteParams,
    config: &CalcConfig,
    out: &mut W,
) -> Result<Quote, CalcError> {
    let policy = effective_policy(config, params.strict_age);
    debug!(
        "Inputs - Age: {}, Gender: {}, Coverage: {}",
        params.age, params.gender, params.coverage
    );

    let request = parse_request(&params.age, &params.gender, &params.coverage, &policy)
        .map_err(|errs| {
            error!("Rejected quote request: {}", errs);
            CalcError::from(errs)
        })?;

    let quote = request.quote();
    debug!("Computed premium: {} (Rate: {})", quote.premium, quote.rate);

    match effective_format(config, params.format) {
        OutputFormat::Text => write_output(
            out,
            &format!("{}\n", render_quote(&quote, &config.output.currency_symbol)),
        )?,
        OutputFormat::Json => write_json(out, &quote)?,
    }

    info!("Premium calculated successfully.");
    Ok(quote)
}
