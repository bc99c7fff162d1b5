//! Rates command implementation

use super::{effective_format, write_json, write_output};
use crate::cli::output::render_schedule;
use crate::config::{CalcConfig, OutputFormat};
use crate::error::CalcError;
use crate::premium::RATE_TABLE;
use std::io::Write;

/// Print the rate schedule
pub fn run_rates_command<W: Write>(
    format: Option<OutputFormat>,
    config: &CalcConfig,
    out: &mut W,
) -> Result<(), CalcError> {
    let schedule = RATE_TABLE.schedule();

    match effective_format(config, format) {
        OutputFormat::Text => write_output(out, &render_schedule(&schedule)),
        OutputFormat::Json => write_json(out, &schedule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_json() {
        let mut out = Vec::new();
        run_rates_command(Some(OutputFormat::Json), &CalcConfig::default(), &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["gender"], "male");
        assert_eq!(json[0]["fifty_and_over"], 0.05);
        assert_eq!(json[1]["gender"], "female");
        assert_eq!(json[1]["under_30"], 0.015);
    }

    #[test]
    fn test_rates_text() {
        let mut out = Vec::new();
        run_rates_command(None, &CalcConfig::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Premium rates"));
        assert!(text.contains("30 <= Age < 50   2.5% of coverage"));
    }
}
