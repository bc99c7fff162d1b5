//! Text rendering for quotes, the rate schedule, and batch reports
//!
//! Premiums are rounded to two decimals only here.

use crate::cli::commands::batch::{BatchReport, RowOutcome};
use crate::premium::{AgeBand, Gender, Quote, RateRow};

/// `$2000.00`
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

/// `Annual Premium: $2000.00`
pub fn format_premium(premium: f64, currency_symbol: &str) -> String {
    format!("Annual Premium: {}", format_amount(premium, currency_symbol))
}

/// Rate as a percentage without trailing zeros, e.g. `0.015` -> `1.5`
pub fn format_percent(rate: f64) -> String {
    let fixed = format!("{:.4}", rate * 100.0);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn render_quote(quote: &Quote, currency_symbol: &str) -> String {
    format_premium(quote.premium, currency_symbol)
}

/// The rate schedule as shown to applicants
pub fn render_schedule(rows: &[RateRow]) -> String {
    let mut out = String::from("Premium rates (percentage of coverage per year)\n");
    for row in rows {
        let name = match row.gender {
            Gender::Male => "Male",
            Gender::Female => "Female",
        };
        out.push_str(&format!("\n{}:\n", name));
        for band in AgeBand::ALL {
            out.push_str(&format!(
                "  {:<16} {}% of coverage\n",
                band.label(),
                format_percent(row.rate(band))
            ));
        }
    }
    out
}

/// Preview of the first `limit` batch rows followed by a summary line
pub fn render_batch(report: &BatchReport, limit: usize, currency_symbol: &str) -> String {
    if report.entries.is_empty() {
        return "No rows to quote\n".to_string();
    }

    let mut out = format!(
        "{:>5}  {:>5}  {:<8}  {:>16}  {:>14}\n",
        "Row", "Age", "Gender", "Coverage", "Premium"
    );
    for entry in report.entries.iter().take(limit) {
        match &entry.outcome {
            RowOutcome::Quoted { quote } => out.push_str(&format!(
                "{:>5}  {:>5}  {:<8}  {:>16}  {:>14}\n",
                entry.row,
                quote.age,
                quote.gender,
                format_amount(quote.coverage, currency_symbol),
                format_amount(quote.premium, currency_symbol),
            )),
            RowOutcome::Failed { error } => {
                out.push_str(&format!("{:>5}  error: {}\n", entry.row, error))
            }
        }
    }

    out.push_str(&format!(
        "\nShowing {} of {} rows ({} quoted, {} failed)\n",
        limit.min(report.entries.len()),
        report.entries.len(),
        report.quoted(),
        report.failed(),
    ));
    out
}
