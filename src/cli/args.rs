//! CLI argument structures
//!
//! Numeric inputs are taken as raw strings so that parsing failures are
//! classified by [`crate::cli::validation`] rather than by clap.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Estimate annual insurance premiums from age, gender, and coverage
#[derive(Parser, Debug)]
#[command(name = "premium")]
#[command(about = "premium - Estimate annual insurance premiums from a tiered rate table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a configuration file (defaults to ./premium.toml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the annual premium for one applicant
    #[command(name = "quote")]
    Quote {
        /// Applicant age in whole years
        #[arg(short = 'a', long, allow_hyphen_values = true)]
        age: String,

        /// Applicant gender (male or female, case-insensitive)
        #[arg(short = 'g', long)]
        gender: String,

        /// Coverage amount
        #[arg(short = 'C', long, allow_hyphen_values = true)]
        coverage: String,

        /// Output format (overrides configuration)
        #[arg(short = 'f', long, value_enum)]
        format: Option<OutputFormat>,

        /// Reject ages outside the configured bounds
        #[arg(long)]
        strict_age: bool,
    },

    /// Show the rate schedule
    #[command(name = "rates")]
    Rates {
        /// Output format (overrides configuration)
        #[arg(short = 'f', long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Quote every row of a CSV file with age, gender, and coverage columns
    #[command(name = "batch")]
    Batch {
        /// CSV file to read
        file: PathBuf,

        /// Number of rows to show (defaults to output.preview_rows)
        #[arg(
            short = 'n',
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,

        /// Output format (overrides configuration)
        #[arg(short = 'f', long, value_enum)]
        format: Option<OutputFormat>,

        /// Stop at the first row that cannot be quoted
        #[arg(long)]
        fail_fast: bool,

        /// Reject ages outside the configured bounds
        #[arg(long)]
        strict_age: bool,
    },
}
