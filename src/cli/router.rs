//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::CalcConfig;
use anyhow::Result;
use std::io::Write;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command<W: Write>(command: Commands, config: &CalcConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::Quote {
            age,
            gender,
            coverage,
            format,
            strict_age,
        } => {
            run_quote_command(
                QuoteParams {
                    age,
                    gender,
                    coverage,
                    format,
                    strict_age,
                },
                config,
                out,
            )?;
        }
        Commands::Rates { format } => run_rates_command(format, config, out)?,
        Commands::Batch {
            file,
            limit,
            format,
            fail_fast,
            strict_age,
        } => {
            run_batch_command(
                BatchParams {
                    file,
                    limit,
                    format,
                    fail_fast,
                    strict_age,
                },
                config,
                out,
            )?;
        }
    }
    Ok(())
}
