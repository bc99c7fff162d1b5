//! # premium-calc
//!
//! Estimates annual insurance premiums from an applicant's age, gender, and
//! coverage amount using a fixed tiered rate table.
//!
//! ## Usage
//!
//! ```bash
//! premium quote --age 35 --gender male --coverage 100000
//! premium rates
//! premium batch applicants.csv --limit 5
//! ```
//!
//! ## Modules
//!
//! - `premium` - Pure premium evaluation and the rate table
//! - `error` - Typed errors, error codes, and exit codes
//! - `config` - Layered configuration (defaults, TOML file, environment)
//! - `cli` - Argument parsing, input validation, commands, and output
//! - `app` - Logging setup and fatal error reporting
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod premium;

pub use error::{CalcError, PremiumError};
pub use premium::{compute_premium, Gender, PremiumRequest, Quote};
