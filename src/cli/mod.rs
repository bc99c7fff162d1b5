//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Output rendering
//! - Input validation

pub mod args;
pub mod commands;
pub mod output;
pub mod router;
pub mod validation;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands};
pub use router::execute_command;
pub use validation::{parse_age, parse_coverage, parse_request, AgePolicy};
