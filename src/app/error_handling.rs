//! Error handling utilities
//!
//! Centralized reporting of errors that end the process.

use crate::error::CalcError;
use tracing::error;

/// Exit code for an error that reached `main`
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CalcError>() {
        Some(calc_err) => calc_err.exit_code(),
        None => 1,
    }
}

/// Handle fatal errors and exit with appropriate status code
///
/// - For `CalcError`: shows the user message always, developer message in verbose mode
/// - For other errors: shows the error message and the cause chain in verbose mode
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    if let Some(calc_err) = error.downcast_ref::<CalcError>() {
        eprintln!("Error: {}", calc_err.user_message());

        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", calc_err.developer_message());
        }
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }
    }

    std::process::exit(exit_code_for(&error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_calc_error() {
        let err = anyhow::Error::new(CalcError::config("bad"));
        assert_eq!(exit_code_for(&err), 2);

        let err = anyhow::Error::new(CalcError::input("bad"));
        assert_eq!(exit_code_for(&err), 3);
    }

    #[test]
    fn test_exit_code_for_other_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }
}
