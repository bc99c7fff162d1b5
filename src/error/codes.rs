/// Error code registry for the premium calculator
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input errors
/// - 4000-4999: Batch errors
/// - 9000-9999: Other errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_VALIDATION_FAILED: u16 = 1008;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_INVALID_AGE: u16 = 2001;
    pub const INPUT_INVALID_COVERAGE: u16 = 2002;
    pub const INPUT_AGE_OUT_OF_BOUNDS: u16 = 2003;
    pub const INPUT_INVALID_GENDER: u16 = 2004;
    pub const INPUT_MULTIPLE: u16 = 2005;

    // Batch errors (4000-4999)
    pub const BATCH_GENERIC: u16 = 4000;
    pub const BATCH_FILE_NOT_FOUND: u16 = 4001;
    pub const BATCH_CSV_PARSE: u16 = 4002;
    pub const BATCH_MISSING_COLUMN: u16 = 4003;
    pub const BATCH_ROW_FAILED: u16 = 4004;
    pub const BATCH_ALL_ROWS_FAILED: u16 = 4005;
    pub const BATCH_IO_ERROR: u16 = 4006;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
    pub const OTHER_OUTPUT_ERROR: u16 = 9001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1005 => "Invalid value in configuration",
        1008 => "Configuration validation failed",

        // Input errors
        2000 => "Generic input error",
        2001 => "Age is not a non-negative whole number",
        2002 => "Coverage is not a non-negative amount",
        2003 => "Age is outside the accepted range",
        2004 => "Gender is not recognized",
        2005 => "Several inputs are invalid",

        // Batch errors
        4000 => "Generic batch error",
        4001 => "Batch input file not found",
        4002 => "Batch input is not valid CSV",
        4003 => "Batch input is missing a required column",
        4004 => "A batch row could not be quoted",
        4005 => "No batch row could be quoted",
        4006 => "Batch I/O error",

        // Other errors
        9000 => "Generic error",
        9001 => "Failed to write output",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_code_is_described() {
        let codes = [
            ErrorCode::CONFIG_GENERIC,
            ErrorCode::CONFIG_NOT_FOUND,
            ErrorCode::CONFIG_INVALID_TOML,
            ErrorCode::CONFIG_INVALID_VALUE,
            ErrorCode::CONFIG_VALIDATION_FAILED,
            ErrorCode::INPUT_GENERIC,
            ErrorCode::INPUT_INVALID_AGE,
            ErrorCode::INPUT_INVALID_COVERAGE,
            ErrorCode::INPUT_AGE_OUT_OF_BOUNDS,
            ErrorCode::INPUT_INVALID_GENDER,
            ErrorCode::INPUT_MULTIPLE,
            ErrorCode::BATCH_GENERIC,
            ErrorCode::BATCH_FILE_NOT_FOUND,
            ErrorCode::BATCH_CSV_PARSE,
            ErrorCode::BATCH_MISSING_COLUMN,
            ErrorCode::BATCH_ROW_FAILED,
            ErrorCode::BATCH_ALL_ROWS_FAILED,
            ErrorCode::BATCH_IO_ERROR,
            ErrorCode::OTHER_GENERIC,
            ErrorCode::OTHER_OUTPUT_ERROR,
        ];

        for code in codes {
            assert_ne!(describe_error_code(code), "Unknown error code", "{code}");
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_error_code(4242), "Unknown error code");
    }
}
