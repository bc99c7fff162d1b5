use std::fmt::{self, Display};
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Input field named in an [`PremiumError::InvalidInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Age,
    Gender,
    Coverage,
}

impl Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputField::Age => "age",
            InputField::Gender => "gender",
            InputField::Coverage => "coverage",
        })
    }
}

/// Why a raw input value was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputProblem {
    NotANumber,
    NotAWholeNumber,
    Negative,
    NotFinite,
    OutOfBounds { min: u32, max: u32 },
}

impl Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "not a number"),
            Self::NotAWholeNumber => write!(f, "must be a non-negative whole number"),
            Self::Negative => write!(f, "must not be negative"),
            Self::NotFinite => write!(f, "must be a finite amount"),
            Self::OutOfBounds { min, max } => write!(f, "must be between {} and {}", min, max),
        }
    }
}

/// Failures of a single premium evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PremiumError {
    #[error("Invalid gender '{0}': expected 'male' or 'female'")]
    InvalidGender(String),

    #[error("Invalid {field} '{value}': {problem}")]
    InvalidInput {
        field: InputField,
        value: String,
        problem: InputProblem,
    },
}

impl PremiumError {
    pub fn invalid_input(field: InputField, value: impl Into<String>, problem: InputProblem) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
            problem,
        }
    }

    /// Registry code for this failure
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidGender(_) => ErrorCode::INPUT_INVALID_GENDER,
            Self::InvalidInput {
                problem: InputProblem::OutOfBounds { .. },
                ..
            } => ErrorCode::INPUT_AGE_OUT_OF_BOUNDS,
            Self::InvalidInput {
                field: InputField::Age,
                ..
            } => ErrorCode::INPUT_INVALID_AGE,
            Self::InvalidInput {
                field: InputField::Coverage,
                ..
            } => ErrorCode::INPUT_INVALID_COVERAGE,
            Self::InvalidInput { .. } => ErrorCode::INPUT_GENERIC,
        }
    }

    /// Field the failure refers to
    pub fn field(&self) -> InputField {
        match self {
            Self::InvalidGender(_) => InputField::Gender,
            Self::InvalidInput { field, .. } => *field,
        }
    }
}

/// Every problem found while reading one request
#[derive(Debug, Clone, PartialEq)]
pub struct InputErrors(pub Vec<PremiumError>);

impl InputErrors {
    pub fn errors(&self) -> &[PremiumError] {
        &self.0
    }
}

impl Display for InputErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{}", single),
            errors => {
                write!(f, "{} invalid inputs:", errors.len())?;
                for e in errors {
                    write!(f, "\n  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for InputErrors {}

pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for the premium calculator application
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Batch error: {message}")]
    Batch {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        row: Option<usize>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl CalcError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message, None)
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an input error with default code
    pub fn input(message: impl Into<String>) -> Self {
        Self::input_with_code(ErrorCode::INPUT_GENERIC, message, None)
    }

    /// Create an input error with specific code and field
    pub fn input_with_code(code: u16, message: impl Into<String>, field: Option<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a batch error with default code
    pub fn batch(message: impl Into<String>) -> Self {
        Self::batch_with_code(ErrorCode::BATCH_GENERIC, message, None)
    }

    /// Create a batch error with specific code and path
    pub fn batch_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Batch {
            code,
            message: message.into(),
            path,
            row: None,
            source: None,
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Batch { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Batch { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Set the CSV row (1-based, excluding the header) for a batch error
    pub fn with_row(mut self, row: usize) -> Self {
        if let Self::Batch { row: ref mut r, .. } = self {
            *r = Some(row);
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Batch { .. } => 4,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Batch { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Input { message, .. } => format!("Please check your input. {}", message),
            Self::Batch {
                message, path, row, ..
            } => {
                let mut msg = String::from("Batch error");
                if let Some(p) = path {
                    msg.push_str(&format!(" in '{}'", p.display()));
                }
                if let Some(r) = row {
                    msg.push_str(&format!(" at row {}", r));
                }
                format!("{}: {}", msg, message)
            }
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = format!("{} ({})", self, describe_error_code(self.code()));
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

impl From<PremiumError> for CalcError {
    fn from(err: PremiumError) -> Self {
        CalcError::input_with_code(err.code(), err.to_string(), Some(err.field().to_string()))
    }
}

impl From<InputErrors> for CalcError {
    fn from(errs: InputErrors) -> Self {
        match errs.0.as_slice() {
            [single] => CalcError::from(single.clone()),
            _ => CalcError::input_with_code(ErrorCode::INPUT_MULTIPLE, errs.to_string(), None),
        }
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::BATCH_FILE_NOT_FOUND, "File not found"),
            _ => (ErrorCode::BATCH_IO_ERROR, "I/O operation failed"),
        };

        CalcError::batch_with_code(code, message, None).with_source(err)
    }
}

impl From<csv::Error> for CalcError {
    fn from(err: csv::Error) -> Self {
        let row = err
            .position()
            .map(|p| p.line().saturating_sub(1) as usize);
        let base = CalcError::batch_with_code(ErrorCode::BATCH_CSV_PARSE, "Malformed CSV", None);
        let base = match row {
            Some(r) => base.with_row(r),
            None => base,
        };
        base.with_source(err)
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::config_with_code(
            ErrorCode::CONFIG_INVALID_TOML,
            format!("Invalid TOML: {}", err.message()),
            None,
        )
        .with_source(err)
    }
}

/// Type alias for Results using CalcError
pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests;
