use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse grouping used for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

/// Drives the process exit code in the CLI frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl PuzzleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PuzzleError::IoError(_) => ErrorCategory::Io,
            PuzzleError::EncodingError(_) | PuzzleError::ParseError { .. } => ErrorCategory::Input,
            PuzzleError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PuzzleError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PuzzleError::IoError(e) => format!("Could not read the puzzle input: {}", e),
            PuzzleError::EncodingError(_) => {
                "The puzzle input is not valid UTF-8 text".to_string()
            }
            PuzzleError::ParseError { message } => {
                format!("The puzzle input is malformed: {}", message)
            }
            PuzzleError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("Invalid value '{}' for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PuzzleError::IoError(_) => {
                "Check that the input file exists and is readable (see --input-path)".to_string()
            }
            PuzzleError::EncodingError(_) | PuzzleError::ParseError { .. } => {
                "The input must be newline-separated rows of '#' and '.' characters".to_string()
            }
            PuzzleError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted values".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
