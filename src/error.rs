//! Error types for txt2morse.
//!
//! Every failure that can end a run is described by an [`ErrorCode`] so the
//! binary can report it consistently. None of them are recoverable.

use std::fmt;

/// Error codes for the fatal conditions of an encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input text file could not be opened for reading.
    /// Trigger: Missing file, permission denied, path is a directory.
    InputOpenFailed,

    /// Output WAV file could not be created.
    /// Trigger: Missing parent directory, permission denied, read-only filesystem.
    OutputOpenFailed,

    /// Reading from the input stream failed part way through.
    InputReadFailed,

    /// Writing or finalizing audio samples failed.
    /// Trigger: Disk full, output device removed.
    OutputWriteFailed,

    /// A signal table did not satisfy its invariants.
    /// Trigger: Duplicate characters, unterminated sequences, no space entry.
    InvalidSignalTable,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InputOpenFailed => "INPUT_OPEN_FAILED",
            ErrorCode::OutputOpenFailed => "OUTPUT_OPEN_FAILED",
            ErrorCode::InputReadFailed => "INPUT_READ_FAILED",
            ErrorCode::OutputWriteFailed => "OUTPUT_WRITE_FAILED",
            ErrorCode::InvalidSignalTable => "INVALID_SIGNAL_TABLE",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InputOpenFailed => "Could not open input file for reading",
            ErrorCode::OutputOpenFailed => "Could not open output file for writing",
            ErrorCode::InputReadFailed => "Failed to read from input file",
            ErrorCode::OutputWriteFailed => "Failed to write audio samples",
            ErrorCode::InvalidSignalTable => "Signal table is malformed",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InputOpenFailed => {
                "Check that the input path exists and is a readable file"
            }
            ErrorCode::OutputOpenFailed => {
                "Check that the output directory exists and is writable"
            }
            ErrorCode::InputReadFailed => "Check that the input file is not being modified",
            ErrorCode::OutputWriteFailed => {
                "Check available disk space, then run the conversion again"
            }
            ErrorCode::InvalidSignalTable => {
                "Give every character exactly one End-terminated sequence and include a space entry"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for txt2morse operations.
#[derive(Debug)]
pub struct MorseError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MorseError {
    /// Creates a new MorseError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new MorseError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INPUT_OPEN_FAILED error.
    pub fn input_open_failed(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::InputOpenFailed,
            format!("Could not open file {} for reading: {}", path, source),
            source,
        )
    }

    /// Creates an OUTPUT_OPEN_FAILED error.
    pub fn output_open_failed(path: impl fmt::Display, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputOpenFailed,
            format!("Could not open file {} for writing: {}", path, source),
            source,
        )
    }

    /// Creates an INPUT_READ_FAILED error.
    pub fn input_read_failed(source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::InputReadFailed,
            format!("Failed to read input: {}", source),
            source,
        )
    }

    /// Creates an OUTPUT_WRITE_FAILED error.
    pub fn output_write_failed(source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputWriteFailed,
            format!("Failed to write samples: {}", source),
            source,
        )
    }

    /// Creates an INVALID_SIGNAL_TABLE error.
    pub fn invalid_signal_table(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidSignalTable,
            format!("Invalid signal table: {}", reason.into()),
        )
    }
}

impl fmt::Display for MorseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for MorseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using MorseError.
pub type Result<T> = std::result::Result<T, MorseError>;
