use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and wrapper scripts to tell a bad invocation
/// apart from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the run completed (with or without export)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (read, parse, network, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for solution consolidation.
///
/// Every variant is fatal: the run stops and has to be started again from
/// scratch once the cause is fixed.
#[derive(Debug, Error)]
pub enum EinvError {
    #[error("Failed to read snapshot source: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have read permissions")]
    SourceRead { path: PathBuf, details: String },

    #[error("Failed to parse solution snapshot: {path}\nDetails: {details}\n\n💡 Hint: Each file must be a JSON export with a top-level \"ExportedSolution\" object")]
    Parse { path: PathBuf, details: String },

    #[error("Failed to serialize {what}\nDetails: {details}")]
    Serialization { what: String, details: String },

    #[error("Remote call failed: {step}\nDetails: {details}\n\n💡 Hint: Check the configured URLs, the API key and network access")]
    Transport { step: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    Persistence { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    Configuration { message: String, hint: String },

    /// Validation error for value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
