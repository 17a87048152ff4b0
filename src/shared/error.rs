use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a policy failure
/// (violations found) from a technical failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no violations, or violations reported as issues
    Success = 0,
    /// License violations were found and the run is marked as failed
    ViolationsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, cargo-license failure, file I/O error, etc.)
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
            ExitCode::ViolationsDetected => write!(f, "Violations Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license auditing.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to parse license listing from {source_name}\nDetails: {details}\n\n💡 Hint: The listing must be the JSON output of `cargo license --json`")]
    ListingParseError {
        source_name: String,
        details: String,
    },

    #[error("cargo-license could not be run: {details}\n\n💡 Hint: {suggestion}")]
    LicenseToolError { details: String, suggestion: String },

    #[error("GitHub API request to {endpoint} failed with status {status}\nDetails: {message}")]
    GitHubApi {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Missing environment variable: {name}\n\n💡 Hint: {hint}")]
    MissingEnvironment { name: String, hint: String },

    #[error("Invalid configuration in {path}\nReason: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    /// Validation error for domain values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
