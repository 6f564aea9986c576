use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the SPDX document was written
    Success = 0,
    /// Application error (missing manifest, vcpkg failure, unparseable graph, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SPDX document generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SpdxError {
    #[error("Project manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ProjectManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse project manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the vcpkg.json file is valid JSON and declares a \"name\"")]
    ProjectManifestParseError { path: PathBuf, details: String },

    #[error("Failed to parse port manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the port's vcpkg.json file is valid JSON")]
    PortManifestParseError { path: PathBuf, details: String },

    #[error("External command failed: {command}\nDetails: {details}\n\n💡 Hint: Please verify the vcpkg executable path (--vcpkg) and that the project's dependencies can be resolved")]
    ExternalCommandFailed { command: String, details: String },

    #[error("Failed to parse dependency graph: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a DGML document produced by `vcpkg depend-info --format=dgml`")]
    GraphParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
