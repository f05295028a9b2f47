//! Error types and exit codes for campus
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid input values)
//! - 3: Data error (unknown building, hierarchy lookups)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown building, missing hierarchy node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campus operations
#[derive(Error, Debug)]
pub enum CampusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown building: {code}")]
    UnknownBuilding { code: String },

    #[error("hierarchy has no root; set a root first")]
    NoRoot,

    #[error("parent not found in hierarchy: {name}")]
    ParentNotFound { name: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl CampusError {
    /// Create an error for a code that is not in the registry
    pub fn unknown_building(code: impl Into<String>) -> Self {
        CampusError::UnknownBuilding { code: code.into() }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CampusError::UnknownFormat(_)
            | CampusError::UsageError(_)
            | CampusError::InvalidValue { .. } => ExitCode::Usage,

            CampusError::UnknownBuilding { .. }
            | CampusError::NoRoot
            | CampusError::ParentNotFound { .. } => ExitCode::Data,

            CampusError::Io(_)
            | CampusError::Json(_)
            | CampusError::Toml(_)
            | CampusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CampusError::UnknownFormat(_) => "unknown_format",
            CampusError::UsageError(_) => "usage_error",
            CampusError::InvalidValue { .. } => "invalid_value",
            CampusError::UnknownBuilding { .. } => "unknown_building",
            CampusError::NoRoot => "no_root",
            CampusError::ParentNotFound { .. } => "parent_not_found",
            CampusError::Io(_) => "io_error",
            CampusError::Json(_) => "json_error",
            CampusError::Toml(_) => "toml_error",
            CampusError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for campus operations
pub type Result<T> = std::result::Result<T, CampusError>;
