//! Error types for hrnet.
//!
//! This module defines the error enum shared by the record store, the
//! creation form, configuration loading, and the command-line shell.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for hrnet operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the slot database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Input Errors ===
    /// A form field rejected the supplied input.
    #[error("invalid input for {field}: {message}")]
    InvalidFieldInput {
        /// Name of the form field.
        field: &'static str,
        /// Why the input was rejected.
        message: String,
    },

    /// A value is not one of the options a field offers.
    #[error("unknown {field}: '{value}'")]
    UnknownOption {
        /// Name of the field or option list.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    // === I/O Errors ===
    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for hrnet operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create an invalid field input error.
    #[must_use]
    pub fn invalid_field_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFieldInput {
            field,
            message: message.into(),
        }
    }

    /// Create an unknown option error.
    #[must_use]
    pub fn unknown_option(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            field,
            value: value.into(),
        }
    }

    /// Check if this error was caused by rejected user input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFieldInput { .. } | Self::UnknownOption { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_invalid_field_input_display() {
        let err = Error::invalid_field_input("zip code", "only digits are allowed");
        assert_eq!(
            err.to_string(),
            "invalid input for zip code: only digits are allowed"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_unknown_option_display() {
        let err = Error::unknown_option("department", "Finance");
        assert_eq!(err.to_string(), "unknown department: 'Finance'");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_storage_errors_are_not_input_errors() {
        let err = Error::DatabaseMigration {
            message: "version mismatch".to_string(),
        };
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("version mismatch"));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::DatabaseQuery(_)));
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "entries_per_page must be 10, 20 or 50".to_string(),
        };
        assert!(err.to_string().contains("entries_per_page"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
