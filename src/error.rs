//! Error types for taskdoc.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for taskdoc operations.
///
/// Each variant maps to a specific exit code. An empty agent response is
/// deliberately not represented here: it renders as an empty body, not an
/// error.
#[derive(Error, Debug)]
pub enum TaskdocError {
    /// A request field carried a tag outside the closed set, or the
    /// quantities did not match the task type.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The PDF library could not serialize the document.
    #[error("render failed: {0}")]
    RenderFailure(String),

    /// Reading or writing an artifact/record file failed.
    #[error("I/O failed: {0}")]
    Io(String),

    /// The render configuration file could not be read or was invalid.
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl TaskdocError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskdocError::MalformedInput(_) => exit_codes::USER_ERROR,
            TaskdocError::RenderFailure(_) => exit_codes::RENDER_FAILURE,
            TaskdocError::Io(_) => exit_codes::IO_FAILURE,
            TaskdocError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for taskdoc operations.
pub type Result<T> = std::result::Result<T, TaskdocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_has_correct_exit_code() {
        let err = TaskdocError::MalformedInput("unknown task type".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn render_failure_has_correct_exit_code() {
        let err = TaskdocError::RenderFailure("font error".to_string());
        assert_eq!(err.exit_code(), exit_codes::RENDER_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = TaskdocError::Io("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = TaskdocError::ConfigError("negative margin".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = TaskdocError::MalformedInput("unknown task type 'homework'".to_string());
        assert_eq!(
            err.to_string(),
            "malformed input: unknown task type 'homework'"
        );

        let err = TaskdocError::RenderFailure("unsupported character".to_string());
        assert_eq!(err.to_string(), "render failed: unsupported character");
    }
}
