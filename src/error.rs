//! Crate-wide error type.
//!
//! Fitting never fails on well-formed numbers (it falls back instead), so
//! `AppError` only shows up where input can actually be rejected: sequence
//! construction and CLI configuration.
//!
//! The shape mirrors a process exit: every error carries the code the `nice`
//! binary should exit with.

/// Exit code for invalid arguments or configuration.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code when no result could be produced.
pub const EXIT_NO_RESULT: u8 = 3;
/// Exit code for internal failures (e.g. output serialization).
pub const EXIT_INTERNAL: u8 = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Shorthand for an [`EXIT_INVALID_INPUT`] error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_INPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
