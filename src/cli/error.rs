//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use crate::exitcode;
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { source, .. }
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    exitcode::NOINPUT
                }
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::EmptyInput(_) => exitcode::DATAERR,
                InfraError::Application(ApplicationError::Config { .. }) => exitcode::CONFIG,
                InfraError::Application(
                    ApplicationError::InvalidNumber { .. } | ApplicationError::InvalidCell { .. },
                ) => exitcode::DATAERR,
                InfraError::Application(_) => exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_missing_file_when_exit_code_then_noinput() {
        let err = CliError::Infra(InfraError::io(
            "open x",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_any_error_when_exit_code_then_not_ok() {
        let errors = [
            CliError::InvalidArgs("x".into()),
            CliError::Infra(InfraError::EmptyInput(PathBuf::from("x"))),
            CliError::from(ApplicationError::Config {
                message: "x".into(),
            }),
        ];
        for err in &errors {
            assert_ne!(err.exit_code(), crate::exitcode::OK);
        }
    }

    #[test]
    fn given_empty_input_when_exit_code_then_dataerr() {
        let err = CliError::Infra(InfraError::EmptyInput(PathBuf::from("x")));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }
}
