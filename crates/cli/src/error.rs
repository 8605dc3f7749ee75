//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `yamlenv::Error` and `ValidationError` to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.

use yamlenv::{Error, ValidationError};

/// Structured exit codes for the `yamlenv` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The environment file is missing or unreadable.
    ///
    /// Scripts should check `--dir`/`--file`.
    InvalidPath = 3,

    /// The environment file is not valid YAML for this loader.
    InvalidFile = 4,

    /// One or more variables failed their assertions.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidPath { .. } => ExitCode::InvalidPath,
            Error::InvalidFile { .. } | Error::InvalidVariable { .. } => ExitCode::InvalidFile,
            Error::Validation(_) => ExitCode::ValidationError,
            Error::LoaderNotInitialized | Error::DumpName { .. } | Error::Dump { .. } => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no yamlenv error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<Error>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ValidationError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;
    use yamlenv::{MemoryEnv, Validator};

    fn validation_error() -> ValidationError {
        Validator::new(&MemoryEnv::new(), "MISSING").unwrap_err()
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidPath.as_i32(), 3);
        assert_eq!(ExitCode::InvalidFile.as_i32(), 4);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_from_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("env.yml"),
            kind: std::io::ErrorKind::NotFound,
        };
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidPath);

        let err = Error::InvalidVariable {
            name: "A=B".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidFile);

        let err = Error::Validation(validation_error());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

        assert_eq!(
            ExitCode::from(&Error::LoaderNotInitialized),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_exit_code_ext_finds_error_through_context() {
        let err = anyhow::Error::new(Error::InvalidPath {
            path: PathBuf::from("env.yml"),
            kind: std::io::ErrorKind::NotFound,
        })
        .context("Failed to load environment");
        assert_eq!(err.exit_code(), ExitCode::InvalidPath);
    }

    #[test]
    fn test_exit_code_ext_bare_validation_error() {
        let err: anyhow::Error = validation_error().into();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);

        let err = Err::<(), _>(validation_error())
            .context("Assertions failed")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_exit_code_ext_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
