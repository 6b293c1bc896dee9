//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use mode_client::ClientError;
use mode_config::ConfigError;

/// Structured exit codes for mode-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Credentials rejected, or a signature token could not be issued or revoked.
    AuthenticationFailed = 2,

    /// Network failure, or a host that does not form a usable URL.
    ///
    /// Scripts may retry.
    ConnectionError = 3,

    /// The requested report, space, run or other resource does not exist.
    NotFound = 4,

    /// Bad input, rejected before sending or by the server with 400/422.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Authentication(_) => ExitCode::AuthenticationFailed,
            ClientError::Api {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            ClientError::Transport(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Closed => ExitCode::ConnectionError,

            ClientError::Api { status: 404, .. } => ExitCode::NotFound,

            ClientError::InvalidArgument(_) => ExitCode::ValidationError,
            ClientError::Api {
                status: 400 | 422, ..
            } => ExitCode::ValidationError,

            ClientError::Api { .. } => ExitCode::GeneralError,
            ClientError::Decode { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
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

    fn api(status: u16) -> ClientError {
        ClientError::Api {
            status,
            url: "https://app.mode.com/api/acme/reports/abc".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_api_statuses() {
        assert_eq!(ExitCode::from(&api(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api(403)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api(422)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_local_errors() {
        let err = ClientError::Authentication("could not issue signature token".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);

        let err = ClientError::InvalidArgument("per_page must be between 1 and 1000".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

        let err = ClientError::InvalidUrl("host must start with http://".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = anyhow::Error::new(api(404)).context("Failed to get report");
        assert_eq!(err.exit_code(), ExitCode::NotFound);

        let err: anyhow::Error = Err::<(), _>(api(401))
            .context("Failed to list spaces")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
