//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so scripts can distinguish failure modes.
//! - Map typed errors from the client and config crates to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by the error types' Display impls).
//!
//! Invariants:
//! - There is no retryable failure category: every non-zero code means the
//!   run is over and a rerun starts from scratch.

use sumo_client::ClientError;
use sumo_config::ConfigError;

/// Structured exit codes for sumo-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The search ran and its results were exported.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Malformed configuration, unsupported kind/output value or combination.
    ConfigurationError = 2,

    /// A `from`/`to` value matched none of the accepted time forms.
    InvalidTimeExpression = 3,

    /// Job creation or the status endpoint rejected a request.
    SubmissionFailed = 4,

    /// The polling deadline elapsed before the job completed.
    PollTimeout = 5,

    /// A records/messages fetch failed mid-pagination.
    PaginationFailed = 6,

    /// Writing the CSV destination failed.
    ExportFailed = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit()`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::InvalidTimeExpression(_) => ExitCode::InvalidTimeExpression,
            ClientError::Submission { .. } | ClientError::JobFailed { .. } => {
                ExitCode::SubmissionFailed
            }
            ClientError::Timeout { .. } => ExitCode::PollTimeout,
            ClientError::Pagination { .. } => ExitCode::PaginationFailed,
            ClientError::Misconfigured(_) => ExitCode::ConfigurationError,
            ClientError::Http(_) | ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for `anyhow::Error` to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns `ExitCode::GeneralError` when no typed error is found in
    /// the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigurationError;
            }
            if cause.downcast_ref::<csv::Error>().is_some()
                || cause.downcast_ref::<std::io::Error>().is_some()
            {
                return ExitCode::ExportFailed;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ConfigurationError.as_i32(), 2);
        assert_eq!(ExitCode::InvalidTimeExpression.as_i32(), 3);
        assert_eq!(ExitCode::SubmissionFailed.as_i32(), 4);
        assert_eq!(ExitCode::PollTimeout.as_i32(), 5);
        assert_eq!(ExitCode::PaginationFailed.as_i32(), 6);
        assert_eq!(ExitCode::ExportFailed.as_i32(), 7);
    }

    #[test]
    fn submission_and_job_failures_share_a_code() {
        let err = ClientError::Submission {
            status: 400,
            reason: "Bad Request".to_string(),
            message: "bad query".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::SubmissionFailed);

        let err = ClientError::JobFailed {
            id: "J1".to_string(),
            state: "CANCELLED".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::SubmissionFailed);
    }

    #[test]
    fn timeout_maps_to_poll_timeout() {
        let err = ClientError::Timeout {
            id: "J1".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::PollTimeout);
    }

    #[test]
    fn anyhow_chain_is_searched_for_typed_errors() {
        let err = anyhow::Error::new(ClientError::Pagination {
            status: 503,
            reason: "Service Unavailable".to_string(),
            message: "try later".to_string(),
        })
        .context("while downloading results");
        assert_eq!(err.exit_code(), ExitCode::PaginationFailed);
    }

    #[test]
    fn io_errors_map_to_export_failed() {
        let err = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only filesystem",
        ))
        .context("writing CSV output");
        assert_eq!(err.exit_code(), ExitCode::ExportFailed);
    }

    #[test]
    fn unknown_errors_are_general() {
        let err = anyhow::anyhow!("something else entirely");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
