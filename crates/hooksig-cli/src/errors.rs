use hooksig_core::{DecodeError, FormatError, HookSigError, PayloadError};
use thiserror::Error;

/// Signature verified.
pub const EXIT_VALID: i32 = 0;
/// Inputs were well-formed but the signature did not verify.
pub const EXIT_INVALID: i32 = 1;
/// Inputs were malformed or could not be read.
pub const EXIT_ERROR: i32 = 2;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Failure from the verification core.
    #[error(transparent)]
    HookSig(#[from] HookSigError),
    /// JSON rendering failed.
    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<DecodeError> for CliError {
    fn from(e: DecodeError) -> Self {
        CliError::HookSig(e.into())
    }
}

impl From<FormatError> for CliError {
    fn from(e: FormatError) -> Self {
        CliError::HookSig(e.into())
    }
}

impl From<PayloadError> for CliError {
    fn from(e: PayloadError) -> Self {
        CliError::HookSig(e.into())
    }
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}
