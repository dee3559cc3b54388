use thiserror::Error;

/// User-visible gate failures. Both are recoverable and handled inside the gate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GateError {
    /// The submitted code did not match
    #[error("Invalid access code")]
    InvalidCredential,

    /// Too many consecutive failures; evaluation is suspended
    #[error("Too many attempts. Please wait {remaining_secs} seconds before trying again.")]
    LockedOut { remaining_secs: u32 },
}
