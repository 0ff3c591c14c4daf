//! Error types for lifecycle misuse.

use thiserror::Error;

/// Errors returned by [`crate::host::ScreenHost`] lifecycle calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// `start` was called before `attach`.
    #[error("screen has not been attached")]
    NotAttached,

    /// `start` was called while a start cycle is already active.
    #[error("host is already started")]
    AlreadyStarted,
}
