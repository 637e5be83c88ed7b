//! Version-fallback policy for login and logout.
//!
//! Each attempt against one version candidate is classified as
//! [`Attempt::Success`], [`Attempt::Terminal`] (stop iterating) or
//! [`Attempt::Retryable`] (try the next candidate). Transport failures and
//! unparseable responses are always retryable.

use crate::error::{ErrorCategory, Result, SynologyError};

/// Outcome of a single version attempt.
#[derive(Debug)]
pub(crate) enum Attempt<T> {
    Success(T),
    Terminal(SynologyError),
    Retryable(SynologyError),
}

pub(crate) trait FallbackPolicy {
    /// Categories that fail identically under every version.
    fn is_terminal(category: ErrorCategory) -> bool;

    fn classify<T>(outcome: Result<T>) -> Attempt<T> {
        match outcome {
            Ok(value) => Attempt::Success(value),
            Err(e) if e.category().is_some_and(Self::is_terminal) => Attempt::Terminal(e),
            Err(e) => Attempt::Retryable(e),
        }
    }
}

/// Credentials rejected: 400, 402, 403, 404.
pub(crate) struct LoginPolicy;

impl FallbackPolicy for LoginPolicy {
    fn is_terminal(category: ErrorCategory) -> bool {
        matches!(
            category,
            ErrorCategory::InvalidCredentials
                | ErrorCategory::PermissionDenied
                | ErrorCategory::OtpRequired
                | ErrorCategory::OtpFailed
        )
    }
}

/// Session already invalid or not logged in: 105, 106.
pub(crate) struct LogoutPolicy;

impl FallbackPolicy for LogoutPolicy {
    fn is_terminal(category: ErrorCategory) -> bool {
        matches!(
            category,
            ErrorCategory::InsufficientPrivilege | ErrorCategory::SessionTimeout
        )
    }
}
