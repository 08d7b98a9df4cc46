//! Session operation errors.

use fires_types::{ErrorCode, UserId};
use thiserror::Error;

/// Error returned by fallible [`SessionContext`](crate::SessionContext)
/// operations.
///
/// Only login can fail; every other operation degrades to a no-op or to
/// "permission denied" by design.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `login` was given an id the user directory does not know.
    ///
    /// The session is left untouched, so the caller can prompt and retry.
    #[error("no user found for id '{user}'")]
    UserNotFound {
        /// The id that failed to resolve.
        user: UserId,
    },
}

impl ErrorCode for SessionError {
    fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "SESSION_USER_NOT_FOUND",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Retrying with a known id succeeds.
        true
    }
}
