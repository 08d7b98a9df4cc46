//! Construction-time validation errors.

use fires_types::{ErrorCode, MembershipId, UserId};
use thiserror::Error;

/// Error for structurally invalid [`Membership`](crate::Membership) or
/// [`User`](crate::User) values.
///
/// These indicate defects in seed data (or in whatever replaces it), not
/// runtime conditions: with trusted fixtures none of them should ever
/// occur, and none are recoverable by retrying.
///
/// # Example
///
/// ```
/// use fires_auth::{User, ValidationError};
/// use fires_types::{TryNew, UserId};
///
/// let err = User::try_new((
///     UserId::new("u9"),
///     "Ghost".to_string(),
///     String::new(),
///     vec![],
/// ))
/// .unwrap_err();
/// assert!(matches!(err, ValidationError::EmptyMemberships { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A user was constructed with no memberships. Login could never
    /// produce a usable session for such a user.
    #[error("user '{user}' has no memberships; at least one is required")]
    EmptyMemberships {
        /// The offending user.
        user: UserId,
    },

    /// A user was constructed with an empty display name.
    #[error("user '{user}' has an empty display name")]
    EmptyName {
        /// The offending user.
        user: UserId,
    },

    /// A membership references an entity with an empty id.
    #[error("membership '{membership}' references an entity with an empty id")]
    EmptyEntityId {
        /// The offending membership.
        membership: MembershipId,
    },

    /// A membership references an entity with an empty display name.
    #[error("membership '{membership}' references an entity with an empty name")]
    EmptyEntityName {
        /// The offending membership.
        membership: MembershipId,
    },
}

impl ErrorCode for ValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyMemberships { .. } => "AUTH_EMPTY_MEMBERSHIPS",
            Self::EmptyName { .. } => "AUTH_EMPTY_NAME",
            Self::EmptyEntityId { .. } => "AUTH_EMPTY_ENTITY_ID",
            Self::EmptyEntityName { .. } => "AUTH_EMPTY_ENTITY_NAME",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Construction failures are programming defects in seed data.
        false
    }
}
