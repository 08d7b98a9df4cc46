//! User directory abstraction.
//!
//! The [`UserDirectory`] trait is the seam between the session core and
//! wherever user records actually live. In this prototype that is an
//! in-memory seed list; in a real deployment it would be an account
//! service. The session contract is identical either way — only the
//! failure-latency characteristics differ.

use fires_auth::User;
use fires_types::UserId;

/// Lookup interface for user records.
///
/// Implementations return an owned [`User`] snapshot: the session store
/// takes ownership of the logged-in record and mutates its profile fields
/// locally, without writing back through the directory.
///
/// # Example
///
/// ```
/// use fires_session::{fixtures, UserDirectory};
/// use fires_types::UserId;
///
/// let directory = fixtures::seed_directory();
/// assert!(directory.find_user(&UserId::new("u1")).is_some());
/// assert!(directory.find_user(&UserId::new("nobody")).is_none());
/// ```
pub trait UserDirectory {
    /// Returns the user with the given id, or `None` if unknown.
    fn find_user(&self, id: &UserId) -> Option<User>;
}

/// Directory backed by an in-memory list.
///
/// Duplicate ids are not rejected; lookup returns the first match (seed
/// data is expected to be well-formed).
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    users: Vec<User>,
}

impl InMemoryDirectory {
    /// Creates a directory over the given users.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Returns every user, in seed order.
    ///
    /// The login screen renders this list as the account picker.
    #[must_use]
    pub fn roster(&self) -> &[User] {
        &self.users
    }
}

impl UserDirectory for InMemoryDirectory {
    fn find_user(&self, id: &UserId) -> Option<User> {
        self.users.iter().find(|u| u.id() == id).cloned()
    }
}
