//! Identifier types for the 1000 Fires core.
//!
//! All identifiers are string-backed slugs. They come from outside this
//! core (seed data today, an account service in a real deployment) and are
//! compared by value.

use serde::{Deserialize, Serialize};

macro_rules! slug_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from a slug.
            ///
            /// No validation is performed here; ids are opaque to this
            /// core. Records that embed them validate for non-emptiness at
            /// construction time.
            #[must_use]
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Returns the raw slug.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the slug is empty.
            ///
            /// Empty ids are structurally invalid; constructors that embed
            /// this id reject them.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self::new(slug)
            }
        }
    };
}

slug_id! {
    /// Identifier for a [`User`](https://docs.rs/fires-auth).
    ///
    /// This is the value the login screen hands to `login` — e.g. `u1`
    /// or `sparky`. Uniqueness is the user directory's responsibility.
    ///
    /// # Example
    ///
    /// ```
    /// use fires_types::UserId;
    ///
    /// let id = UserId::new("u3");
    /// assert_eq!(id.as_str(), "u3");
    /// assert_eq!(format!("{id}"), "user:u3");
    /// ```
    UserId, "user"
}

slug_id! {
    /// Identifier for a single membership of a user.
    ///
    /// A user acting in several contexts holds one `MembershipId` per
    /// context; `switch_context` selects among them by this id.
    ///
    /// # Example
    ///
    /// ```
    /// use fires_types::MembershipId;
    ///
    /// let id = MembershipId::new("m-sparky-camp");
    /// assert_eq!(format!("{id}"), "membership:m-sparky-camp");
    /// ```
    MembershipId, "membership"
}

slug_id! {
    /// Identifier for an external organizational unit (event, camp, or
    /// department).
    ///
    /// The unit itself is not modeled here; memberships point at it by id
    /// only and no referential integrity is enforced against it.
    ///
    /// # Example
    ///
    /// ```
    /// use fires_types::EntityId;
    ///
    /// let id = EntityId::new("c1");
    /// assert_eq!(format!("{id}"), "entity:c1");
    /// ```
    EntityId, "entity"
}
