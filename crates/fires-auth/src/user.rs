//! User: identity plus an ordered list of memberships.

use crate::{Membership, ValidationError};
use fires_types::{MembershipId, TryNew, UserId};
use serde::{Deserialize, Serialize};

/// A user of the dashboard: display identity plus every context they can
/// act in.
///
/// # Ordering Matters
///
/// `memberships` is ordered; index 0 is the **default active context**
/// selected by login. Seed data puts the user's primary hat first.
///
/// # Non-Empty Invariant
///
/// A user with zero memberships could log in but never hold an active
/// context, so construction rejects the empty list outright
/// ([`ValidationError::EmptyMemberships`]). Because of this invariant,
/// [`default_membership`](Self::default_membership) is total.
///
/// # Mutability
///
/// Display fields (name, avatar) change via the session store's
/// profile-update operation — see `set_profile`. Memberships have no
/// mutation API at all.
///
/// # Example
///
/// ```
/// use fires_auth::{Membership, User};
/// use fires_types::{EntityId, EntityRef, EntityType, MembershipId, Role, TryNew, UserId};
///
/// let event = EntityRef::new(EntityId::new("e1"), "1000 Fires", EntityType::Event);
/// let m = Membership::with_role_defaults(MembershipId::new("m1"), event, Role::Participant)?;
///
/// let user = User::try_new((
///     UserId::new("u5"),
///     "Newbie Ned".to_string(),
///     "https://api.dicebear.com/7.x/avataaars/svg?seed=Ned".to_string(),
///     vec![m],
/// ))?;
/// assert_eq!(user.default_membership().id().as_str(), "m1");
/// # Ok::<(), fires_auth::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    avatar_url: String,
    memberships: Vec<Membership>,
}

impl TryNew for User {
    type Error = ValidationError;
    type Args = (UserId, String, String, Vec<Membership>);

    /// Validates and constructs a user.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyMemberships`] if `memberships` is empty
    /// - [`ValidationError::EmptyName`] if the display name is empty
    fn try_new(
        (id, name, avatar_url, memberships): Self::Args,
    ) -> Result<Self, Self::Error> {
        if memberships.is_empty() {
            return Err(ValidationError::EmptyMemberships { user: id });
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyName { user: id });
        }
        Ok(Self {
            id,
            name,
            avatar_url,
            memberships,
        })
    }
}

impl User {
    /// Returns the user id.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar URL.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Returns every membership, in priority order.
    #[must_use]
    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    /// Returns the membership with the given id, if the user holds it.
    #[must_use]
    pub fn membership(&self, id: &MembershipId) -> Option<&Membership> {
        self.memberships.iter().find(|m| m.id() == id)
    }

    /// Returns the default active context: the first membership.
    ///
    /// Total because construction guarantees a non-empty list.
    #[must_use]
    pub fn default_membership(&self) -> &Membership {
        &self.memberships[0]
    }

    /// Replaces the display fields, leaving memberships untouched.
    ///
    /// Intended for the session store's profile-update operation; an empty
    /// name is ignored so the non-empty invariant established at
    /// construction keeps holding.
    pub fn set_profile(&mut self, name: impl Into<String>, avatar_url: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.name = name;
        }
        self.avatar_url = avatar_url.into();
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Permission;
    use fires_types::{EntityId, EntityRef, EntityType, Role};

    fn membership(id: &str, role: Role) -> Membership {
        let camp = EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp);
        Membership::with_role_defaults(MembershipId::new(id), camp, role)
            .expect("valid membership")
    }

    fn sparky() -> User {
        User::try_new((
            UserId::new("u3"),
            "Sparky".to_string(),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Sparky".to_string(),
            vec![membership("m1", Role::CampLead), membership("m2", Role::Volunteer)],
        ))
        .expect("valid user")
    }

    #[test]
    fn empty_memberships_rejected() {
        let err = User::try_new((
            UserId::new("u9"),
            "Ghost".to_string(),
            String::new(),
            vec![],
        ))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyMemberships {
                user: UserId::new("u9")
            }
        );
    }

    #[test]
    fn empty_name_rejected() {
        let err = User::try_new((
            UserId::new("u9"),
            String::new(),
            String::new(),
            vec![membership("m1", Role::Participant)],
        ))
        .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyName { .. }));
    }

    #[test]
    fn default_membership_is_first() {
        let user = sparky();
        assert_eq!(user.default_membership().id().as_str(), "m1");
        assert_eq!(user.default_membership().role(), Role::CampLead);
    }

    #[test]
    fn membership_lookup_by_id() {
        let user = sparky();
        let found = user.membership(&MembershipId::new("m2"));
        assert_eq!(found.map(Membership::role), Some(Role::Volunteer));
        assert!(user.membership(&MembershipId::new("m99")).is_none());
    }

    #[test]
    fn set_profile_preserves_memberships() {
        let mut user = sparky();
        let before = user.memberships().to_vec();

        user.set_profile("Sparkplug", "https://example.com/new.png");
        assert_eq!(user.name(), "Sparkplug");
        assert_eq!(user.avatar_url(), "https://example.com/new.png");
        assert_eq!(user.memberships(), before.as_slice());
    }

    #[test]
    fn set_profile_ignores_empty_name() {
        let mut user = sparky();
        user.set_profile("", "https://example.com/new.png");
        assert_eq!(user.name(), "Sparky");
        assert_eq!(user.avatar_url(), "https://example.com/new.png");
    }

    #[test]
    fn display_shows_name_and_id() {
        assert_eq!(format!("{}", sparky()), "Sparky (user:u3)");
    }

    #[test]
    fn membership_grants_differ_per_context() {
        let user = sparky();
        assert!(user
            .default_membership()
            .has_permission(Permission::EditCampDetails));
        let volunteer = user
            .membership(&MembershipId::new("m2"))
            .expect("volunteer context exists");
        assert!(!volunteer.has_permission(Permission::EditCampDetails));
    }

    #[test]
    fn serde_round_trip() {
        let user = sparky();
        let json = serde_json::to_string(&user).expect("serialize");
        let parsed: User = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, user);
    }
}
