//! The session context store.

use crate::{SessionError, UserDirectory};
use fires_auth::{Membership, Permission, User};
use fires_types::{MembershipId, UserId};
use tracing::{debug, info, warn};

/// The single source of truth for "who is logged in" and "which membership
/// is active".
///
/// # Invariant
///
/// Whenever a user is logged in, the active membership is an element of
/// that user's membership list. The store holds the active context as a
/// [`MembershipId`] and resolves it against the owned [`User`] on every
/// read, so no operation can leave the two referentially out of sync —
/// there is no partial-update window visible to consumers.
///
/// # Writers and Readers
///
/// Exactly four operations mutate state ([`login`](Self::login),
/// [`logout`](Self::logout), [`switch_context`](Self::switch_context),
/// [`update_profile`](Self::update_profile)); each completes atomically in
/// one synchronous call. Everything else is a read. Single-threaded by
/// contract: no locks, no suspension.
///
/// # Example
///
/// ```
/// use fires_auth::Permission;
/// use fires_session::{fixtures, SessionContext};
/// use fires_types::UserId;
///
/// let mut session = SessionContext::new(fixtures::seed_directory());
/// assert!(!session.is_logged_in());
///
/// session.login(&UserId::new("u1"))?;
/// assert!(session.check_permission(Permission::ManageEventBudget));
/// # Ok::<(), fires_session::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SessionContext<D> {
    directory: D,
    current_user: Option<User>,
    active_membership: Option<MembershipId>,
}

impl<D: UserDirectory> SessionContext<D> {
    /// Creates a logged-out session over a user directory.
    #[must_use]
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            current_user: None,
            active_membership: None,
        }
    }

    /// Logs a user in and activates their default context.
    ///
    /// On success the current user is set and the active membership is
    /// their first (primary) membership, established before this call
    /// returns — dependent reads never observe a logged-in user without an
    /// active context.
    ///
    /// Logging in over an existing session replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UserNotFound`] if the directory does not
    /// know the id. The session state is left exactly as it was.
    pub fn login(&mut self, id: &UserId) -> Result<(), SessionError> {
        let Some(user) = self.directory.find_user(id) else {
            warn!(user = %id, "login failed: unknown user id");
            return Err(SessionError::UserNotFound { user: id.clone() });
        };

        let default_context = user.default_membership().id().clone();
        info!(user = %id, context = %default_context, "login");
        self.active_membership = Some(default_context);
        self.current_user = Some(user);
        Ok(())
    }

    /// Clears the session. Idempotent.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(user = %user.id(), "logout");
        }
        self.active_membership = None;
    }

    /// Re-targets the active context to another of the current user's
    /// memberships.
    ///
    /// Defensive no-op when logged out or when `membership_id` does not
    /// belong to the current user — a legitimate UI only ever offers the
    /// user's own memberships, so either case indicates a stale or
    /// hostile caller and is logged rather than crashed on.
    pub fn switch_context(&mut self, membership_id: &MembershipId) {
        let Some(user) = self.current_user.as_ref() else {
            warn!(context = %membership_id, "context switch ignored: not logged in");
            return;
        };
        if user.membership(membership_id).is_none() {
            warn!(
                user = %user.id(),
                context = %membership_id,
                "context switch ignored: membership not held by current user"
            );
            return;
        }
        debug!(user = %user.id(), context = %membership_id, "context switch");
        self.active_membership = Some(membership_id.clone());
    }

    /// Replaces the current user's display name and avatar.
    ///
    /// Memberships are untouched. No-op when logged out. An empty name is
    /// ignored (the user keeps their previous name).
    pub fn update_profile(&mut self, name: &str, avatar_url: &str) {
        let Some(user) = self.current_user.as_mut() else {
            warn!("profile update ignored: not logged in");
            return;
        };
        user.set_profile(name, avatar_url);
        debug!(user = %user.id(), "profile updated");
    }

    /// Returns `true` if the active context grants `permission`.
    ///
    /// Always `false` when logged out. A pure function of the active
    /// membership: no call sequence without an intervening mutation can
    /// change the answer.
    #[must_use]
    pub fn check_permission(&self, permission: Permission) -> bool {
        self.active_membership()
            .is_some_and(|m| m.has_permission(permission))
    }

    /// Returns the logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Returns the active membership, if logged in.
    #[must_use]
    pub fn active_membership(&self) -> Option<&Membership> {
        let user = self.current_user.as_ref()?;
        let id = self.active_membership.as_ref()?;
        user.membership(id)
    }

    /// Returns `true` if a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Returns a reference to the underlying directory.
    #[must_use]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    // =====================================================================
    // Named gates
    //
    // Convenience wrappers the view layer reaches for on its hottest
    // paths. Each is check_permission under a domain name; all are false
    // when logged out and none can fail.
    // =====================================================================

    /// Can the active context edit camp details?
    #[must_use]
    pub fn can_edit_camp(&self) -> bool {
        self.check_permission(Permission::EditCampDetails)
    }

    /// Can the active context read camp finances?
    #[must_use]
    pub fn can_view_camp_finances(&self) -> bool {
        self.check_permission(Permission::ViewCampFinances)
    }

    /// Can the active context approve and record camp transactions?
    #[must_use]
    pub fn can_manage_camp_finances(&self) -> bool {
        self.check_permission(Permission::ManageCampFinances)
    }

    /// Can the active context manage the camp roster?
    #[must_use]
    pub fn can_manage_roster(&self) -> bool {
        self.check_permission(Permission::ManageCampRoster)
    }

    /// Can the active context open the safety dashboard?
    #[must_use]
    pub fn can_access_safety_dashboard(&self) -> bool {
        self.check_permission(Permission::AccessSafetyDashboard)
    }

    /// Can the active context manage the event budget?
    #[must_use]
    pub fn can_manage_event_budget(&self) -> bool {
        self.check_permission(Permission::ManageEventBudget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryDirectory;
    use fires_auth::Membership;
    use fires_types::{EntityId, EntityRef, EntityType, Role, TryNew};

    fn camp_lead_membership() -> Membership {
        let camp = EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp);
        Membership::try_new(
            MembershipId::new("m-camp"),
            camp,
            Role::CampLead,
            [Permission::EditCampDetails, Permission::ViewCampFinances],
        )
        .expect("valid membership")
    }

    fn volunteer_membership() -> Membership {
        let dept = EntityRef::new(EntityId::new("d1"), "Event Rangers", EntityType::Department);
        Membership::try_new(MembershipId::new("m-vol"), dept, Role::Volunteer, [])
            .expect("valid membership")
    }

    fn directory() -> InMemoryDirectory {
        let sparky = User::try_new((
            UserId::new("sparky"),
            "Sparky".to_string(),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Sparky".to_string(),
            vec![camp_lead_membership(), volunteer_membership()],
        ))
        .expect("valid user");
        InMemoryDirectory::new(vec![sparky])
    }

    fn session() -> SessionContext<InMemoryDirectory> {
        SessionContext::new(directory())
    }

    #[test]
    fn fresh_session_is_logged_out() {
        let session = session();
        assert!(!session.is_logged_in());
        assert!(session.current_user().is_none());
        assert!(session.active_membership().is_none());
    }

    #[test]
    fn login_activates_first_membership() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");

        let active = session.active_membership().expect("active context");
        assert_eq!(active.id().as_str(), "m-camp");
        assert!(session.check_permission(Permission::EditCampDetails));
    }

    #[test]
    fn login_unknown_id_leaves_state_untouched() {
        let mut session = session();
        let err = session.login(&UserId::new("nobody")).unwrap_err();
        assert_eq!(
            err,
            SessionError::UserNotFound {
                user: UserId::new("nobody")
            }
        );
        assert!(!session.is_logged_in());
        assert!(!session.check_permission(Permission::ViewDashboard));
    }

    #[test]
    fn failed_login_does_not_clobber_existing_session() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");

        let _ = session.login(&UserId::new("nobody"));
        assert!(session.is_logged_in());
        assert_eq!(
            session.active_membership().map(|m| m.id().as_str()),
            Some("m-camp")
        );
    }

    #[test]
    fn switch_context_changes_rights() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");
        assert!(session.can_edit_camp());

        session.switch_context(&MembershipId::new("m-vol"));
        assert!(!session.can_edit_camp());
        assert_eq!(
            session.active_membership().map(|m| m.role()),
            Some(Role::Volunteer)
        );
    }

    #[test]
    fn switch_to_foreign_membership_is_noop() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");

        session.switch_context(&MembershipId::new("m-someone-elses"));
        assert_eq!(
            session.active_membership().map(|m| m.id().as_str()),
            Some("m-camp")
        );
    }

    #[test]
    fn switch_while_logged_out_is_noop() {
        let mut session = session();
        session.switch_context(&MembershipId::new("m-camp"));
        assert!(session.active_membership().is_none());
    }

    #[test]
    fn logout_clears_everything_and_is_idempotent() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");

        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.active_membership().is_none());
        for p in Permission::ALL {
            assert!(!session.check_permission(p));
        }

        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn update_profile_when_logged_out_is_noop() {
        let mut session = session();
        session.update_profile("New Name", "url2");
        assert!(session.current_user().is_none());
    }

    #[test]
    fn update_profile_preserves_memberships_and_context() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");
        session.switch_context(&MembershipId::new("m-vol"));

        session.update_profile("Sparkplug", "https://example.com/a.png");

        let user = session.current_user().expect("logged in");
        assert_eq!(user.name(), "Sparkplug");
        assert_eq!(user.memberships().len(), 2);
        assert_eq!(
            session.active_membership().map(|m| m.id().as_str()),
            Some("m-vol")
        );
    }

    #[test]
    fn check_permission_is_repeatable() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");

        let first = session.check_permission(Permission::ViewCampFinances);
        let second = session.check_permission(Permission::ViewCampFinances);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn relogin_replaces_session() {
        let mut session = session();
        session.login(&UserId::new("sparky")).expect("known user");
        session.switch_context(&MembershipId::new("m-vol"));

        // Login again: back to the default context.
        session.login(&UserId::new("sparky")).expect("known user");
        assert_eq!(
            session.active_membership().map(|m| m.id().as_str()),
            Some("m-camp")
        );
    }

    #[test]
    fn named_gates_follow_the_active_context() {
        let mut session = session();
        assert!(!session.can_view_camp_finances());

        session.login(&UserId::new("sparky")).expect("known user");
        assert!(session.can_view_camp_finances());
        assert!(!session.can_manage_camp_finances());
        assert!(!session.can_access_safety_dashboard());

        session.switch_context(&MembershipId::new("m-vol"));
        assert!(!session.can_view_camp_finances());
    }
}
