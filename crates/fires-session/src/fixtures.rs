//! Seed roster for the prototype.
//!
//! The dashboard ships with five in-memory accounts covering every role,
//! including one multi-context user (Sparky) who runs a camp and also
//! volunteers with the Rangers. A real deployment replaces this module
//! with an account service behind the same [`UserDirectory`] seam.
//!
//! Grant sets come from the role catalog except where a membership is
//! deliberately pinned: Rick's ranger-lead membership carries safety and
//! shift grants on top of the lead defaults, and Sparky's volunteer
//! membership carries an explicitly empty set (same role as Val, different
//! rights — this is why per-membership sets are authoritative).

use crate::InMemoryDirectory;
use fires_auth::{catalog, Membership, Permission, User};
use fires_types::{EntityId, EntityRef, EntityType, MembershipId, Role, TryNew, UserId};

fn event() -> EntityRef {
    EntityRef::new(EntityId::new("e1"), "1000 Fires", EntityType::Event)
}

fn rangers() -> EntityRef {
    EntityRef::new(EntityId::new("d1"), "Event Rangers", EntityType::Department)
}

fn gate() -> EntityRef {
    EntityRef::new(EntityId::new("d2"), "Gate & Perimeter", EntityType::Department)
}

fn camp_entropy() -> EntityRef {
    EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp)
}

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

/// Returns the seed users, in login-screen order.
///
/// # Panics
///
/// Panics only if the seed data itself is structurally invalid, which is
/// a programming defect, not a runtime condition.
#[must_use]
pub fn seed_users() -> Vec<User> {
    let alice = User::try_new((
        UserId::new("u1"),
        "Admin Alice".to_string(),
        avatar("Alice"),
        vec![
            Membership::with_role_defaults(
                MembershipId::new("m-alice-event"),
                event(),
                Role::EventOrganizer,
            )
            .expect("seed: alice organizer membership"),
            Membership::with_role_defaults(
                MembershipId::new("m-alice-participant"),
                event(),
                Role::Participant,
            )
            .expect("seed: alice participant membership"),
        ],
    ))
    .expect("seed: alice");

    // Department leads get the safety dashboard and shift management on
    // top of the lead defaults; the catalog deliberately never hands
    // those out by role alone.
    let rick_grants = catalog::default_permissions(Role::DepartmentLead)
        .iter()
        .copied()
        .chain([
            Permission::AccessSafetyDashboard,
            Permission::ManageDepartmentShifts,
        ]);
    let rick = User::try_new((
        UserId::new("u2"),
        "Ranger Rick".to_string(),
        avatar("Rick"),
        vec![Membership::try_new(
            MembershipId::new("m-rick-rangers"),
            rangers(),
            Role::DepartmentLead,
            rick_grants,
        )
        .expect("seed: rick lead membership")],
    ))
    .expect("seed: rick");

    let sparky = User::try_new((
        UserId::new("u3"),
        "Sparky".to_string(),
        avatar("Sparky"),
        vec![
            Membership::with_role_defaults(
                MembershipId::new("m-sparky-camp"),
                camp_entropy(),
                Role::CampLead,
            )
            .expect("seed: sparky camp membership"),
            // No rights yet in the volunteer context: not even the
            // dashboard until the department confirms the shift.
            Membership::try_new(
                MembershipId::new("m-sparky-rangers"),
                rangers(),
                Role::Volunteer,
                [],
            )
            .expect("seed: sparky volunteer membership"),
        ],
    ))
    .expect("seed: sparky");

    let val = User::try_new((
        UserId::new("u4"),
        "Volunteer Val".to_string(),
        avatar("Val"),
        vec![Membership::with_role_defaults(
            MembershipId::new("m-val-gate"),
            gate(),
            Role::Volunteer,
        )
        .expect("seed: val membership")],
    ))
    .expect("seed: val");

    let ned = User::try_new((
        UserId::new("u5"),
        "Newbie Ned".to_string(),
        avatar("Ned"),
        vec![Membership::with_role_defaults(
            MembershipId::new("m-ned-event"),
            event(),
            Role::Participant,
        )
        .expect("seed: ned membership")],
    ))
    .expect("seed: ned");

    vec![alice, rick, sparky, val, ned]
}

/// Returns a directory over [`seed_users`].
#[must_use]
pub fn seed_directory() -> InMemoryDirectory {
    InMemoryDirectory::new(seed_users())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserDirectory;

    #[test]
    fn five_accounts_in_login_order() {
        let users = seed_users();
        let ids: Vec<_> = users.iter().map(|u| u.id().as_str()).collect();
        assert_eq!(ids, ["u1", "u2", "u3", "u4", "u5"]);
    }

    #[test]
    fn every_account_has_a_default_context() {
        // User::try_new enforces this, but the seed should also put the
        // primary hat first.
        let users = seed_users();
        assert_eq!(users[0].default_membership().role(), Role::EventOrganizer);
        assert_eq!(users[2].default_membership().role(), Role::CampLead);
    }

    #[test]
    fn sparky_is_the_multi_context_user() {
        let directory = seed_directory();
        let sparky = directory.find_user(&UserId::new("u3")).expect("seeded");
        assert_eq!(sparky.memberships().len(), 2);

        let volunteer = sparky
            .membership(&MembershipId::new("m-sparky-rangers"))
            .expect("volunteer context");
        assert_eq!(volunteer.role(), Role::Volunteer);
        assert!(volunteer.permissions().is_empty());
    }

    #[test]
    fn same_role_different_rights_across_memberships() {
        let users = seed_users();
        let val = &users[3];
        let sparky = &users[2];

        // Val the Volunteer sees the dashboard; Sparky-as-Volunteer does
        // not. Only explicit per-membership sets can express this.
        assert!(val
            .default_membership()
            .has_permission(Permission::ViewDashboard));
        let sparky_vol = sparky
            .membership(&MembershipId::new("m-sparky-rangers"))
            .expect("volunteer context");
        assert!(!sparky_vol.has_permission(Permission::ViewDashboard));
    }

    #[test]
    fn rick_carries_explicit_extras() {
        let directory = seed_directory();
        let rick = directory.find_user(&UserId::new("u2")).expect("seeded");
        let lead = rick.default_membership();
        assert!(lead.has_permission(Permission::AccessSafetyDashboard));
        assert!(lead.has_permission(Permission::ManageDepartmentShifts));
        assert!(lead.has_permission(Permission::ViewVolunteerData));
    }
}
