//! Default role→permission catalog.
//!
//! A seed-time convenience table: when fixture data declares a membership
//! by role alone, [`default_permissions`] supplies the customary grant set
//! for that role. The table is **never consulted at permission-check
//! time** — [`Membership`](crate::Membership) snapshots its grants at
//! construction and [`has_permission`](crate::Membership::has_permission)
//! only reads that snapshot. Overriding a membership with an explicit set
//! (even an empty one) is always possible and always wins.

use crate::Permission;
use fires_types::Role;

/// Returns the customary grant set for a role.
///
/// Total over [`Role`]: every role maps to a fixed, possibly small slice.
/// Pure lookup, no side effects.
///
/// # Example
///
/// ```
/// use fires_auth::{catalog, Permission};
/// use fires_types::Role;
///
/// let defaults = catalog::default_permissions(Role::Volunteer);
/// assert_eq!(defaults, &[Permission::ViewDashboard]);
/// ```
#[must_use]
pub fn default_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::EventOrganizer => &[
            Permission::ViewDashboard,
            Permission::ViewCampFinances,
            Permission::ManageCampFinances,
            Permission::ManageCampRoster,
            Permission::EditCampDetails,
            Permission::ManageEventBudget,
            Permission::ViewVolunteerData,
        ],
        Role::DepartmentLead => &[
            Permission::ViewDashboard,
            Permission::ViewVolunteerData,
            Permission::ManageEventBudget,
        ],
        Role::CampLead => &[
            Permission::ViewDashboard,
            Permission::ViewCampFinances,
            Permission::ManageCampFinances,
            Permission::ManageCampRoster,
            Permission::EditCampDetails,
            Permission::ManageSubTeams,
        ],
        Role::TeamLead => &[
            Permission::ViewDashboard,
            Permission::ViewCampFinances,
            Permission::ManageCampRoster,
        ],
        Role::Volunteer | Role::Participant => &[Permission::ViewDashboard],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_over_roles() {
        for role in Role::ALL {
            // Every role has at least the dashboard.
            assert!(
                default_permissions(role).contains(&Permission::ViewDashboard),
                "{role} is missing VIEW_DASHBOARD"
            );
        }
    }

    #[test]
    fn organizer_defaults() {
        let defaults = default_permissions(Role::EventOrganizer);
        assert_eq!(defaults.len(), 7);
        assert!(defaults.contains(&Permission::ManageEventBudget));
        assert!(!defaults.contains(&Permission::ManageSubTeams));
    }

    #[test]
    fn camp_lead_defaults() {
        let defaults = default_permissions(Role::CampLead);
        assert!(defaults.contains(&Permission::EditCampDetails));
        assert!(defaults.contains(&Permission::ManageSubTeams));
        assert!(!defaults.contains(&Permission::ManageEventBudget));
    }

    #[test]
    fn floor_roles_see_dashboard_only() {
        assert_eq!(
            default_permissions(Role::Volunteer),
            &[Permission::ViewDashboard]
        );
        assert_eq!(
            default_permissions(Role::Participant),
            &[Permission::ViewDashboard]
        );
    }

    #[test]
    fn no_role_grants_safety_or_shifts_by_default() {
        // ACCESS_SAFETY_DASHBOARD and MANAGE_DEPARTMENT_SHIFTS are only
        // ever granted explicitly per membership.
        for role in Role::ALL {
            let defaults = default_permissions(role);
            assert!(!defaults.contains(&Permission::AccessSafetyDashboard));
            assert!(!defaults.contains(&Permission::ManageDepartmentShifts));
        }
    }
}
