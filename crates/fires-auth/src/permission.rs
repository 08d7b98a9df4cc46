//! The closed set of capability tokens.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// An atomic capability checked before gating an action.
///
/// The set is closed: every permission the system ever checks is a variant
/// here, and views gate themselves on membership of these tokens in the
/// active membership's grant set. Permissions are never combined or derived
/// at runtime.
///
/// # Wire Form
///
/// Serialized as SCREAMING_SNAKE_CASE strings, matching the seed data
/// (`"EDIT_CAMP_DETAILS"`). [`FromStr`] accepts the same form, so the CLI
/// can take tokens verbatim.
///
/// # Example
///
/// ```
/// use fires_auth::Permission;
///
/// let p: Permission = "MANAGE_CAMP_FINANCES".parse()?;
/// assert_eq!(p, Permission::ManageCampFinances);
/// assert_eq!(p.as_str(), "MANAGE_CAMP_FINANCES");
/// # Ok::<(), fires_auth::ParsePermissionError>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// See the dashboard for the active context.
    ViewDashboard,
    /// Read a camp's budget and transactions.
    ViewCampFinances,
    /// Approve and record camp transactions.
    ManageCampFinances,
    /// Add, remove, and edit camp roster members.
    ManageCampRoster,
    /// Edit a camp's name, description, and placement details.
    EditCampDetails,
    /// Manage the event-level budget.
    ManageEventBudget,
    /// Read volunteer rosters and shift data.
    ViewVolunteerData,
    /// Open the safety/incident dashboard.
    AccessSafetyDashboard,
    /// Create and assign department shifts.
    ManageDepartmentShifts,
    /// Create and manage sub-teams within a camp.
    ManageSubTeams,
}

impl Permission {
    /// Every permission token, in declaration order.
    pub const ALL: [Permission; 10] = [
        Permission::ViewDashboard,
        Permission::ViewCampFinances,
        Permission::ManageCampFinances,
        Permission::ManageCampRoster,
        Permission::EditCampDetails,
        Permission::ManageEventBudget,
        Permission::ViewVolunteerData,
        Permission::AccessSafetyDashboard,
        Permission::ManageDepartmentShifts,
        Permission::ManageSubTeams,
    ];

    /// Returns the wire form of this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "VIEW_DASHBOARD",
            Self::ViewCampFinances => "VIEW_CAMP_FINANCES",
            Self::ManageCampFinances => "MANAGE_CAMP_FINANCES",
            Self::ManageCampRoster => "MANAGE_CAMP_ROSTER",
            Self::EditCampDetails => "EDIT_CAMP_DETAILS",
            Self::ManageEventBudget => "MANAGE_EVENT_BUDGET",
            Self::ViewVolunteerData => "VIEW_VOLUNTEER_DATA",
            Self::AccessSafetyDashboard => "ACCESS_SAFETY_DASHBOARD",
            Self::ManageDepartmentShifts => "MANAGE_DEPARTMENT_SHIFTS",
            Self::ManageSubTeams => "MANAGE_SUB_TEAMS",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown permission token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission token: '{token}'")]
pub struct ParsePermissionError {
    /// The token that failed to parse.
    pub token: String,
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePermissionError {
                token: s.to_string(),
            })
    }
}
