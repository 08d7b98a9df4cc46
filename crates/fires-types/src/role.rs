//! Role labels for memberships.

use serde::{Deserialize, Serialize};

/// The role a user holds within one membership.
///
/// A role is **descriptive metadata**: it names how a user relates to an
/// entity ("Camp Lead of Camp Entropy") and drives labels and navigation in
/// the view layer. It does not grant anything by itself at check time — a
/// membership's explicit permission set is the single source of truth.
/// Roles only feed the default-permission catalog when seed data omits an
/// explicit grant list.
///
/// # Example
///
/// ```
/// use fires_types::Role;
///
/// let role = Role::CampLead;
/// assert_eq!(role.as_str(), "CAMP_LEAD");
/// assert_eq!(format!("{role}"), "Camp Lead");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Organizer of the whole event.
    EventOrganizer,
    /// Lead of an operational department (Rangers, Gate, ESD, ...).
    DepartmentLead,
    /// Lead of a theme camp.
    CampLead,
    /// Lead of a sub-team within a camp.
    TeamLead,
    /// Department volunteer.
    Volunteer,
    /// Plain event participant.
    Participant,
}

impl Role {
    /// Every role, in descending order of typical scope.
    pub const ALL: [Role; 6] = [
        Role::EventOrganizer,
        Role::DepartmentLead,
        Role::CampLead,
        Role::TeamLead,
        Role::Volunteer,
        Role::Participant,
    ];

    /// Returns the wire form of this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EventOrganizer => "EVENT_ORGANIZER",
            Self::DepartmentLead => "DEPARTMENT_LEAD",
            Self::CampLead => "CAMP_LEAD",
            Self::TeamLead => "TEAM_LEAD",
            Self::Volunteer => "VOLUNTEER",
            Self::Participant => "PARTICIPANT",
        }
    }

    /// Returns a human-readable label ("Camp Lead").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::EventOrganizer => "Event Organizer",
            Self::DepartmentLead => "Department Lead",
            Self::CampLead => "Camp Lead",
            Self::TeamLead => "Team Lead",
            Self::Volunteer => "Volunteer",
            Self::Participant => "Participant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
