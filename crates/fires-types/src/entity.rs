//! Organizational-entity references.
//!
//! A [`Membership`](https://docs.rs/fires-auth) binds a user to exactly one
//! organizational unit — an event, a camp, or a department. The unit itself
//! lives outside this core (camp rosters, department shift boards, and the
//! event itself are view-layer concerns), so memberships carry only an
//! [`EntityRef`]: id, display name, and kind.

use crate::EntityId;
use serde::{Deserialize, Serialize};

/// The kind of organizational unit a membership refers to.
///
/// # Variants
///
/// | Variant | Description | Typical membership |
/// |---------|-------------|--------------------|
/// | `Event` | The festival itself | Event Organizer, Participant |
/// | `Camp` | A theme camp | Camp Lead, Team Lead |
/// | `Department` | An operational department (Rangers, Gate, ESD) | Department Lead, Volunteer |
///
/// # Example
///
/// ```
/// use fires_types::EntityType;
///
/// let kind = EntityType::Camp;
/// assert!(kind.is_camp());
/// assert_eq!(kind.as_str(), "CAMP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// The festival itself.
    Event,
    /// A theme camp.
    Camp,
    /// An operational department.
    Department,
}

impl EntityType {
    /// Returns the wire form of this entity type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "EVENT",
            Self::Camp => "CAMP",
            Self::Department => "DEPARTMENT",
        }
    }

    /// Returns `true` if this is [`EntityType::Event`].
    #[must_use]
    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event)
    }

    /// Returns `true` if this is [`EntityType::Camp`].
    #[must_use]
    pub fn is_camp(&self) -> bool {
        matches!(self, Self::Camp)
    }

    /// Returns `true` if this is [`EntityType::Department`].
    #[must_use]
    pub fn is_department(&self) -> bool {
        matches!(self, Self::Department)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A by-reference pointer to an external organizational unit.
///
/// Carries enough for the session core and its consumers: the unit's id
/// (for scoping, e.g. "which camp's finances"), a display name (for the
/// context-switcher UI), and its kind. No referential integrity is
/// enforced against the unit — it is an external collaborator.
///
/// # Example
///
/// ```
/// use fires_types::{EntityId, EntityRef, EntityType};
///
/// let camp = EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp);
/// assert_eq!(camp.name, "Camp Entropy");
/// assert_eq!(format!("{camp}"), "CAMP:c1 (Camp Entropy)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Identifier of the referenced unit.
    pub id: EntityId,
    /// Display name of the unit at the time the membership was created.
    pub name: String,
    /// What kind of unit this is.
    pub entity_type: EntityType,
}

impl EntityRef {
    /// Creates an entity reference.
    ///
    /// Emptiness of `id`/`name` is not checked here; `Membership`
    /// construction rejects structurally invalid refs.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            id,
            name: name.into(),
            entity_type,
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} ({})", self.entity_type, self.id.as_str(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_predicates() {
        assert!(EntityType::Event.is_event());
        assert!(!EntityType::Event.is_camp());
        assert!(EntityType::Camp.is_camp());
        assert!(EntityType::Department.is_department());
        assert!(!EntityType::Department.is_event());
    }

    #[test]
    fn entity_type_wire_form() {
        assert_eq!(EntityType::Event.as_str(), "EVENT");
        assert_eq!(EntityType::Camp.as_str(), "CAMP");
        assert_eq!(EntityType::Department.as_str(), "DEPARTMENT");
    }

    #[test]
    fn entity_type_serde() {
        let json = serde_json::to_string(&EntityType::Department).expect("serialize");
        assert_eq!(json, "\"DEPARTMENT\"");
        let parsed: EntityType = serde_json::from_str("\"CAMP\"").expect("deserialize");
        assert_eq!(parsed, EntityType::Camp);
    }

    #[test]
    fn entity_ref_display() {
        let dept = EntityRef::new(
            EntityId::new("d1"),
            "Event Rangers",
            EntityType::Department,
        );
        assert_eq!(format!("{dept}"), "DEPARTMENT:d1 (Event Rangers)");
    }

    #[test]
    fn entity_ref_equality() {
        let a = EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp);
        let b = EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp);
        let c = EntityRef::new(EntityId::new("c2"), "Bass Haven", EntityType::Camp);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
