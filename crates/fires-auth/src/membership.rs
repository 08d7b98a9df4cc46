//! Membership: one user's binding to one organizational entity.

use crate::{catalog, Permission, ValidationError};
use fires_types::{EntityRef, MembershipId, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A user's role-and-permission binding to one entity.
///
/// A membership ties together WHERE (the [`EntityRef`]), a descriptive
/// role label, and the authoritative grant set for acting in that context.
///
/// # Immutability
///
/// The permission set is fixed at construction; no mutation API exists.
/// In a real system a membership is created when a user joins an entity
/// with a role and destroyed when they leave — regrants produce a new
/// membership value.
///
/// # Two Constructors, One Scheme
///
/// - [`try_new`](Self::try_new) takes the grant set explicitly — the
///   authoritative path.
/// - [`with_role_defaults`](Self::with_role_defaults) fills the set from
///   [`catalog::default_permissions`] — a seed convenience that snapshots
///   the table at construction. Checks never read the table afterwards.
///
/// # Example
///
/// ```
/// use fires_auth::{Membership, Permission};
/// use fires_types::{EntityId, EntityRef, EntityType, MembershipId, Role};
///
/// let rangers = EntityRef::new(EntityId::new("d1"), "Event Rangers", EntityType::Department);
///
/// // Explicitly empty grant set: a volunteer context with no rights yet.
/// let m = Membership::try_new(MembershipId::new("m2"), rangers, Role::Volunteer, [])?;
/// assert!(!m.has_permission(Permission::ViewDashboard));
/// # Ok::<(), fires_auth::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    id: MembershipId,
    entity: EntityRef,
    role: Role,
    permissions: BTreeSet<Permission>,
}

impl Membership {
    /// Creates a membership with an explicit grant set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the entity reference has an empty id
    /// or an empty display name.
    pub fn try_new(
        id: MembershipId,
        entity: EntityRef,
        role: Role,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Result<Self, ValidationError> {
        if entity.id.is_empty() {
            return Err(ValidationError::EmptyEntityId { membership: id });
        }
        if entity.name.is_empty() {
            return Err(ValidationError::EmptyEntityName { membership: id });
        }
        Ok(Self {
            id,
            entity,
            role,
            permissions: permissions.into_iter().collect(),
        })
    }

    /// Creates a membership with the customary grant set for `role`.
    ///
    /// Snapshots [`catalog::default_permissions`] at construction; the
    /// resulting membership is indistinguishable from one built with the
    /// same set passed explicitly.
    ///
    /// # Errors
    ///
    /// Same validation as [`try_new`](Self::try_new).
    pub fn with_role_defaults(
        id: MembershipId,
        entity: EntityRef,
        role: Role,
    ) -> Result<Self, ValidationError> {
        let defaults = catalog::default_permissions(role).iter().copied();
        Self::try_new(id, entity, role, defaults)
    }

    /// Returns the membership id.
    #[must_use]
    pub fn id(&self) -> &MembershipId {
        &self.id
    }

    /// Returns the referenced entity.
    #[must_use]
    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }

    /// Returns the role label.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the grant set.
    #[must_use]
    pub fn permissions(&self) -> &BTreeSet<Permission> {
        &self.permissions
    }

    /// Returns `true` if this membership grants `permission`.
    ///
    /// Pure set lookup; the role label plays no part.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.role, self.entity)
    }
}
