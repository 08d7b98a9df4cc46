//! Permission primitives for the 1000 Fires core.
//!
//! This crate defines WHAT can be allowed and WHO it attaches to:
//!
//! ```text
//! Granted = activeMembership.permissions ∋ Permission
//! ```
//!
//! | Type | Controls |
//! |------|----------|
//! | [`Permission`] | The closed set of capability tokens |
//! | [`Membership`] | One user's role + explicit grant set at one entity |
//! | [`User`] | Identity + ordered list of memberships |
//!
//! # One Source of Truth
//!
//! Two permission schemes existed in earlier prototypes of this system: a
//! static role→permissions table consulted at check time, and explicit
//! per-membership grant lists. This crate reconciles them: **the explicit
//! per-membership set is authoritative**. The role table survives only as
//! [`catalog::default_permissions`], a seed-time convenience used by
//! [`Membership::with_role_defaults`] — nothing consults it at check time.
//! This is strictly more expressive: a Volunteer in one department can hold
//! different grants than a Volunteer in another.
//!
//! # Crate Architecture
//!
//! ```text
//! fires-types   (ids, EntityRef, Role)
//!      ↑
//! fires-auth    (Permission, Membership, User)  ◄── THIS CRATE
//!      ↑
//! fires-session (SessionContext — selects the active Membership)
//! ```
//!
//! # Example
//!
//! ```
//! use fires_auth::{Membership, Permission, User};
//! use fires_types::{EntityId, EntityRef, EntityType, MembershipId, Role, TryNew, UserId};
//!
//! let camp = EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp);
//! let lead = Membership::with_role_defaults(
//!     MembershipId::new("m1"),
//!     camp,
//!     Role::CampLead,
//! )?;
//! assert!(lead.has_permission(Permission::EditCampDetails));
//!
//! let user = User::try_new((
//!     UserId::new("u3"),
//!     "Sparky".to_string(),
//!     "https://api.dicebear.com/7.x/avataaars/svg?seed=Sparky".to_string(),
//!     vec![lead],
//! ))?;
//! assert_eq!(user.default_membership().role(), Role::CampLead);
//! # Ok::<(), fires_auth::ValidationError>(())
//! ```

pub mod catalog;
mod error;
mod membership;
mod permission;
mod user;

pub use error::ValidationError;
pub use membership::Membership;
pub use permission::{ParsePermissionError, Permission};
pub use user::User;
