//! Core types for the 1000 Fires event-operations core.
//!
//! This crate provides the foundational vocabulary shared by every other
//! crate in the workspace: identifiers, the organizational-entity reference,
//! and the role enumeration.
//!
//! # Crate Architecture
//!
//! ```text
//! fires-types    : ids, EntityRef, Role, TryNew, ErrorCode  ◄── HERE
//!      ↑
//! fires-auth     : Permission, Membership, User
//!      ↑
//! fires-session  : SessionContext, UserDirectory, fixtures
//!      ↑
//! fires-cli      : inspection binary
//! ```
//!
//! # Identifier Design
//!
//! All identifiers are string-backed newtypes. The domain keys records by
//! human-readable slugs (`u1`, `sparky`, `c1`) that originate outside this
//! core — a login screen hands `login` a user slug verbatim, and a
//! membership references its camp or department the same way. Newtypes keep
//! the three id spaces from being mixed up at compile time.
//!
//! # Example
//!
//! ```
//! use fires_types::{EntityId, EntityRef, EntityType, MembershipId, Role, UserId};
//!
//! let user = UserId::new("u3");
//! let membership = MembershipId::new("m-sparky-camp");
//!
//! let camp = EntityRef::new(EntityId::new("c1"), "Camp Entropy", EntityType::Camp);
//! assert!(camp.entity_type.is_camp());
//!
//! let role = Role::CampLead;
//! assert_eq!(role.as_str(), "CAMP_LEAD");
//! assert_eq!(format!("{user}"), "user:u3");
//! assert_eq!(format!("{membership}"), "membership:m-sparky-camp");
//! ```

mod construct;
mod entity;
mod error;
mod id;
mod role;

pub use construct::TryNew;
pub use entity::{EntityRef, EntityType};
pub use error::{assert_error_code, ErrorCode};
pub use id::{EntityId, MembershipId, UserId};
pub use role::Role;
