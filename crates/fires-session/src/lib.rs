//! Session state for the 1000 Fires core.
//!
//! This crate owns the one mutable piece of the system: WHO is logged in
//! and WHICH of their memberships is the active context. Everything else —
//! dashboards, camp manager, map, safety screens — is a read-only consumer
//! of [`SessionContext`] and its permission checks.
//!
//! # Session State Machine
//!
//! ```text
//!              login(id)                switch_context(m)
//! LoggedOut ─────────────► LoggedIn ──────────────────────┐
//!     ▲                    (active = memberships[0])      │
//!     │                        ▲                          │
//!     │        logout()        └──────────────────────────┘
//!     └────────────────────── LoggedIn (active = m)
//! ```
//!
//! `LoggedOut` is both the initial state and reachable from anywhere via
//! `logout`. There is no error state: failed operations either return a
//! [`SessionError`] without touching state (unknown login) or no-op
//! defensively (foreign context switch).
//!
//! # Ownership, Not Globals
//!
//! [`SessionContext`] is a plain owned value constructed over any
//! [`UserDirectory`]. The embedding application decides where it lives and
//! passes it to whatever renders; tests construct a fresh one each. All
//! mutation goes through four `&mut self` operations — the single-writer
//! model needs no locking.
//!
//! # Example
//!
//! ```
//! use fires_auth::Permission;
//! use fires_session::{fixtures, SessionContext};
//! use fires_types::{MembershipId, UserId};
//!
//! let mut session = SessionContext::new(fixtures::seed_directory());
//!
//! session.login(&UserId::new("u3"))?;
//! assert!(session.check_permission(Permission::EditCampDetails));
//!
//! // Put on the volunteer hat: same user, different rights.
//! session.switch_context(&MembershipId::new("m-sparky-rangers"));
//! assert!(!session.check_permission(Permission::EditCampDetails));
//!
//! session.logout();
//! assert!(!session.check_permission(Permission::ViewDashboard));
//! # Ok::<(), fires_session::SessionError>(())
//! ```

mod context;
mod directory;
mod error;
pub mod fixtures;

pub use context::SessionContext;
pub use directory::{InMemoryDirectory, UserDirectory};
pub use error::SessionError;
