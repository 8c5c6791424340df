//! # Gatehouse RBAC (Role-Based Access Control)
//!
//! This crate provides the permission checker that gates every privileged
//! operation of the gatehouse auth service: certificate issuance, session
//! management, node registration and web sessions.
//!
//! ## Overview
//!
//! The gatehouse-rbac crate handles:
//! - **Actions**: The closed vocabulary of privileged operations
//! - **Profiles**: Immutable role → granted actions tables
//! - **Checkers**: The [`PermissionChecker`] capability and its variants
//! - **Modes**: Startup selection of the active checker
//!
//! ## Decision Order
//!
//! ```text
//! role == Admin            -> allowed (profile never consulted)
//! role not in profile      -> denied: "role '<role>' is not allowed (action '<action>')"
//! action not in grant set  -> denied: "role '<role>' doesn't have permission for action '<action>'"
//! otherwise                -> allowed
//! ```
//!
//! ## Profiles
//!
//! - **standard**: Normal multi-actor deployment
//! - **hangout**: Reduced-trust auth server hosted on a user's computer;
//!   adds the `HangoutRemoteUser` role and lets nodes manage authorities
//! - **allow all**: No checks, for callers already inside a trust boundary
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use gatehouse_rbac::{Action, PermissionChecker, PermissionError, PermissionMode};
//! use gatehouse_roles::Role;
//!
//! // Select the checker once at startup
//! let checker: Arc<dyn PermissionChecker> = PermissionMode::Standard.checker();
//!
//! // Gate each privileged operation
//! assert!(checker.authorize(&Role::USER, Action::GenerateUserCert).is_ok());
//!
//! // Denials say why
//! match checker.authorize(&Role::new("auditor"), Action::GetEvents) {
//!     Err(PermissionError::RoleNotAllowed { role, .. }) => assert_eq!(role.as_str(), "auditor"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod actions;
pub mod checker;
pub mod error;
pub mod mode;
pub mod profiles;

// Re-export main types for convenience
pub use actions::Action;
pub use checker::{
    new_allow_all_permissions, new_hangout_permissions, new_standard_permissions,
    AllowAllPermissions, PermissionChecker, ProfilePermissions,
};
pub use error::{PermissionError, PermissionResult, UnknownAction, UnknownMode};
pub use mode::{PermissionMode, PermissionSettings};
pub use profiles::PermissionProfile;
