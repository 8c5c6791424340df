//! # Permission Checkers
//!
//! The [`PermissionChecker`] capability answers one question: may this role
//! perform this action? Callers hold an `Arc<dyn PermissionChecker>` chosen
//! once at startup and never branch on which variant is behind it.

use std::sync::Arc;

use gatehouse_roles::Role;

use crate::actions::Action;
use crate::error::{PermissionError, PermissionResult};
use crate::profiles::PermissionProfile;

/// Verifies that callers have permission to execute an action of the auth
/// server.
///
/// Implementations hold only immutable data, so a single checker can be
/// shared across any number of threads.
pub trait PermissionChecker: Send + Sync {
    /// Check if `role` has permission to execute `action`.
    ///
    /// `action` is a wire name; strings outside the action vocabulary are
    /// never granted, though the administrator is still authorized for them.
    ///
    /// # Errors
    ///
    /// Returns a [`PermissionError`] describing the denial.
    fn has_permission(&self, role: &Role, action: &str) -> PermissionResult<()>;

    /// Check a typed [`Action`].
    fn authorize(&self, role: &Role, action: Action) -> PermissionResult<()> {
        self.has_permission(role, action.as_str())
    }
}

/// Checker backed by a [`PermissionProfile`].
///
/// Denies by default: a role missing from the profile is denied every action,
/// and a known role is denied every action outside its grant set.
#[derive(Debug, Clone)]
pub struct ProfilePermissions {
    profile: PermissionProfile,
}

impl ProfilePermissions {
    /// Wrap a profile in a checker.
    pub fn new(profile: PermissionProfile) -> Self {
        Self { profile }
    }

    /// Get the profile this checker consults.
    pub fn profile(&self) -> &PermissionProfile {
        &self.profile
    }
}

impl PermissionChecker for ProfilePermissions {
    fn has_permission(&self, role: &Role, action: &str) -> PermissionResult<()> {
        if role.is_admin() {
            tracing::trace!(%role, action, "Admin bypasses permission profile");
            return Ok(());
        }

        let Some(granted) = self.profile.grants(role) else {
            tracing::debug!(
                %role,
                action,
                profile = self.profile.name(),
                "Permission denied: role not in profile"
            );
            return Err(PermissionError::RoleNotAllowed {
                role: role.clone(),
                action: action.to_string(),
            });
        };

        if Action::parse(action).is_some_and(|action| granted.contains(&action)) {
            return Ok(());
        }

        tracing::debug!(
            %role,
            action,
            profile = self.profile.name(),
            "Permission denied: action not granted"
        );
        Err(PermissionError::ActionNotGranted {
            role: role.clone(),
            action: action.to_string(),
        })
    }
}

/// Checker that authorizes everything.
///
/// For contexts where an outer layer has already established trust.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllPermissions;

impl PermissionChecker for AllowAllPermissions {
    fn has_permission(&self, _role: &Role, _action: &str) -> PermissionResult<()> {
        Ok(())
    }
}

impl<T: PermissionChecker + ?Sized> PermissionChecker for &T {
    fn has_permission(&self, role: &Role, action: &str) -> PermissionResult<()> {
        (**self).has_permission(role, action)
    }
}

impl<T: PermissionChecker + ?Sized> PermissionChecker for Box<T> {
    fn has_permission(&self, role: &Role, action: &str) -> PermissionResult<()> {
        (**self).has_permission(role, action)
    }
}

impl<T: PermissionChecker + ?Sized> PermissionChecker for Arc<T> {
    fn has_permission(&self, role: &Role, action: &str) -> PermissionResult<()> {
        (**self).has_permission(role, action)
    }
}

/// Returns a permission checker with the built-in grants used when the auth
/// server starts in standard mode.
///
/// # Example
///
/// ```
/// use gatehouse_rbac::{new_standard_permissions, Action, PermissionChecker};
/// use gatehouse_roles::Role;
///
/// let checker = new_standard_permissions();
/// assert!(checker.authorize(&Role::USER, Action::SignIn).is_ok());
/// assert!(checker.authorize(&Role::USER, Action::UpsertCertAuthority).is_err());
/// ```
pub fn new_standard_permissions() -> ProfilePermissions {
    ProfilePermissions::new(PermissionProfile::standard())
}

/// Returns a permission checker with the grants used when the auth server
/// runs in hangout mode on a user's computer.
///
/// # Example
///
/// ```
/// use gatehouse_rbac::{new_hangout_permissions, Action, PermissionChecker};
/// use gatehouse_roles::Role;
///
/// let checker = new_hangout_permissions();
/// assert!(checker.authorize(&Role::NODE, Action::UpsertCertAuthority).is_ok());
/// assert!(checker.authorize(&Role::USER, Action::SignIn).is_err());
/// ```
pub fn new_hangout_permissions() -> ProfilePermissions {
    ProfilePermissions::new(PermissionProfile::hangout())
}

/// Returns a permission checker that authorizes every role for every action.
pub fn new_allow_all_permissions() -> AllowAllPermissions {
    AllowAllPermissions
}
