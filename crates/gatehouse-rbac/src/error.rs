//! Error types for permission checks
//!
//! A permission check fails in exactly one way: access is denied. The two
//! variants of [`PermissionError`] record why, so that logs and audit events
//! can tell an unknown role apart from a missing grant, while callers treat
//! both the same.

use gatehouse_roles::Role;
use thiserror::Error;

/// Access denied by a permission checker.
///
/// Both variants carry the offending role and action for audit purposes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The role has no entry in the active permission profile.
    #[error("role '{role}' is not allowed (action '{action}')")]
    RoleNotAllowed {
        /// Role that was checked
        role: Role,
        /// Action that was requested
        action: String,
    },

    /// The role is known but the action is not in its grant set.
    #[error("role '{role}' doesn't have permission for action '{action}'")]
    ActionNotGranted {
        /// Role that was checked
        role: Role,
        /// Action that was requested
        action: String,
    },
}

/// Result type for permission checks.
pub type PermissionResult<T> = Result<T, PermissionError>;

impl PermissionError {
    /// Every permission error is an access denial.
    pub fn is_access_denied(&self) -> bool {
        true
    }

    /// Get the role that was denied.
    pub fn role(&self) -> &Role {
        match self {
            PermissionError::RoleNotAllowed { role, .. }
            | PermissionError::ActionNotGranted { role, .. } => role,
        }
    }

    /// Get the action that was denied.
    pub fn action(&self) -> &str {
        match self {
            PermissionError::RoleNotAllowed { action, .. }
            | PermissionError::ActionNotGranted { action, .. } => action,
        }
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        403
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        "ACCESS_DENIED"
    }
}

/// A string that is not the wire name of any action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

/// A string that does not name a permission mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission mode '{0}' (expected standard, hangout or allow_all)")]
pub struct UnknownMode(pub String);
