//! Permission mode selection
//!
//! The auth server picks exactly one permission checker when it starts,
//! based on its deployment mode. This module provides the mode type and the
//! settings section the server embeds in its own configuration.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use gatehouse_roles::Role;
use serde::{Deserialize, Serialize};

use crate::checker::{
    new_allow_all_permissions, new_hangout_permissions, new_standard_permissions,
    PermissionChecker,
};
use crate::error::UnknownMode;

/// Deployment mode that determines the active permission checker.
///
/// # Examples
///
/// ```
/// use gatehouse_rbac::{Action, PermissionMode};
/// use gatehouse_roles::Role;
///
/// let checker = PermissionMode::Hangout.checker();
/// assert!(checker.authorize(&Role::HANGOUT_REMOTE_USER, Action::GenerateUserCert).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionMode {
    /// Normal multi-actor deployment
    #[default]
    Standard,

    /// Lightweight auth server hosted on a user's computer for ad-hoc sessions
    Hangout,

    /// Everything is authorized; trust is established by an outer layer
    AllowAll,
}

impl PermissionMode {
    /// Get string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hangout => "hangout",
            Self::AllowAll => "allow_all",
        }
    }

    /// Parse mode from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(PermissionMode)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use gatehouse_rbac::PermissionMode;
    ///
    /// assert_eq!(PermissionMode::parse("Hangout"), Some(PermissionMode::Hangout));
    /// assert_eq!(PermissionMode::parse("allow-all"), Some(PermissionMode::AllowAll));
    /// assert_eq!(PermissionMode::parse("open"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "hangout" => Some(Self::Hangout),
            "allow_all" | "allow-all" | "allowall" => Some(Self::AllowAll),
            _ => None,
        }
    }

    /// Roles that may be assigned to callers in this mode.
    pub fn roles(&self) -> Vec<Role> {
        match self {
            Self::Standard | Self::AllowAll => Role::standard_roles(),
            Self::Hangout => Role::hangout_roles(),
        }
    }

    /// Build a fresh checker for this mode.
    pub fn checker(&self) -> Arc<dyn PermissionChecker> {
        match self {
            Self::Standard => Arc::new(new_standard_permissions()),
            Self::Hangout => Arc::new(new_hangout_permissions()),
            Self::AllowAll => Arc::new(new_allow_all_permissions()),
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Permission settings for the auth server.
///
/// # Examples
///
/// ```
/// use gatehouse_rbac::mode::{PermissionMode, PermissionSettings};
///
/// let settings = PermissionSettings::default();
/// assert_eq!(settings.mode, PermissionMode::Standard);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSettings {
    /// Deployment mode selecting the permission checker
    #[serde(default)]
    pub mode: PermissionMode,
}

impl PermissionSettings {
    /// Create settings for the given mode.
    pub fn new(mode: PermissionMode) -> Self {
        Self { mode }
    }

    /// Select the permission checker for the configured mode.
    ///
    /// Call once at startup and share the result.
    pub fn build_checker(&self) -> Arc<dyn PermissionChecker> {
        match self.mode {
            PermissionMode::AllowAll => {
                tracing::warn!(mode = %self.mode, "Permission checks disabled")
            }
            mode => tracing::info!(%mode, "Permission checker selected"),
        }
        self.mode.checker()
    }
}
