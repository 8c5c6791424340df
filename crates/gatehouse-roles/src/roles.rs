//! Actor roles
//!
//! This module defines the role an authenticated caller acts under, along with
//! the built-in roles and the role lists recognized by each deployment mode.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Class of actor a caller authenticates as.
///
/// Roles are opaque comparable keys: any name is a valid role value, and two
/// roles are equal when their names are equal. The identity layer decides which
/// role a caller holds; permission profiles only ever compare against it.
///
/// The well-known roles are available as associated constants.
///
/// # Examples
///
/// ```
/// use gatehouse_roles::Role;
///
/// let role = Role::new("User");
/// assert_eq!(role, Role::USER);
/// assert!(Role::ADMIN.is_admin());
///
/// let custom = Role::new("unregistered-role");
/// assert!(!custom.is_builtin());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Auth server itself
    pub const AUTH: Role = Role(Cow::Borrowed("Auth"));

    /// Ordinary user
    pub const USER: Role = Role(Cow::Borrowed("User"));

    /// Web proxy acting on behalf of browser sessions
    pub const WEB: Role = Role(Cow::Borrowed("Web"));

    /// Node (SSH agent) registered with the cluster
    pub const NODE: Role = Role(Cow::Borrowed("Node"));

    /// Administrator, authorized for every action
    pub const ADMIN: Role = Role(Cow::Borrowed("Admin"));

    /// Bearer of a provisioning token
    pub const PROVISION_TOKEN: Role = Role(Cow::Borrowed("ProvisionToken"));

    /// Actor in the middle of the signup flow
    pub const SIGNUP: Role = Role(Cow::Borrowed("Signup"));

    /// Ephemeral remote peer joining a hangout session
    pub const HANGOUT_REMOTE_USER: Role = Role(Cow::Borrowed("HangoutRemoteUser"));

    /// Create a role from its name.
    ///
    /// The name is taken verbatim; use [`Role::parse`] to resolve loosely
    /// formatted input to a built-in role.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Get the role name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the administrator role.
    ///
    /// The administrator bypasses every permission table.
    pub fn is_admin(&self) -> bool {
        *self == Self::ADMIN
    }

    /// Check if this is one of the built-in roles.
    pub fn is_builtin(&self) -> bool {
        Self::builtin().contains(self)
    }

    /// Resolve a built-in role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, `-` and `_` are ignored)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if `s` names a built-in role, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use gatehouse_roles::Role;
    ///
    /// assert_eq!(Role::parse("node"), Some(Role::NODE));
    /// assert_eq!(Role::parse("provision_token"), Some(Role::PROVISION_TOKEN));
    /// assert_eq!(Role::parse("hangout-remote-user"), Some(Role::HANGOUT_REMOTE_USER));
    /// assert_eq!(Role::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Self::builtin()
            .into_iter()
            .find(|role| role.as_str().to_lowercase() == normalized)
    }

    /// Get all built-in roles.
    pub fn builtin() -> [Role; 8] {
        [
            Self::AUTH,
            Self::USER,
            Self::WEB,
            Self::NODE,
            Self::ADMIN,
            Self::PROVISION_TOKEN,
            Self::SIGNUP,
            Self::HANGOUT_REMOTE_USER,
        ]
    }

    /// Roles that may be assigned to callers when the auth server runs in
    /// standard mode.
    pub fn standard_roles() -> Vec<Role> {
        vec![
            Self::AUTH,
            Self::USER,
            Self::WEB,
            Self::NODE,
            Self::ADMIN,
            Self::PROVISION_TOKEN,
            Self::SIGNUP,
        ]
    }

    /// Roles that may be assigned to callers when the auth server runs in
    /// hangout mode on a user's computer.
    pub fn hangout_roles() -> Vec<Role> {
        vec![Self::ADMIN, Self::PROVISION_TOKEN, Self::HANGOUT_REMOTE_USER]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Role {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_equality_is_by_name() {
        assert_eq!(Role::new("User"), Role::USER);
        assert_eq!(Role::from(String::from("Node")), Role::NODE);
        assert_ne!(Role::new("user"), Role::USER);
    }

    #[test]
    fn test_role_is_admin() {
        assert!(Role::ADMIN.is_admin());
        assert!(Role::new("Admin").is_admin());
        assert!(!Role::USER.is_admin());
        assert!(!Role::new("admin").is_admin());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::ADMIN));
        assert_eq!(Role::parse("WEB"), Some(Role::WEB));
        assert_eq!(Role::parse("provision-token"), Some(Role::PROVISION_TOKEN));
        assert_eq!(Role::parse("HangoutRemoteUser"), Some(Role::HANGOUT_REMOTE_USER));
        assert_eq!(Role::parse("unregistered-role"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_builtin() {
        assert!(Role::SIGNUP.is_builtin());
        assert!(!Role::new("unregistered-role").is_builtin());
        assert_eq!(Role::builtin().len(), 8);
    }

    #[test]
    fn test_standard_roles() {
        let roles = Role::standard_roles();
        assert_eq!(roles.len(), 7);
        assert!(roles.contains(&Role::AUTH));
        assert!(roles.contains(&Role::ADMIN));
        assert!(!roles.contains(&Role::HANGOUT_REMOTE_USER));
    }

    #[test]
    fn test_hangout_roles() {
        let roles = Role::hangout_roles();
        assert_eq!(
            roles,
            vec![Role::ADMIN, Role::PROVISION_TOKEN, Role::HANGOUT_REMOTE_USER]
        );
        assert!(!roles.contains(&Role::USER));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::PROVISION_TOKEN.to_string(), "ProvisionToken");
        assert_eq!(Role::new("custom").as_str(), "custom");
    }

    #[test]
    fn test_role_serde_is_transparent() {
        let json = serde_json::to_string(&Role::NODE).unwrap();
        assert_eq!(json, "\"Node\"");

        let role: Role = serde_json::from_str("\"Signup\"").unwrap();
        assert_eq!(role, Role::SIGNUP);

        let custom: Role = serde_json::from_str("\"auditor\"").unwrap();
        assert_eq!(custom.as_str(), "auditor");
    }
}
