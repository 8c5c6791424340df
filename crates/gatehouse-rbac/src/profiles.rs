//! # Permission Profiles
//!
//! A profile maps each role to the set of actions it is granted. The built-in
//! profiles are declared as static tables below and built once, when the
//! auth server selects its mode; a built profile is never modified.

use std::collections::{HashMap, HashSet};

use gatehouse_roles::Role;
use serde::Serialize;

use crate::actions::Action;

/// Grants used when the auth server starts in standard mode.
static STANDARD_GRANTS: &[(Role, &[Action])] = &[
    (
        Role::USER,
        &[
            Action::SignIn,
            Action::CreateWebSession,
            Action::GenerateUserCert,
            Action::GetCertAuthorities,
            Action::GetSession,
            Action::GetSessions,
            Action::GetEvents,
        ],
    ),
    (
        Role::PROVISION_TOKEN,
        &[Action::RegisterUsingToken, Action::RegisterNewAuthServer],
    ),
    (
        Role::NODE,
        &[
            Action::UpsertServer,
            Action::GetCertAuthorities,
            Action::GetLocalDomain,
            Action::GetUserKeys,
            Action::GetServers,
            Action::UpsertParty,
            Action::LogEntry,
            Action::GetChunkWriter,
        ],
    ),
    (
        Role::WEB,
        // No SignIn for the web proxy.
        &[
            Action::CreateWebSession,
            Action::GetWebSession,
            Action::DeleteWebSession,
            Action::GetSession,
            Action::GetSessions,
            Action::GetEvents,
        ],
    ),
    (
        Role::SIGNUP,
        &[Action::GetSignupTokenData, Action::CreateUserWithToken],
    ),
];

/// Grants used when the auth server runs in hangout mode on a user's computer.
static HANGOUT_GRANTS: &[(Role, &[Action])] = &[
    (
        Role::USER,
        &[Action::GenerateUserCert, Action::GetCertAuthorities],
    ),
    (
        Role::PROVISION_TOKEN,
        &[
            Action::RegisterUsingToken,
            Action::RegisterNewAuthServer,
            Action::GenerateUserCert,
        ],
    ),
    (Role::HANGOUT_REMOTE_USER, &[Action::GenerateUserCert]),
    (
        Role::NODE,
        &[
            Action::UpsertServer,
            Action::GetCertAuthorities,
            Action::GetLocalDomain,
            Action::GetUserKeys,
            Action::GetServers,
            Action::UpsertParty,
            Action::LogEntry,
            Action::GetChunkWriter,
            // Not granted to nodes in standard mode.
            Action::UpsertCertAuthority,
            Action::UpsertSession,
            Action::GetAuthServers,
        ],
    ),
    (
        Role::WEB,
        &[Action::GetWebSession, Action::DeleteWebSession],
    ),
    (
        Role::SIGNUP,
        &[Action::GetSignupTokenData, Action::CreateUserWithToken],
    ),
];

/// Immutable mapping from role to granted actions.
///
/// The administrator role never needs an entry: checkers authorize it before
/// consulting the profile.
///
/// # Example
///
/// ```
/// use gatehouse_rbac::{Action, PermissionProfile};
/// use gatehouse_roles::Role;
///
/// let profile = PermissionProfile::standard();
/// assert!(profile.is_granted(&Role::USER, Action::SignIn));
/// assert!(!profile.is_granted(&Role::WEB, Action::SignIn));
/// assert!(profile.grants(&Role::HANGOUT_REMOTE_USER).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionProfile {
    /// Profile name, used in logs.
    name: &'static str,
    /// Granted actions per role.
    grants: HashMap<Role, HashSet<Action>>,
}

impl PermissionProfile {
    /// Build the profile used in standard mode.
    pub fn standard() -> Self {
        Self::from_table("standard", STANDARD_GRANTS)
    }

    /// Build the profile used in hangout mode.
    ///
    /// Compared to the standard profile, users keep only certificate access,
    /// the web proxy keeps only web session lookup and deletion, the remote
    /// peer may generate user certificates, and nodes may also manage
    /// certificate authorities and sessions.
    pub fn hangout() -> Self {
        Self::from_table("hangout", HANGOUT_GRANTS)
    }

    fn from_table(name: &'static str, table: &[(Role, &[Action])]) -> Self {
        let grants = table
            .iter()
            .map(|(role, actions)| (role.clone(), actions.iter().copied().collect()))
            .collect();

        Self { name, grants }
    }

    /// Get the profile name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the roles that have an entry in this profile, sorted by name.
    pub fn roles(&self) -> Vec<&Role> {
        let mut roles: Vec<&Role> = self.grants.keys().collect();
        roles.sort();
        roles
    }

    /// Get the grant set of a role.
    ///
    /// # Returns
    ///
    /// `None` if the role has no entry in this profile
    pub fn grants(&self, role: &Role) -> Option<&HashSet<Action>> {
        self.grants.get(role)
    }

    /// Check if the profile has an entry for `role`.
    pub fn contains_role(&self, role: &Role) -> bool {
        self.grants.contains_key(role)
    }

    /// Check if `action` is in the grant set of `role`.
    ///
    /// This is a plain table lookup; it does not apply the administrator
    /// bypass.
    pub fn is_granted(&self, role: &Role, action: Action) -> bool {
        self.grants
            .get(role)
            .is_some_and(|actions| actions.contains(&action))
    }

    /// Get the number of roles with an entry.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Check if no role has an entry.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
