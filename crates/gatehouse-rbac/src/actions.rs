//! # Actions
//!
//! Defines every privileged operation of the auth service.
//! Each action has a stable wire name shared with every component that gates
//! behind a [`PermissionChecker`](crate::PermissionChecker); adding a new
//! privileged operation means adding a variant here and updating the profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownAction;

/// Privileged operations that can be granted to roles.
///
/// Serialized as the wire name (for example `"GenerateUserCert"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    // Sessions
    /// List recorded sessions.
    GetSessions,
    /// Read a single session.
    GetSession,
    /// Delete a session.
    DeleteSession,
    /// Create or update a session.
    UpsertSession,
    /// Add or refresh a party in a session.
    UpsertParty,

    // Certificate authorities
    /// Create or replace a certificate authority.
    UpsertCertAuthority,
    /// Read the trusted certificate authorities.
    GetCertAuthorities,
    /// Read the local cluster domain.
    GetLocalDomain,
    /// Remove a certificate authority.
    DeleteCertAuthority,
    /// Rotate the host certificate authority.
    ResetHostCertificateAuthority,
    /// Rotate the user certificate authority.
    ResetUserCertificateAuthority,

    // Provisioning
    /// Issue a provisioning token.
    GenerateToken,
    /// Register a node with a provisioning token.
    RegisterUsingToken,
    /// Register an additional auth server.
    RegisterNewAuthServer,

    // Audit log and events
    /// Write to the audit log.
    Log,
    /// Append a structured audit log entry.
    LogEntry,
    /// Query audit events.
    GetEvents,
    /// Open a writer for session recording chunks.
    GetChunkWriter,
    /// Open a reader for session recording chunks.
    GetChunkReader,

    // Servers
    /// Announce or refresh a node heartbeat.
    UpsertServer,
    /// List registered nodes.
    GetServers,
    /// List auth servers.
    GetAuthServers,

    // Passwords and web sessions
    /// Set a user's password.
    UpsertPassword,
    /// Verify a user's password.
    CheckPassword,
    /// Sign in with user credentials.
    SignIn,
    /// Create a web session.
    CreateWebSession,
    /// Read a web session.
    GetWebSession,
    /// List web session keys.
    GetWebSessionsKeys,
    /// Delete a web session.
    DeleteWebSession,

    // Users and keys
    /// List users.
    GetUsers,
    /// Delete a user.
    DeleteUser,
    /// Create or update a user.
    UpsertUser,
    /// Add or replace a user's public key.
    UpsertUserKey,
    /// Read a user's public keys.
    GetUserKeys,
    /// Remove a user's public key.
    DeleteUserKey,

    // Key and certificate generation
    /// Generate a key pair.
    GenerateKeyPair,
    /// Sign a host certificate.
    GenerateHostCert,
    /// Sign a user certificate.
    GenerateUserCert,

    // Seal keys
    /// Generate a seal key.
    GenerateSealKey,
    /// List seal keys.
    #[serde(rename = "GetSeakKeys")]
    GetSealKeys,
    /// Read a seal key.
    GetSealKey,
    /// Delete a seal key.
    DeleteSealKey,
    /// Import a seal key.
    AddSealKey,

    // Signup
    /// Issue a signup token.
    CreateSignupToken,
    /// Read the data behind a signup token.
    GetSignupTokenData,
    /// Create a user by redeeming a signup token.
    CreateUserWithToken,
}

/// Every action, in declaration order.
const ALL_ACTIONS: [Action; 46] = [
    Action::GetSessions,
    Action::GetSession,
    Action::DeleteSession,
    Action::UpsertSession,
    Action::UpsertParty,
    Action::UpsertCertAuthority,
    Action::GetCertAuthorities,
    Action::GetLocalDomain,
    Action::DeleteCertAuthority,
    Action::ResetHostCertificateAuthority,
    Action::ResetUserCertificateAuthority,
    Action::GenerateToken,
    Action::RegisterUsingToken,
    Action::RegisterNewAuthServer,
    Action::Log,
    Action::LogEntry,
    Action::GetEvents,
    Action::GetChunkWriter,
    Action::GetChunkReader,
    Action::UpsertServer,
    Action::GetServers,
    Action::GetAuthServers,
    Action::UpsertPassword,
    Action::CheckPassword,
    Action::SignIn,
    Action::CreateWebSession,
    Action::GetWebSession,
    Action::GetWebSessionsKeys,
    Action::DeleteWebSession,
    Action::GetUsers,
    Action::DeleteUser,
    Action::UpsertUser,
    Action::UpsertUserKey,
    Action::GetUserKeys,
    Action::DeleteUserKey,
    Action::GenerateKeyPair,
    Action::GenerateHostCert,
    Action::GenerateUserCert,
    Action::GenerateSealKey,
    Action::GetSealKeys,
    Action::GetSealKey,
    Action::DeleteSealKey,
    Action::AddSealKey,
    Action::CreateSignupToken,
    Action::GetSignupTokenData,
    Action::CreateUserWithToken,
];

impl Action {
    /// Get the wire name of the action.
    ///
    /// # Returns
    ///
    /// The name every gating component uses for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetSessions => "GetSessions",
            Action::GetSession => "GetSession",
            Action::DeleteSession => "DeleteSession",
            Action::UpsertSession => "UpsertSession",
            Action::UpsertParty => "UpsertParty",
            Action::UpsertCertAuthority => "UpsertCertAuthority",
            Action::GetCertAuthorities => "GetCertAuthorities",
            Action::GetLocalDomain => "GetLocalDomain",
            Action::DeleteCertAuthority => "DeleteCertAuthority",
            Action::ResetHostCertificateAuthority => "ResetHostCertificateAuthority",
            Action::ResetUserCertificateAuthority => "ResetUserCertificateAuthority",
            Action::GenerateToken => "GenerateToken",
            Action::RegisterUsingToken => "RegisterUsingToken",
            Action::RegisterNewAuthServer => "RegisterNewAuthServer",
            Action::Log => "Log",
            Action::LogEntry => "LogEntry",
            Action::GetEvents => "GetEvents",
            Action::GetChunkWriter => "GetChunkWriter",
            Action::GetChunkReader => "GetChunkReader",
            Action::UpsertServer => "UpsertServer",
            Action::GetServers => "GetServers",
            Action::GetAuthServers => "GetAuthServers",
            Action::UpsertPassword => "UpsertPassword",
            Action::CheckPassword => "CheckPassword",
            Action::SignIn => "SignIn",
            Action::CreateWebSession => "CreateWebSession",
            Action::GetWebSession => "GetWebSession",
            Action::GetWebSessionsKeys => "GetWebSessionsKeys",
            Action::DeleteWebSession => "DeleteWebSession",
            Action::GetUsers => "GetUsers",
            Action::DeleteUser => "DeleteUser",
            Action::UpsertUser => "UpsertUser",
            Action::UpsertUserKey => "UpsertUserKey",
            Action::GetUserKeys => "GetUserKeys",
            Action::DeleteUserKey => "DeleteUserKey",
            Action::GenerateKeyPair => "GenerateKeyPair",
            Action::GenerateHostCert => "GenerateHostCert",
            Action::GenerateUserCert => "GenerateUserCert",
            Action::GenerateSealKey => "GenerateSealKey",
            // Historical wire name, kept for compatibility with existing callers.
            Action::GetSealKeys => "GetSeakKeys",
            Action::GetSealKey => "GetSealKey",
            Action::DeleteSealKey => "DeleteSealKey",
            Action::AddSealKey => "AddSealKey",
            Action::CreateSignupToken => "CreateSignupToken",
            Action::GetSignupTokenData => "GetSignupTokenData",
            Action::CreateUserWithToken => "CreateUserWithToken",
        }
    }

    /// Parse an action from its wire name.
    ///
    /// Matching is exact: wire names are a contract, so near-misses such as
    /// `"signin"` are rejected rather than guessed at.
    ///
    /// # Arguments
    ///
    /// * `s` - Wire name to parse
    ///
    /// # Returns
    ///
    /// `Some(Action)` if `s` is a known wire name, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use gatehouse_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("SignIn"), Some(Action::SignIn));
    /// assert_eq!(Action::parse("GetSeakKeys"), Some(Action::GetSealKeys));
    /// assert_eq!(Action::parse("signin"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GetSessions" => Some(Action::GetSessions),
            "GetSession" => Some(Action::GetSession),
            "DeleteSession" => Some(Action::DeleteSession),
            "UpsertSession" => Some(Action::UpsertSession),
            "UpsertParty" => Some(Action::UpsertParty),
            "UpsertCertAuthority" => Some(Action::UpsertCertAuthority),
            "GetCertAuthorities" => Some(Action::GetCertAuthorities),
            "GetLocalDomain" => Some(Action::GetLocalDomain),
            "DeleteCertAuthority" => Some(Action::DeleteCertAuthority),
            "ResetHostCertificateAuthority" => Some(Action::ResetHostCertificateAuthority),
            "ResetUserCertificateAuthority" => Some(Action::ResetUserCertificateAuthority),
            "GenerateToken" => Some(Action::GenerateToken),
            "RegisterUsingToken" => Some(Action::RegisterUsingToken),
            "RegisterNewAuthServer" => Some(Action::RegisterNewAuthServer),
            "Log" => Some(Action::Log),
            "LogEntry" => Some(Action::LogEntry),
            "GetEvents" => Some(Action::GetEvents),
            "GetChunkWriter" => Some(Action::GetChunkWriter),
            "GetChunkReader" => Some(Action::GetChunkReader),
            "UpsertServer" => Some(Action::UpsertServer),
            "GetServers" => Some(Action::GetServers),
            "GetAuthServers" => Some(Action::GetAuthServers),
            "UpsertPassword" => Some(Action::UpsertPassword),
            "CheckPassword" => Some(Action::CheckPassword),
            "SignIn" => Some(Action::SignIn),
            "CreateWebSession" => Some(Action::CreateWebSession),
            "GetWebSession" => Some(Action::GetWebSession),
            "GetWebSessionsKeys" => Some(Action::GetWebSessionsKeys),
            "DeleteWebSession" => Some(Action::DeleteWebSession),
            "GetUsers" => Some(Action::GetUsers),
            "DeleteUser" => Some(Action::DeleteUser),
            "UpsertUser" => Some(Action::UpsertUser),
            "UpsertUserKey" => Some(Action::UpsertUserKey),
            "GetUserKeys" => Some(Action::GetUserKeys),
            "DeleteUserKey" => Some(Action::DeleteUserKey),
            "GenerateKeyPair" => Some(Action::GenerateKeyPair),
            "GenerateHostCert" => Some(Action::GenerateHostCert),
            "GenerateUserCert" => Some(Action::GenerateUserCert),
            "GenerateSealKey" => Some(Action::GenerateSealKey),
            "GetSeakKeys" => Some(Action::GetSealKeys),
            "GetSealKey" => Some(Action::GetSealKey),
            "DeleteSealKey" => Some(Action::DeleteSealKey),
            "AddSealKey" => Some(Action::AddSealKey),
            "CreateSignupToken" => Some(Action::CreateSignupToken),
            "GetSignupTokenData" => Some(Action::GetSignupTokenData),
            "CreateUserWithToken" => Some(Action::CreateUserWithToken),
            _ => None,
        }
    }

    /// Get all actions.
    ///
    /// # Returns
    ///
    /// Every action in the vocabulary, in declaration order.
    pub fn all() -> &'static [Action] {
        &ALL_ACTIONS
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownAction(s.to_string()))
    }
}
