//! # Gatehouse Roles
//!
//! This crate provides the role vocabulary for the gatehouse auth service.
//!
//! ## Overview
//!
//! A role names a class of authenticated actor. The identity layer resolves a
//! caller to a role; the permission checker in `gatehouse-rbac` then decides
//! which actions that role may perform.
//!
//! Built-in roles:
//! - **Auth**: The auth server itself
//! - **User**: Ordinary user
//! - **Web**: Web proxy acting for browser sessions
//! - **Node**: Registered node/agent
//! - **Admin**: Administrator, authorized for everything
//! - **ProvisionToken**: Bearer of a provisioning token
//! - **Signup**: Actor in the signup flow
//! - **HangoutRemoteUser**: Ephemeral remote peer in a hangout session
//!
//! ## Usage
//!
//! ```rust
//! use gatehouse_roles::Role;
//!
//! let role = Role::parse("node").unwrap();
//! assert_eq!(role, Role::NODE);
//! assert!(Role::standard_roles().contains(&role));
//! assert!(!Role::hangout_roles().contains(&role));
//! ```

pub mod roles;

pub use roles::Role;
