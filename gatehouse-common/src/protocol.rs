//! Payload definitions for the Gatehouse service API
//!
//! All payloads are JSON request/response bodies. Passwords travel in
//! plaintext inside request bodies; TLS on the transport keeps them
//! secure in transit, and the service hashes them before storing.

use serde::{Deserialize, Serialize};

/// A user account as returned by the service
///
/// This is the record fetched when the console opens an existing user
/// for editing. The console maps it field by field into its draft
/// state rather than merging it structurally, so additions to this
/// struct never leak into the form unnoticed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    /// The user's default/home group, which scopes server-permission
    /// edits for this user
    pub group_id: i64,
}

/// Identifiers returned after creating or updating a user
///
/// Both follow-up calls of the save sequence depend on these: server
/// permissions are scoped by `group_id`, memberships by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedUser {
    pub id: i64,
    pub group_id: i64,
}

/// Request body for creating or updating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// One server-permission entry in a group's access list
///
/// The server-permission picker owns the shape of the selection; the
/// console stores and forwards it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAccess {
    pub server_id: i64,
    /// Claims granted on this server (e.g. scopes or capability names)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<String>,
}
