//! User models and the backend's response envelopes.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A staff member as the backend returns it.
///
/// `permissions` is positional: the index of an entry is how callers address
/// it, so the order must survive a load/save round-trip untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub permissions: Vec<PermissionEntry>,
}

impl User {
    /// Get the entry at `index`, if there is one.
    pub fn permission(&self, index: usize) -> Option<&PermissionEntry> {
        self.permissions.get(index)
    }

    /// Get a mutable handle on the entry at `index`, if there is one.
    pub fn permission_mut(&mut self, index: usize) -> Option<&mut PermissionEntry> {
        self.permissions.get_mut(index)
    }
}

/// A named capability flag attached to a user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    /// Human-readable capability label, e.g. `make_drink`.
    pub name: String,
    /// Whether the capability is currently granted.
    pub valid: bool,
}

impl PermissionEntry {
    pub fn new(name: impl Into<String>, valid: bool) -> Self {
        Self {
            name: name.into(),
            valid,
        }
    }
}

/// Body of `GET /managers` and `GET /baristas`.
///
/// Fields the client does not use are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UsersResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub users: Vec<User>,
}
