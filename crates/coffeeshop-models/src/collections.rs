//! Role-scoped backend collections.
//!
//! The backend exposes staff as two structurally identical REST resources,
//! each gated behind its own `manage:*` permission.

use coffeeshop_core::permissions;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::UserId;

/// One of the backend's staff collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Managers,
    Baristas,
}

impl Collection {
    /// Collections in the order they are checked. The first one the caller is
    /// authorized for is the one used.
    pub const PRIORITY: [Collection; 2] = [Collection::Managers, Collection::Baristas];

    /// Path segment of the collection, e.g. `managers`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Collection::Managers => "managers",
            Collection::Baristas => "baristas",
        }
    }

    /// Permission that unlocks this collection.
    pub const fn capability(self) -> &'static str {
        match self {
            Collection::Managers => permissions::MANAGE_MANAGERS,
            Collection::Baristas => permissions::MANAGE_BARISTAS,
        }
    }

    /// Path of a single user inside this collection, e.g. `managers/7`.
    pub fn item_path(self, id: UserId) -> String {
        format!("{}/{}", self.as_str(), id)
    }

    /// Pick the first collection in [`Collection::PRIORITY`] for which `can`
    /// grants the capability.
    ///
    /// Returns `None` when neither is granted.
    pub fn resolve<F>(mut can: F) -> Option<Collection>
    where
        F: FnMut(&str) -> bool,
    {
        Self::PRIORITY
            .into_iter()
            .find(|collection| can(collection.capability()))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
