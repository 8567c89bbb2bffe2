//! Strongly-typed identifiers.
//!
//! The backend numbers users with plain integers; wrapping them keeps a user id
//! from being confused with a permission index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user, unique and stable across sessions.
///
/// Serializes as a bare JSON number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Wrap a raw backend id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw backend id.
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    #[inline]
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    #[inline]
    fn from(id: UserId) -> i64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_user_id_deserializes_from_number() {
        let id: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(id, UserId::new(7));
    }

    #[test]
    fn test_user_id_display_and_debug() {
        let id = UserId::new(3);
        assert_eq!(id.to_string(), "3");
        assert_eq!(format!("{id:?}"), "UserId(3)");
    }

    #[test]
    fn test_user_ids_order_numerically() {
        let mut ids = vec![UserId::new(10), UserId::new(2), UserId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![UserId::new(2), UserId::new(7), UserId::new(10)]);
    }
}
