//! Access-token claims read by the client.

use serde::{Deserialize, Serialize};

/// The part of the backend's access-token payload the client cares about.
///
/// Tokens are issued by an external identity provider and carry many more
/// claims; anything not listed here is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, usually the identity provider's user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Permission names granted to the bearer
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Token expiration timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_minimal() {
        let claims: Claims = serde_json::from_str("{}").unwrap();
        assert!(claims.permissions.is_empty());
        assert!(claims.sub.is_none());
    }

    #[test]
    fn test_claims_ignore_foreign_fields() {
        let json = r#"{"iss":"https://idp.example/","aud":"coffeeshop","sub":"auth0|1","permissions":["manage:baristas"],"exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("auth0|1"));
        assert_eq!(claims.exp, Some(9999999999));
        assert!(claims.has_permission("manage:baristas"));
        assert!(!claims.has_permission("manage:managers"));
    }

    #[test]
    fn test_has_permission_is_exact() {
        let claims = Claims {
            permissions: vec!["manage:managers".to_string()],
            ..Claims::default()
        };
        assert!(!claims.has_permission("manage"));
        assert!(!claims.has_permission("manage:managers "));
    }
}
