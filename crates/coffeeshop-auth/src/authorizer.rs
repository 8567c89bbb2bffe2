//! Authorization providers.
//!
//! [`Authorizer`] is the seam between the client and whatever holds the
//! user's session. Two implementations ship with the crate:
//!
//! - [`StaticAuthorizer`]: a token plus an explicit permission list
//! - [`TokenAuthorizer`]: reads the permission list out of a JWT payload

use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::claims::Claims;

/// Answers capability checks and supplies the bearer token for requests.
pub trait Authorizer: Send + Sync {
    /// Whether the current session grants `capability`.
    fn can(&self, capability: &str) -> bool;

    /// Token to send as `Authorization: Bearer <token>`.
    fn current_token(&self) -> String;
}

/// Error type for authorization providers.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid access token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Authorizer with a fixed token and a fixed set of permissions.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorizer {
    token: String,
    permissions: Vec<String>,
}

impl StaticAuthorizer {
    pub fn new<I, S>(token: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token: token.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Authorizer for StaticAuthorizer {
    fn can(&self, capability: &str) -> bool {
        self.permissions.iter().any(|p| p == capability)
    }

    fn current_token(&self) -> String {
        self.token.clone()
    }
}

/// Authorizer backed by the `permissions` claim of a JWT access token.
///
/// The payload is decoded without checking the signature: the client has no
/// key and only uses the claims to decide which requests to attempt. The
/// backend verifies every request it receives.
#[derive(Debug, Clone)]
pub struct TokenAuthorizer {
    token: String,
    claims: Claims,
}

impl TokenAuthorizer {
    /// Decode `token` and keep its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] if the token is not a well-formed
    /// JWT or its payload is not a JSON object.
    pub fn from_jwt(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();

        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(&token, &DecodingKey::from_secret(&[]), &validation)?;

        Ok(Self {
            token,
            claims: data.claims,
        })
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

impl Authorizer for TokenAuthorizer {
    fn can(&self, capability: &str) -> bool {
        self.claims.has_permission(capability)
    }

    fn current_token(&self) -> String {
        self.token.clone()
    }
}
