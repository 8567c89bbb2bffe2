use coffeeshop_auth::AuthError;
use coffeeshop_models::{Collection, UserId};
use reqwest::StatusCode;

/// Every failure the client can report.
///
/// Being denied a collection is not in here: that is a skipped operation, not
/// an error.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid API server url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Builder(#[source] reqwest::Error),

    #[error("request to {collection} failed: {source}")]
    Http {
        collection: Collection,
        #[source]
        source: reqwest::Error,
    },

    #[error("{collection} responded with {status}: {body}")]
    Status {
        collection: Collection,
        status: StatusCode,
        body: String,
    },

    #[error("could not decode {collection} response: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("user {0} is not loaded")]
    UserNotFound(UserId),

    #[error("user {user_id} has no permission at index {index}")]
    PermissionNotFound { user_id: UserId, index: usize },

    #[error(transparent)]
    InvalidToken(#[from] AuthError),
}

impl ClientError {
    /// Whether the error came from a local store lookup rather than the network.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            ClientError::UserNotFound(_) | ClientError::PermissionNotFound { .. }
        )
    }

    /// HTTP status returned by the backend, if the error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http { source, .. } => source.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors() {
        assert!(ClientError::UserNotFound(UserId::new(1)).is_lookup());
        assert!(
            ClientError::PermissionNotFound {
                user_id: UserId::new(1),
                index: 4
            }
            .is_lookup()
        );
        let status = ClientError::Status {
            collection: Collection::Managers,
            status: StatusCode::FORBIDDEN,
            body: String::new(),
        };
        assert!(!status.is_lookup());
        assert_eq!(status.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn test_messages() {
        let err = ClientError::PermissionNotFound {
            user_id: UserId::new(7),
            index: 3,
        };
        assert_eq!(err.to_string(), "user 7 has no permission at index 3");

        let err = ClientError::Status {
            collection: Collection::Baristas,
            status: StatusCode::UNAUTHORIZED,
            body: "{\"success\":false}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "baristas responded with 401 Unauthorized: {\"success\":false}"
        );
    }
}
