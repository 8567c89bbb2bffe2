//! Access to the backend's staff collections.
//!
//! Both operations resolve the target collection the same way (see
//! [`UserDirectory::resolve_collection`]), so a load and a save issued under
//! the same authorization always hit the same resource.

use std::fmt;
use std::sync::Arc;

use coffeeshop_auth::Authorizer;
use coffeeshop_config::{ApiConfig, normalize_base_url};
use coffeeshop_models::{Collection, User, UsersResponse};
use reqwest::{Response, Url};
use tracing::{debug, error, info, instrument, warn};

use super::store::UserStore;
use crate::utils::errors::ClientError;

/// What a [`UserDirectory::load`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The caller may not manage any collection; no request was sent.
    Skipped,
    /// `count` users from `collection` were written into the store.
    Loaded { collection: Collection, count: usize },
}

/// What a [`UserDirectory::persist`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The caller may not manage any collection; no request was sent.
    Skipped,
    /// The backend accepted the PATCH on `collection`.
    Saved { collection: Collection },
}

/// Client for the `managers` and `baristas` collections.
#[derive(Clone)]
pub struct UserDirectory {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<dyn Authorizer>,
}

impl fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDirectory")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl UserDirectory {
    /// Creates a directory talking to `config.api_server_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if the base URL does not parse, or
    /// `ClientError::Builder` if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig, auth: Arc<dyn Authorizer>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Builder)?;

        Self::with_client(http, config, auth)
    }

    /// Same as [`UserDirectory::new`] but reuses an existing HTTP client.
    ///
    /// The base URL must be an absolute `http` or `https` URL; trailing slashes
    /// are dropped.
    pub fn with_client(
        http: reqwest::Client,
        config: &ApiConfig,
        auth: Arc<dyn Authorizer>,
    ) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(&config.api_server_url);
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.clone(),
            reason,
        };

        let parsed = Url::parse(&base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
        }
        if parsed.cannot_be_a_base() {
            return Err(invalid("url cannot be used as a base".to_string()));
        }

        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// The collection this caller operates on, if any.
    ///
    /// `managers` wins over `baristas` when both are granted.
    pub fn resolve_collection(&self) -> Option<Collection> {
        Collection::resolve(|capability| self.auth.can(capability))
    }

    /// Fetches the authorized collection and upserts its users into `store`.
    ///
    /// On any failure the store is left untouched.
    #[instrument(skip_all)]
    pub async fn load(&self, store: &mut UserStore) -> Result<LoadOutcome, ClientError> {
        let Some(collection) = self.resolve_collection() else {
            debug!("Not authorized for any staff collection, skipping load");
            return Ok(LoadOutcome::Skipped);
        };

        let url = format!("{}/{}", self.base_url, collection.as_str());
        debug!(collection = %collection, url = %url, "Fetching users");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.auth.current_token())
            .send()
            .await
            .map_err(|source| transport_error(collection, source))?;

        let body = read_success_body(collection, response).await?;
        let parsed: UsersResponse = serde_json::from_str(&body).map_err(|source| {
            error!(collection = %collection, error = %source, "Malformed users response");
            ClientError::Decode { collection, source }
        })?;

        let count = store.upsert(parsed.users);
        info!(collection = %collection, count, "Users loaded");

        Ok(LoadOutcome::Loaded { collection, count })
    }

    /// PATCHes the full `user` to the authorized collection.
    ///
    /// Nothing is retried and the caller's copy is not rolled back on failure.
    #[instrument(skip_all, fields(user_id = %user.id))]
    pub async fn persist(&self, user: &User) -> Result<PersistOutcome, ClientError> {
        let Some(collection) = self.resolve_collection() else {
            debug!("Not authorized for any staff collection, skipping save");
            return Ok(PersistOutcome::Skipped);
        };

        let url = format!("{}/{}", self.base_url, collection.item_path(user.id));
        debug!(collection = %collection, url = %url, "Saving user");

        let response = self
            .http
            .patch(&url)
            .bearer_auth(self.auth.current_token())
            .json(user)
            .send()
            .await
            .map_err(|source| transport_error(collection, source))?;

        let body = read_success_body(collection, response).await?;
        info!(collection = %collection, response = %body, "User saved");

        Ok(PersistOutcome::Saved { collection })
    }
}

fn transport_error(collection: Collection, source: reqwest::Error) -> ClientError {
    error!(collection = %collection, error = %source, "Request failed");
    ClientError::Http { collection, source }
}

async fn read_success_body(
    collection: Collection,
    response: Response,
) -> Result<String, ClientError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| transport_error(collection, source))?;

    if !status.is_success() {
        warn!(
            collection = %collection,
            status = %status.as_u16(),
            body = %body,
            "Backend rejected request"
        );
        return Err(ClientError::Status {
            collection,
            status,
            body,
        });
    }

    Ok(body)
}
