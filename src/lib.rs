//! # Coffeeshop
//!
//! Client for the coffeeshop backend's staff-permission API.
//!
//! A manager signs in elsewhere and hands this crate a bearer token. The crate
//! works out which staff collection the token may manage, loads its users,
//! lets the caller flip individual permission flags and PATCHes each user
//! back when asked.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # `coffeeshop` command-line front end
//! ├── modules/
//! │   ├── users/       # UserDirectory (HTTP) and UserStore (in memory)
//! │   └── permissions/ # PermissionEditor
//! └── utils/           # ClientError
//! ```
//!
//! ## Collections
//!
//! | Collection | Capability | Endpoints |
//! |------------|------------|-----------|
//! | managers | `manage:managers` | `GET /managers`, `PATCH /managers/{id}` |
//! | baristas | `manage:baristas` | `GET /baristas`, `PATCH /baristas/{id}` |
//!
//! When a token grants both, `managers` is used. When it grants neither,
//! loads and saves are skipped without sending anything.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use coffeeshop::{PermissionEditor, UserDirectory};
//! use coffeeshop_auth::TokenAuthorizer;
//! use coffeeshop_config::ApiConfig;
//!
//! let auth = Arc::new(TokenAuthorizer::from_jwt(token)?);
//! let directory = UserDirectory::new(&ApiConfig::from_env(), auth)?;
//! let (mut editor, _loaded) = PermissionEditor::open(directory).await;
//!
//! editor.set_permission(7.into(), 0, true)?;
//! editor.save(7.into()).await?;
//! ```

pub mod cli;
pub mod modules;
pub mod utils;

pub use modules::permissions::PermissionEditor;
pub use modules::users::{LoadOutcome, PersistOutcome, UserDirectory, UserStore};
pub use utils::errors::ClientError;

// Re-export workspace crates for convenience
pub use coffeeshop_auth;
pub use coffeeshop_config;
pub use coffeeshop_core;
pub use coffeeshop_models;
