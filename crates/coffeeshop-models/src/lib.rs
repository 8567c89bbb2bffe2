//! # Coffeeshop Models
//!
//! Domain models and wire types for the coffeeshop client.
//!
//! # Modules
//!
//! - [`collections`]: the role-scoped backend collections and their priority
//! - [`ids`]: strongly-typed identifiers
//! - [`users`]: users, their permission entries and the response envelopes
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_models::{Collection, PermissionEntry, User, UserId};
//!
//! let user = User {
//!     id: UserId::new(7),
//!     name: "Liam".into(),
//!     permissions: vec![PermissionEntry::new("make_drink", false)],
//! };
//! assert_eq!(Collection::Managers.item_path(user.id), "managers/7");
//! ```

pub mod collections;
pub mod ids;
pub mod users;

pub use collections::Collection;
pub use ids::UserId;
pub use users::{PermissionEntry, User, UsersResponse};
