//! # Coffeeshop Core
//!
//! Foundational constants shared by every coffeeshop crate.
//!
//! - [`permissions`]: capability names as they appear in the backend's
//!   access tokens
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_core::permissions;
//!
//! if authorizer.can(permissions::MANAGE_MANAGERS) {
//!     // operate on the managers collection
//! }
//! ```

pub mod permissions;
