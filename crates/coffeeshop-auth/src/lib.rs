//! # Coffeeshop Auth
//!
//! Authorization providers for the coffeeshop client.
//!
//! The client never acquires tokens itself. It is handed a bearer token by
//! whoever performed the login and only needs two answers from it: "may I use
//! this capability?" and "what do I put in the `Authorization` header?".
//!
//! - [`authorizer`]: the [`Authorizer`] trait and its implementations
//! - [`claims`]: the slice of the access-token payload the client reads
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_auth::{Authorizer, TokenAuthorizer};
//!
//! let auth = TokenAuthorizer::from_jwt(token)?;
//! if auth.can("manage:baristas") {
//!     // ...
//! }
//! ```

pub mod authorizer;
pub mod claims;

pub use authorizer::{AuthError, Authorizer, StaticAuthorizer, TokenAuthorizer};
pub use claims::Claims;
