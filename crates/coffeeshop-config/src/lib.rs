//! # Coffeeshop Config
//!
//! Configuration types for the coffeeshop client.
//!
//! Configuration is read once from environment variables at startup; there is
//! no runtime reconfiguration.
//!
//! - [`api`]: backend location and request settings
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_config::ApiConfig;
//!
//! let config = ApiConfig::from_env();
//! println!("talking to {}", config.api_server_url);
//! ```

pub mod api;

pub use api::{ApiConfig, normalize_base_url};
