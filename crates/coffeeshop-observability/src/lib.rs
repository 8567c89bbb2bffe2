//! Coffeeshop Observability
//!
//! Console logging for the coffeeshop client.
//!
//! All crates log through `tracing` macros; this crate only installs the
//! subscriber that prints them.
//!
//! # Examples
//!
//! ```no_run
//! use coffeeshop_observability::init_logging;
//!
//! init_logging();
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{LogFormat, LoggingConfig, init_logging, init_logging_with};
