pub mod service;
pub mod store;

pub use service::{LoadOutcome, PersistOutcome, UserDirectory};
pub use store::UserStore;
