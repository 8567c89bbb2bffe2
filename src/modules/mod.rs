pub mod permissions;
pub mod users;
