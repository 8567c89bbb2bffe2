//! Permission constants for the coffeeshop backend.
//!
//! The backend embeds these strings in the `permissions` claim of its access
//! tokens. Using the constants instead of literals keeps the client and the
//! tests agreeing on the exact spelling.

// =============================================================================
// Staff management permissions
// =============================================================================

/// Permission to list and edit users in the `managers` collection
pub const MANAGE_MANAGERS: &str = "manage:managers";
/// Permission to list and edit users in the `baristas` collection
pub const MANAGE_BARISTAS: &str = "manage:baristas";
