use std::fmt;

use uuid::Uuid;

/// Typed addresses for everything the crate persists. Collections that belong
/// to one shopper carry the owning user id; the cart is deliberately global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    /// Registry of every signed-up user.
    Users,
    /// Denormalized copy of the logged-in user.
    Session,
    Cart,
    Favorites(Uuid),
    Orders(Uuid),
    /// Location to return to after login, consumed once.
    RedirectTarget,
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKey::Users => f.write_str("users"),
            StorageKey::Session => f.write_str("session"),
            StorageKey::Cart => f.write_str("cart"),
            StorageKey::Favorites(user_id) => write!(f, "favorites:{user_id}"),
            StorageKey::Orders(user_id) => write!(f, "orders:{user_id}"),
            StorageKey::RedirectTarget => f.write_str("redirect"),
        }
    }
}
