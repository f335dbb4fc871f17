use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::OrderStatus;

// Persisted field names keep the storefront's original camelCase wire format.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    /// Stored lowercased; uniqueness is case-insensitive.
    pub email: String,
    /// Argon2 PHC string. The password itself is never persisted.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub addresses: Vec<Address>,
    pub default_address_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub street: String,
    pub barangay: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// One line of the cart. `id` is the composite variant id (base product id
/// plus the selected color and size), so a (product, color, size) triple maps
/// to at most one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Cart snapshot copied at checkout; later cart edits never reach it.
    pub items: Vec<CartItem>,
    /// Computed once at creation and never recomputed.
    pub total: Decimal,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    /// Append-only; entries are never rewritten or truncated.
    pub status_history: Vec<StatusEntry>,
    pub shipping_address: Option<Address>,
}
