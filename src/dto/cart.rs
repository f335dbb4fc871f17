use rust_decimal::Decimal;
use serde::Deserialize;

/// Variant-resolved product payload for the cart. `id` is the composite
/// variant id built by [`crate::catalog::variant_id`].
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartRequest {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub color: Option<String>,
    pub size: Option<String>,
}
