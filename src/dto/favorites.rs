use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRequest {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}
