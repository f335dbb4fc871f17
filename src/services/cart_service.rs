use chrono::Utc;
use rust_decimal::Decimal;

use crate::audit::log_audit;
use crate::dto::cart::AddToCartRequest;
use crate::error::AppResult;
use crate::keys::StorageKey;
use crate::models::CartItem;
use crate::storage;
use crate::store::Store;

// The cart is global to the store, not namespaced by user: a shopper can fill
// it before logging in and only checkout requires a session.

pub fn list_cart(store: &impl Store) -> AppResult<Vec<CartItem>> {
    storage::read_list(store, &StorageKey::Cart)
}

pub fn save_cart(store: &mut impl Store, cart: &[CartItem]) -> AppResult<()> {
    storage::write(store, &StorageKey::Cart, &cart)
}

/// Add one unit of a variant. An existing (id, color, size) line has its
/// quantity bumped; anything else becomes a new line of quantity 1.
pub fn add_to_cart(store: &mut impl Store, payload: AddToCartRequest) -> AppResult<Vec<CartItem>> {
    let mut cart = list_cart(store)?;

    let existing = cart.iter().position(|item| {
        item.id == payload.id && item.color == payload.color && item.size == payload.size
    });

    match existing {
        Some(index) => cart[index].quantity += 1,
        None => cart.push(CartItem {
            id: payload.id.clone(),
            name: payload.name,
            price: payload.price,
            image: payload.image,
            color: payload.color,
            size: payload.size,
            quantity: 1,
            added_at: Utc::now(),
        }),
    }

    save_cart(store, &cart)?;
    log_audit(
        None,
        "cart_add",
        Some("cart"),
        Some(serde_json::json!({ "product_id": payload.id })),
    );
    Ok(cart)
}

/// Remove the line at `index`. An out-of-range index is a no-op; callers are
/// expected to pre-validate.
pub fn remove_from_cart(store: &mut impl Store, index: usize) -> AppResult<Vec<CartItem>> {
    let mut cart = list_cart(store)?;
    if index < cart.len() {
        let removed = cart.remove(index);
        log_audit(
            None,
            "cart_remove",
            Some("cart"),
            Some(serde_json::json!({ "product_id": removed.id })),
        );
    }
    save_cart(store, &cart)?;
    Ok(cart)
}

/// Set the quantity of the line at `index`; zero removes the line. An
/// out-of-range index is a no-op.
pub fn update_quantity(
    store: &mut impl Store,
    index: usize,
    quantity: u32,
) -> AppResult<Vec<CartItem>> {
    if quantity == 0 {
        return remove_from_cart(store, index);
    }
    let mut cart = list_cart(store)?;
    if let Some(item) = cart.get_mut(index) {
        item.quantity = quantity;
        save_cart(store, &cart)?;
    }
    Ok(cart)
}

/// Drop the cart key entirely.
pub fn clear_cart(store: &mut impl Store) -> AppResult<()> {
    storage::clear(store, &StorageKey::Cart)
}

pub fn cart_total(cart: &[CartItem]) -> Decimal {
    cart.iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum()
}

pub fn item_count(cart: &[CartItem]) -> u32 {
    cart.iter().map(|item| item.quantity).sum()
}
