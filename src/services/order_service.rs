use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::audit::log_audit;
use crate::dto::orders::CheckoutRequest;
use crate::error::{AppError, AppResult};
use crate::keys::StorageKey;
use crate::models::{Address, CartItem, Order, StatusEntry};
use crate::services::{account_service, cart_service};
use crate::session::SessionContext;
use crate::status::OrderStatus;
use crate::storage;
use crate::store::Store;

/// Orders are kept most-recent-first.
pub fn list_orders(store: &impl Store, session: &SessionContext) -> AppResult<Vec<Order>> {
    storage::read_list(store, &StorageKey::Orders(session.user_id))
}

pub fn save_orders(
    store: &mut impl Store,
    session: &SessionContext,
    orders: &[Order],
) -> AppResult<()> {
    storage::write(store, &StorageKey::Orders(session.user_id), &orders)
}

/// Snapshot `items` into a new pending order, prepend it to the shopper's
/// order list, and clear the cart. The total is frozen here and never
/// recomputed.
pub fn create_order(
    store: &mut impl Store,
    session: &SessionContext,
    items: Vec<CartItem>,
    total: Decimal,
    shipping_address: Option<Address>,
) -> AppResult<Order> {
    let mut orders = list_orders(store, session)?;

    let now = Utc::now();
    let status = OrderStatus::Pending;
    let order = Order {
        id: build_order_number(),
        items,
        total,
        status,
        order_date: now,
        status_history: vec![StatusEntry {
            status,
            date: now,
            message: status.message().to_string(),
        }],
        shipping_address,
    };

    orders.insert(0, order.clone());
    save_orders(store, session, &orders)?;
    cart_service::clear_cart(store)?;

    log_audit(
        Some(session.user_id),
        "order_create",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "total": order.total })),
    );
    Ok(order)
}

/// Full checkout: persist the shipping address on the account, price the live
/// cart, and turn it into an order carrying the address snapshot.
pub fn checkout(
    store: &mut impl Store,
    session: &SessionContext,
    payload: CheckoutRequest,
) -> AppResult<Order> {
    let address = account_service::add_address(store, session, payload.address)?;

    let cart = cart_service::list_cart(store)?;
    if cart.is_empty() {
        return Err(AppError::Validation("Your cart is empty".to_string()));
    }
    let total = cart_service::cart_total(&cart);

    create_order(store, session, cart, total, address)
}

/// Set an order's status and append the matching history entry. An unknown
/// order id leaves the list untouched; the (possibly unchanged) full list is
/// returned either way.
pub fn update_status(
    store: &mut impl Store,
    session: &SessionContext,
    order_id: &str,
    new_status: OrderStatus,
) -> AppResult<Vec<Order>> {
    let mut orders = list_orders(store, session)?;

    let mut found = false;
    if let Some(order) = orders.iter_mut().find(|order| order.id == order_id) {
        order.status = new_status;
        order.status_history.push(StatusEntry {
            status: new_status,
            date: Utc::now(),
            message: new_status.message().to_string(),
        });
        found = true;
    }

    if found {
        save_orders(store, session, &orders)?;
        log_audit(
            Some(session.user_id),
            "order_status_update",
            Some("orders"),
            Some(serde_json::json!({ "order_id": order_id, "status": new_status.as_str() })),
        );
    }
    Ok(orders)
}

/// Cancel an order that has not shipped yet. Returns `None` without touching
/// anything when the order is unknown or already past the point of no return.
pub fn cancel_order(
    store: &mut impl Store,
    session: &SessionContext,
    order_id: &str,
) -> AppResult<Option<Vec<Order>>> {
    let orders = list_orders(store, session)?;
    let Some(order) = orders.iter().find(|order| order.id == order_id) else {
        return Ok(None);
    };
    if !order.status.can_cancel() {
        return Ok(None);
    }

    let updated = update_status(store, session, order_id, OrderStatus::Cancelled)?;
    Ok(Some(updated))
}

/// Step an order to its forward-chain successor. Delivered and cancelled
/// orders are left untouched.
pub fn advance_order(
    store: &mut impl Store,
    session: &SessionContext,
    order_id: &str,
) -> AppResult<Vec<Order>> {
    let orders = list_orders(store, session)?;
    let next = orders
        .iter()
        .find(|order| order.id == order_id)
        .and_then(|order| order.status.next());

    match next {
        Some(status) => update_status(store, session, order_id, status),
        None => Ok(orders),
    }
}

fn build_order_number() -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = Uuid::new_v4().to_string();
    let short = &suffix[..8];
    format!("ORD-{}-{}", date, short)
}
