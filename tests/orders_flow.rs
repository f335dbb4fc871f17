use anyhow::Result;
use rust_decimal::Decimal;
use shopfront_core::{
    catalog,
    dto::{account::AddressForm, auth::SignupRequest, orders::CheckoutRequest},
    services::{auth_service, cart_service, order_service},
    session::SessionContext,
    status::OrderStatus,
    store::{MemoryStore, Store},
};

// Integration flow: signup -> add to cart -> checkout -> fulfilment steps ->
// cancellation rules.
#[test]
fn checkout_and_fulfilment_flow() -> Result<()> {
    let mut store = MemoryStore::new();
    let session = signup_shopper(&mut store, "shopper@example.com")?;

    let product = catalog::ProductInfo {
        id: "P1".to_string(),
        name: "Wireless Headphones".to_string(),
        price: Decimal::new(999, 2),
        image: "images/p1.jpg".to_string(),
    };
    let request = catalog::build_cart_request(&product, Some("Black"), None)?;
    cart_service::add_to_cart(&mut store, request.clone())?;
    cart_service::add_to_cart(&mut store, request)?;

    let order = order_service::checkout(
        &mut store,
        &session,
        CheckoutRequest {
            address: valid_address(),
        },
    )?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.total, Decimal::new(1998, 2));
    assert_eq!(order.status_history.len(), 1);
    assert_eq!(order.status_history[0].message, "Order placed successfully");
    assert!(order.shipping_address.is_some());
    assert!(
        cart_service::list_cart(&store)?.is_empty(),
        "checkout must clear the cart"
    );

    // Each forward step appends exactly one history entry and leaves the
    // earlier entries untouched.
    let mut expected_history = order.status_history.clone();
    for expected in [
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        let orders = order_service::advance_order(&mut store, &session, &order.id)?;
        let current = &orders[0];
        assert_eq!(current.status, expected);
        assert_eq!(current.status_history.len(), expected_history.len() + 1);
        assert_eq!(
            &current.status_history[..expected_history.len()],
            &expected_history[..]
        );
        assert_eq!(current.status_history.last().map(|e| e.status), Some(expected));
        expected_history = current.status_history.clone();
    }

    // Advancing a delivered order changes nothing.
    let orders = order_service::advance_order(&mut store, &session, &order.id)?;
    assert_eq!(orders[0].status, OrderStatus::Delivered);
    assert_eq!(orders[0].status_history.len(), 4);

    // Cancelling after delivery is refused without mutation.
    let before = order_service::list_orders(&store, &session)?;
    assert!(order_service::cancel_order(&mut store, &session, &order.id)?.is_none());
    assert_eq!(order_service::list_orders(&store, &session)?, before);

    Ok(())
}

#[test]
fn cancel_is_only_allowed_before_shipping() -> Result<()> {
    let mut store = MemoryStore::new();
    let session = signup_shopper(&mut store, "shopper@example.com")?;

    let pending = place_order(&mut store, &session, "P1")?;
    let packed = place_order(&mut store, &session, "P2")?;
    order_service::advance_order(&mut store, &session, &packed.id)?;
    let shipped = place_order(&mut store, &session, "P3")?;
    order_service::advance_order(&mut store, &session, &shipped.id)?;
    order_service::advance_order(&mut store, &session, &shipped.id)?;

    let cancelled = order_service::cancel_order(&mut store, &session, &pending.id)?
        .expect("pending orders can be cancelled");
    let cancelled_order = cancelled
        .iter()
        .find(|o| o.id == pending.id)
        .expect("order still listed");
    assert_eq!(cancelled_order.status, OrderStatus::Cancelled);
    assert_eq!(cancelled_order.status_history.len(), 2);
    assert_eq!(
        cancelled_order.status_history[1].message,
        "Order has been cancelled"
    );
    assert_eq!(cancelled_order.status.progress(), 0.0);

    assert!(
        order_service::cancel_order(&mut store, &session, &packed.id)?.is_some(),
        "packed orders can be cancelled"
    );
    assert!(
        order_service::cancel_order(&mut store, &session, &shipped.id)?.is_none(),
        "shipped orders cannot be cancelled"
    );

    Ok(())
}

#[test]
fn unknown_order_id_leaves_the_list_unchanged() -> Result<()> {
    let mut store = MemoryStore::new();
    let session = signup_shopper(&mut store, "shopper@example.com")?;
    place_order(&mut store, &session, "P1")?;

    let before = order_service::list_orders(&store, &session)?;
    let after = order_service::update_status(
        &mut store,
        &session,
        "ORD-00000000-deadbeef",
        OrderStatus::Shipped,
    )?;
    assert_eq!(after, before);
    assert!(
        order_service::cancel_order(&mut store, &session, "ORD-00000000-deadbeef")?.is_none()
    );

    Ok(())
}

#[test]
fn orders_are_listed_most_recent_first() -> Result<()> {
    let mut store = MemoryStore::new();
    let session = signup_shopper(&mut store, "shopper@example.com")?;

    let first = place_order(&mut store, &session, "P1")?;
    let second = place_order(&mut store, &session, "P2")?;

    let orders = order_service::list_orders(&store, &session)?;
    assert_eq!(orders[0].id, second.id);
    assert_eq!(orders[1].id, first.id);

    Ok(())
}

// Re-saving an unchanged order list must not change a single byte in the
// store.
#[test]
fn saving_an_unmodified_order_list_is_byte_stable() -> Result<()> {
    let mut store = MemoryStore::new();
    let session = signup_shopper(&mut store, "shopper@example.com")?;
    place_order(&mut store, &session, "P1")?;

    let key = format!("orders:{}", session.user_id);
    let before = store.get(&key)?.expect("orders persisted");

    let orders = order_service::list_orders(&store, &session)?;
    order_service::save_orders(&mut store, &session, &orders)?;

    let after = store.get(&key)?.expect("orders persisted");
    assert_eq!(after, before);

    Ok(())
}

// Worked example from the storefront: two adds of the same P1/Black variant
// checkout into a single line of quantity 2 at 19.98.
#[test]
fn repeated_variant_checkout_example() -> Result<()> {
    let mut store = MemoryStore::new();

    let jane = auth_service::signup(
        &mut store,
        SignupRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
        },
    )?;
    let session = SessionContext::new(jane.id);

    let request = shopfront_core::dto::cart::AddToCartRequest {
        id: catalog::variant_id("P1", "Black", None),
        name: "Wireless Headphones".to_string(),
        price: Decimal::new(999, 2),
        image: "images/p1.jpg".to_string(),
        color: Some("Black".to_string()),
        size: None,
    };
    cart_service::add_to_cart(&mut store, request.clone())?;
    let cart = cart_service::add_to_cart(&mut store, request)?;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 2);

    let total = cart_service::cart_total(&cart);
    let order = order_service::create_order(&mut store, &session, cart, total, None)?;
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.total, Decimal::new(1998, 2));
    assert_eq!(order.status, OrderStatus::Pending);

    Ok(())
}

#[test]
fn order_snapshot_is_isolated_from_later_cart_edits() -> Result<()> {
    let mut store = MemoryStore::new();
    let session = signup_shopper(&mut store, "shopper@example.com")?;

    let order = place_order(&mut store, &session, "P1")?;

    // New cart activity after checkout.
    cart_service::add_to_cart(&mut store, sample_request("P1"))?;
    cart_service::add_to_cart(&mut store, sample_request("P1"))?;

    let orders = order_service::list_orders(&store, &session)?;
    assert_eq!(orders[0].items, order.items);
    assert_eq!(orders[0].items[0].quantity, 1);

    Ok(())
}

fn signup_shopper(store: &mut MemoryStore, email: &str) -> Result<SessionContext> {
    let user = auth_service::signup(
        store,
        SignupRequest {
            full_name: "Test Shopper".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
        },
    )?;
    Ok(SessionContext::new(user.id))
}

fn sample_request(product_id: &str) -> shopfront_core::dto::cart::AddToCartRequest {
    shopfront_core::dto::cart::AddToCartRequest {
        id: catalog::variant_id(product_id, "Black", None),
        name: format!("Product {product_id}"),
        price: Decimal::new(2500, 2),
        image: format!("images/{product_id}.jpg"),
        color: Some("Black".to_string()),
        size: None,
    }
}

fn place_order(
    store: &mut MemoryStore,
    session: &SessionContext,
    product_id: &str,
) -> Result<shopfront_core::models::Order> {
    let cart = cart_service::add_to_cart(store, sample_request(product_id))?;
    let total = cart_service::cart_total(&cart);
    let order = order_service::create_order(store, session, cart, total, None)?;
    Ok(order)
}

fn valid_address() -> AddressForm {
    AddressForm {
        name: "Test Shopper".to_string(),
        mobile: "0917-123-4567".to_string(),
        street: "123 Rizal Street".to_string(),
        barangay: "Poblacion".to_string(),
        city: "Makati".to_string(),
        province: "Metro Manila".to_string(),
        postal_code: "1210".to_string(),
        is_default: true,
    }
}
