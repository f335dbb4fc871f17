use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_core::{
    catalog,
    config::AppConfig,
    dto::{account::AddressForm, auth::SignupRequest, orders::CheckoutRequest},
    error::AppError,
    models::User,
    services::{auth_service, cart_service, order_service},
    session::SessionContext,
    store::FileStore,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shopfront_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let mut store = FileStore::open(&config.store_path)?;

    let shopper = ensure_user(&mut store, "Demo Shopper", "shopper@example.com", "shopper123")?;
    ensure_user(&mut store, "Demo Admin", "admin@example.com", "admin123")?;

    let session = SessionContext::new(shopper.id);
    if order_service::list_orders(&store, &session)?.is_empty() {
        let order = seed_sample_order(&mut store, &session)?;
        println!("Seeded order {} (total {})", order.id, order.total);
    }

    println!(
        "Seed completed. Shopper ID: {}, store at {}",
        shopper.id,
        config.store_path.display()
    );
    Ok(())
}

fn ensure_user(
    store: &mut FileStore,
    full_name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    let user = match auth_service::signup(
        store,
        SignupRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        },
    ) {
        Ok(user) => user,
        // Already registered on a previous run.
        Err(AppError::Validation(_)) => auth_service::login(store, email, password)?,
        Err(err) => return Err(err.into()),
    };
    println!("Ensured user {email}");
    Ok(user)
}

fn seed_sample_order(
    store: &mut FileStore,
    session: &SessionContext,
) -> anyhow::Result<shopfront_core::models::Order> {
    let product = catalog::ProductInfo {
        id: "wireless-headphones".to_string(),
        name: "Wireless Headphones".to_string(),
        price: Decimal::new(9999, 2),
        image: "images/wireless-headphones.jpg".to_string(),
    };
    let request = catalog::build_cart_request(&product, Some("Black"), None)?;
    cart_service::add_to_cart(store, request.clone())?;
    cart_service::add_to_cart(store, request)?;

    let order = order_service::checkout(
        store,
        session,
        CheckoutRequest {
            address: AddressForm {
                name: "Demo Shopper".to_string(),
                mobile: "0917-123-4567".to_string(),
                street: "123 Rizal Street".to_string(),
                barangay: "Poblacion".to_string(),
                city: "Makati".to_string(),
                province: "Metro Manila".to_string(),
                postal_code: "1210".to_string(),
                is_default: true,
            },
        },
    )?;
    Ok(order)
}
