use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::audit::log_audit;
use crate::dto::auth::SignupRequest;
use crate::error::{AppError, AppResult};
use crate::keys::StorageKey;
use crate::models::User;
use crate::storage;
use crate::store::Store;
use crate::validation;

/// Register a new account. Validation failures return the shopper-facing
/// message and leave the registry untouched; success logs the shopper in
/// right away.
pub fn signup(store: &mut impl Store, payload: SignupRequest) -> AppResult<User> {
    let SignupRequest {
        full_name,
        email,
        password,
    } = payload;

    let full_name = full_name.trim().to_string();
    if full_name.chars().count() < 2 {
        return Err(AppError::Validation(
            "Full name must be at least 2 characters".to_string(),
        ));
    }

    let email = email.trim().to_lowercase();
    if !validation::is_valid_email(&email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    let mut users = list_users(store)?;
    if users.iter().any(|user| user.email.eq_ignore_ascii_case(&email)) {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    if !validation::is_valid_password(&password) {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let user = User {
        id: Uuid::new_v4(),
        full_name,
        email: email.clone(),
        password_hash: hash_password(&password)?,
        created_at: Utc::now(),
        addresses: Vec::new(),
        default_address_id: None,
    };

    users.push(user);
    save_users(store, &users)?;

    // Auto login after signup.
    let user = login(store, &email, &password)?;
    log_audit(
        Some(user.id),
        "user_register",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    );
    Ok(user)
}

/// Email match is case-insensitive; the password is checked against the
/// stored hash. Success persists the denormalized session copy.
pub fn login(store: &mut impl Store, email: &str, password: &str) -> AppResult<User> {
    let email = email.trim();
    let users = list_users(store)?;
    let user = users.into_iter().find(|user| {
        user.email.eq_ignore_ascii_case(email) && verify_password(password, &user.password_hash)
    });

    let Some(user) = user else {
        return Err(AppError::Validation("Invalid email or password".to_string()));
    };

    storage::write(store, &StorageKey::Session, &user)?;
    log_audit(
        Some(user.id),
        "user_login",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    );
    Ok(user)
}

/// Drop the active session. Safe to call while logged out.
pub fn logout(store: &mut impl Store) -> AppResult<()> {
    if let Some(user) = crate::session::current_user(store)? {
        log_audit(Some(user.id), "user_logout", Some("users"), None);
    }
    storage::clear(store, &StorageKey::Session)
}

pub(crate) fn list_users(store: &impl Store) -> AppResult<Vec<User>> {
    storage::read_list(store, &StorageKey::Users)
}

pub(crate) fn save_users(store: &mut impl Store, users: &[User]) -> AppResult<()> {
    storage::write(store, &StorageKey::Users, &users)
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
