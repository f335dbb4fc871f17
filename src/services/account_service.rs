use chrono::Utc;
use uuid::Uuid;

use crate::audit::log_audit;
use crate::dto::account::{AddressForm, UserUpdate};
use crate::error::AppResult;
use crate::keys::StorageKey;
use crate::models::{Address, User};
use crate::services::auth_service;
use crate::session::SessionContext;
use crate::storage;
use crate::store::Store;
use crate::validation;

/// Merge partial profile fields into the registry record and refresh the
/// session copy. A session pointing at a user no longer in the registry is a
/// silent no-op.
pub fn update_user(
    store: &mut impl Store,
    session: &SessionContext,
    update: UserUpdate,
) -> AppResult<Option<User>> {
    with_user(store, session, |user| {
        if let Some(full_name) = update.full_name {
            user.full_name = full_name.trim().to_string();
        }
        if let Some(email) = update.email {
            user.email = email.trim().to_lowercase();
        }
    })
}

/// Validate and append a new address. The first address, or one explicitly
/// flagged, becomes the default.
pub fn add_address(
    store: &mut impl Store,
    session: &SessionContext,
    form: AddressForm,
) -> AppResult<Option<Address>> {
    form.validate()?;

    let address = Address {
        id: Uuid::new_v4(),
        name: form.name.trim().to_string(),
        mobile: validation::normalize_mobile(&form.mobile),
        street: form.street.trim().to_string(),
        barangay: form.barangay.trim().to_string(),
        city: form.city.trim().to_string(),
        province: form.province.trim().to_string(),
        postal_code: form.postal_code.trim().to_string(),
        is_default: form.is_default,
        created_at: Utc::now(),
    };

    let stored = address.clone();
    let updated = with_user(store, session, move |user| {
        let first = user.addresses.is_empty();
        if stored.is_default || first {
            user.default_address_id = Some(stored.id);
        }
        user.addresses.push(stored);
    })?;

    if updated.is_none() {
        return Ok(None);
    }
    log_audit(
        Some(session.user_id),
        "address_add",
        Some("addresses"),
        Some(serde_json::json!({ "address_id": address.id })),
    );
    Ok(Some(address))
}

/// Overwrite the fields of an existing address; an unknown id is a silent
/// no-op. Flagging `is_default` moves the default pointer here.
pub fn update_address(
    store: &mut impl Store,
    session: &SessionContext,
    address_id: Uuid,
    form: AddressForm,
) -> AppResult<Option<Address>> {
    form.validate()?;

    let mut changed = None;
    let updated = with_user(store, session, |user| {
        let Some(address) = user.addresses.iter_mut().find(|a| a.id == address_id) else {
            return;
        };
        address.name = form.name.trim().to_string();
        address.mobile = validation::normalize_mobile(&form.mobile);
        address.street = form.street.trim().to_string();
        address.barangay = form.barangay.trim().to_string();
        address.city = form.city.trim().to_string();
        address.province = form.province.trim().to_string();
        address.postal_code = form.postal_code.trim().to_string();
        address.is_default = form.is_default;
        if form.is_default {
            user.default_address_id = Some(address_id);
        }
        changed = Some(address.clone());
    })?;

    if updated.is_none() {
        return Ok(None);
    }
    if changed.is_some() {
        log_audit(
            Some(session.user_id),
            "address_update",
            Some("addresses"),
            Some(serde_json::json!({ "address_id": address_id })),
        );
    }
    Ok(changed)
}

/// Resolve the default-address pointer; `None` when unset or dangling.
pub fn default_address(
    store: &impl Store,
    session: &SessionContext,
) -> AppResult<Option<Address>> {
    let users = auth_service::list_users(store)?;
    let Some(user) = users.iter().find(|user| user.id == session.user_id) else {
        return Ok(None);
    };
    let Some(default_id) = user.default_address_id else {
        return Ok(None);
    };
    Ok(user
        .addresses
        .iter()
        .find(|address| address.id == default_id)
        .cloned())
}

/// Load the session's registry record, apply `mutate`, and persist both the
/// registry and the denormalized session copy. `None` when the record is gone.
fn with_user(
    store: &mut impl Store,
    session: &SessionContext,
    mutate: impl FnOnce(&mut User),
) -> AppResult<Option<User>> {
    let mut users = auth_service::list_users(store)?;
    let Some(user) = users.iter_mut().find(|user| user.id == session.user_id) else {
        return Ok(None);
    };

    mutate(user);
    let updated = user.clone();

    auth_service::save_users(store, &users)?;
    storage::write(store, &StorageKey::Session, &updated)?;
    Ok(Some(updated))
}
