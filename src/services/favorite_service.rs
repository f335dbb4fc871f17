use chrono::Utc;

use crate::audit::log_audit;
use crate::dto::favorites::FavoriteRequest;
use crate::error::AppResult;
use crate::keys::StorageKey;
use crate::models::FavoriteItem;
use crate::session::SessionContext;
use crate::storage;
use crate::store::Store;

pub fn list_favorites(
    store: &impl Store,
    session: &SessionContext,
) -> AppResult<Vec<FavoriteItem>> {
    storage::read_list(store, &StorageKey::Favorites(session.user_id))
}

pub fn save_favorites(
    store: &mut impl Store,
    session: &SessionContext,
    favorites: &[FavoriteItem],
) -> AppResult<()> {
    storage::write(store, &StorageKey::Favorites(session.user_id), &favorites)
}

/// Remove the product if it is already a favorite, add it otherwise. Returns
/// the updated list either way.
pub fn toggle_favorite(
    store: &mut impl Store,
    session: &SessionContext,
    product: FavoriteRequest,
) -> AppResult<Vec<FavoriteItem>> {
    let mut favorites = list_favorites(store, session)?;

    let action = match favorites.iter().position(|item| item.id == product.id) {
        Some(index) => {
            favorites.remove(index);
            "favorite_remove"
        }
        None => {
            favorites.push(FavoriteItem {
                id: product.id.clone(),
                name: product.name,
                price: product.price,
                image: product.image,
                added_at: Utc::now(),
            });
            "favorite_add"
        }
    };

    save_favorites(store, session, &favorites)?;
    log_audit(
        Some(session.user_id),
        action,
        Some("favorites"),
        Some(serde_json::json!({ "product_id": product.id })),
    );
    Ok(favorites)
}

pub fn is_favorite(
    store: &impl Store,
    session: &SessionContext,
    product_id: &str,
) -> AppResult<bool> {
    let favorites = list_favorites(store, session)?;
    Ok(favorites.iter().any(|item| item.id == product_id))
}
