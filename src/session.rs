//! Active-session lookup and the login gate for guarded operations.
//!
//! There is no ambient "current user": operations that touch per-user state
//! take an explicit [`SessionContext`], resolved here from the persisted
//! session copy.

use uuid::Uuid;

use crate::error::AppResult;
use crate::keys::StorageKey;
use crate::models::User;
use crate::storage;
use crate::store::Store;

/// Where the rendering layer should send a shopper who still has to log in.
pub const LOGIN_LOCATION: &str = "login";

/// Identity of the logged-in shopper, passed explicitly to every per-user
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Uuid,
}

impl SessionContext {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

/// Outcome of [`require_session`].
#[derive(Debug, PartialEq, Eq)]
pub enum SessionGate {
    Active(SessionContext),
    /// No active session; the caller should navigate here. The shopper's
    /// original location has been recorded for the post-login redirect.
    LoginRequired { login_location: &'static str },
}

/// The denormalized user copy stored under the session key, if logged in.
pub fn current_user(store: &impl Store) -> AppResult<Option<User>> {
    storage::read(store, &StorageKey::Session)
}

pub fn current_session(store: &impl Store) -> AppResult<Option<SessionContext>> {
    Ok(current_user(store)?.map(|user| SessionContext::new(user.id)))
}

pub fn is_logged_in(store: &impl Store) -> AppResult<bool> {
    Ok(current_session(store)?.is_some())
}

/// Gate for operations that need a logged-in shopper. Without a session the
/// current location is recorded so login can return the shopper to it.
pub fn require_session(
    store: &mut impl Store,
    current_location: &str,
) -> AppResult<SessionGate> {
    if let Some(context) = current_session(store)? {
        return Ok(SessionGate::Active(context));
    }
    storage::write(
        store,
        &StorageKey::RedirectTarget,
        &current_location.to_string(),
    )?;
    Ok(SessionGate::LoginRequired {
        login_location: LOGIN_LOCATION,
    })
}

/// Consume the recorded post-login location. Returns it at most once.
pub fn take_redirect_target(store: &mut impl Store) -> AppResult<Option<String>> {
    let target: Option<String> = storage::read(store, &StorageKey::RedirectTarget)?;
    storage::clear(store, &StorageKey::RedirectTarget)?;
    Ok(target)
}
