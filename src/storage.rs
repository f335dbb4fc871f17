//! Schema-aware reads and writes over the raw [`Store`].
//!
//! Every value is wrapped in a versioned envelope so a reader can reject
//! malformed or incompatibly-versioned data instead of propagating it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::keys::StorageKey;
use crate::store::Store;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data: T,
}

/// Read and decode the value under `key`. Absent key is `None`.
pub fn read<T: DeserializeOwned>(store: &impl Store, key: &StorageKey) -> AppResult<Option<T>> {
    let key = key.to_string();
    let Some(text) = store.get(&key)? else {
        return Ok(None);
    };
    let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|source| AppError::Corrupt {
        key: key.clone(),
        source,
    })?;
    if envelope.version != SCHEMA_VERSION {
        return Err(AppError::Version {
            key,
            found: envelope.version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(Some(envelope.data))
}

/// Read a collection under `key`; an absent key is an empty list.
pub fn read_list<T: DeserializeOwned>(store: &impl Store, key: &StorageKey) -> AppResult<Vec<T>> {
    Ok(read(store, key)?.unwrap_or_default())
}

pub fn write<T: Serialize>(store: &mut impl Store, key: &StorageKey, data: &T) -> AppResult<()> {
    let envelope = Envelope {
        version: SCHEMA_VERSION,
        data,
    };
    let text =
        serde_json::to_string(&envelope).map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
    store.set(&key.to_string(), &text)?;
    Ok(())
}

pub fn clear(store: &mut impl Store, key: &StorageKey) -> AppResult<()> {
    store.remove(&key.to_string())?;
    Ok(())
}
