use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_path = env::var("SHOPFRONT_STORE_PATH")
            .unwrap_or_else(|_| "shopfront-store.json".to_string());
        Ok(Self {
            store_path: PathBuf::from(store_path),
        })
    }
}
