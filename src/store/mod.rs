//! Player score persistence.
//!
//! [`PlayerStore`] is the only thing the HTTP layer knows about. Two
//! implementations ship with the crate:
//! - [`InMemoryPlayerStore`]: a map that lives as long as the process
//! - [`FileSystemPlayerStore`]: a JSON league document on any seekable stream

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{AppConfig, StoreBackend};
use crate::error::StoreError;
use crate::models::League;

mod file_system;
mod memory;
mod tape;

pub use file_system::FileSystemPlayerStore;
pub use memory::InMemoryPlayerStore;
pub use tape::{Tape, Truncate};

#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Current win count for `name`, or `None` if the player has never won.
    async fn get_player_score(&self, name: &str) -> Option<u64>;

    /// Adds one win to `name`, creating the player with a single win if unseen.
    async fn record_win(&self, name: &str) -> Result<(), StoreError>;

    async fn get_league(&self) -> League;
}

pub type SharedStore = Arc<dyn PlayerStore>;

/// Builds the backend selected by `config`.
pub async fn open_store(config: &AppConfig) -> Result<SharedStore, StoreError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory player store");
            Ok(Arc::new(InMemoryPlayerStore::new()))
        }
        StoreBackend::File => {
            tracing::info!(path = %config.db_file.display(), "Using file system player store");
            let store = FileSystemPlayerStore::from_path(&config.db_file).await?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn config_with(backend: &str, db_file: &std::path::Path) -> AppConfig {
        let backend = backend.to_string();
        let db_file = db_file.display().to_string();
        AppConfig::from_lookup(|key| match key {
            "PLAYER_STORE" => Some(backend.clone()),
            "DB_FILE_NAME" => Some(db_file.clone()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn opens_memory_backend() {
        let config = config_with("memory", std::path::Path::new("unused.json"));
        let store = open_store(&config).await.unwrap();

        store.record_win("Gianni").await.unwrap();

        assert_eq!(store.get_player_score("Gianni").await, Some(1));
    }

    #[tokio::test]
    async fn opens_file_backend_and_persists() {
        let dir = std::env::temp_dir().join(format!("player_league_{}", uuid::Uuid::new_v4()));
        let path = dir.join("game.db.json");
        let config = config_with("file", &path);

        let store = open_store(&config).await.unwrap();
        store.record_win("Pino").await.unwrap();
        store.record_win("Pino").await.unwrap();
        drop(store);

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, r#"[{"Name":"Pino","Wins":2}]"#);

        let reopened = open_store(&config).await.unwrap();
        assert_eq!(reopened.get_player_score("Pino").await, Some(2));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
