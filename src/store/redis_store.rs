use super::KeyValueStore;
use crate::errors::StorageError;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct RedisStore {
    connection: Arc<Mutex<ConnectionManager>>,
    key_prefix: String,
}

impl RedisStore {
    pub async fn new(redis_url: &str, key_prefix: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)
            .map_err(|err| StorageError::Unavailable(format!("Invalid Redis URL: {}", err)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|err| StorageError::Unavailable(format!("Redis unavailable: {}", err)))?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
            key_prefix: key_prefix.trim_end_matches(':').to_string(),
        })
    }

    fn full_key(&self, key: &str) -> String {
        prefixed(&self.key_prefix, key)
    }
}

fn prefixed(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.connection.lock().await;
        conn.get(self.full_key(key))
            .await
            .map_err(|err| StorageError::Unavailable(format!("Redis GET failed: {}", err)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.connection.lock().await;
        let (): () = conn
            .set(self.full_key(key), value)
            .await
            .map_err(|err| StorageError::Unavailable(format!("Redis SET failed: {}", err)))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.connection.lock().await;
        let (): () = conn
            .del(self.full_key(key))
            .await
            .map_err(|err| StorageError::Unavailable(format!("Redis DEL failed: {}", err)))?;
        Ok(())
    }
}
