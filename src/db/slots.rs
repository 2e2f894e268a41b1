//! Durable key-value slots holding serialized tracker state.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use thiserror::Error;

/// Error type for slot store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("Slot store unavailable: {0}")]
    Unavailable(String),
}

/// Named slots of opaque text. A slot that was never written reads as `None`.
#[async_trait]
pub trait SlotStore: Send + Sync + fmt::Debug {
    async fn read(&self, slot: &str) -> Result<Option<String>, StoreError>;

    /// Replace the contents of `slot`.
    async fn write(&self, slot: &str, payload: &str) -> Result<(), StoreError>;
}

/// Slot store backed by the `kv_slots` SQLite table.
#[derive(Debug, Clone)]
pub struct SqliteSlotStore {
    pool: SqlitePool,
}

impl SqliteSlotStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteSlotStore { pool }
    }
}

#[async_trait]
impl SlotStore for SqliteSlotStore {
    async fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query("SELECT payload FROM kv_slots WHERE slot = ?")
            .bind(slot)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get::<String, _>("payload")))
    }

    async fn write(&self, slot: &str, payload: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO kv_slots (slot, payload)
            VALUES (?, ?)
            ON CONFLICT(slot) DO UPDATE SET payload = excluded.payload
            "#,
        )
        .bind(slot)
        .bind(payload)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// In-memory slot store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw contents.
    pub fn with_slot(self, slot: &str, payload: &str) -> Self {
        self.lock().insert(slot.to_string(), payload.to_string());
        self
    }

    /// Make every write fail, leaving stored contents untouched.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw contents of a slot.
    pub fn get(&self, slot: &str) -> Option<String> {
        self.lock().get(slot).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map of strings.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(slot))
    }

    async fn write(&self, slot: &str, payload: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable(format!("write to {} rejected", slot)));
        }
        self.lock().insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
