//! Database module for durable tracker state.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Key-value slot stores (SQLite-backed and in-memory)

pub mod migrations;
pub mod slots;

pub use migrations::init_db;
pub use slots::{MemorySlotStore, SlotStore, SqliteSlotStore, StoreError};
