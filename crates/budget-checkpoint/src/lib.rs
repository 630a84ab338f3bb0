//! Per-entity synchronization checkpoints for the budget sync client.
//!
//! Each tracked entity kind owns a single durable cell holding the timestamp
//! of its last successful incremental fetch. The sync engine reads the cell
//! to decide between a full and an incremental fetch, and writes it after
//! each successful cycle. This crate is a thin, type-safe accessor over an
//! embedded key-value substrate; it does not implement the sync protocol.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod entity;
pub mod store;

pub use entity::EntityKind;
pub use store::{CheckpointDb, CheckpointError, SyncCheckpointStore};
