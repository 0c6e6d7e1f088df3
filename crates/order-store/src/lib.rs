//! Ephemeral, concurrency-safe storage for orders.
//!
//! The store is the sole owner of order lifetimes: orders are created only by
//! [`OrderStore::insert`] and destroyed only by [`OrderStore::delete`].
//! Nothing is persisted; contents are discarded when the store is dropped.

pub mod error;
pub mod memory;
pub mod store;

pub use common::OrderId;
pub use error::{Result, StoreError};
pub use memory::InMemoryOrderStore;
pub use store::OrderStore;
