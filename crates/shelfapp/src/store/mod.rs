//! # Storage Layer
//!
//! The store owns the authoritative product collection and mirrors it to a
//! persistent medium on every change.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: raw I/O. Reads and writes one opaque blob.
//! - [`product_store::ProductStore`]: the collection itself. Enforces unique
//!   codes, keeps insertion order, serializes, and notifies subscribers.
//! - [`DataStore`]: the interface the command layer is written against.
//!
//! ## Save Contract
//!
//! Every successful `add` or `delete` rewrites the whole collection before it
//! returns. There is no delta, no log, and no deferred flush. When the write
//! fails the in-memory collection is restored to what it was and the error is
//! returned, so memory and storage never disagree.
//!
//! ## Load
//!
//! - Nothing persisted yet → empty collection.
//! - Unparseable blob → empty collection plus a warning. Not an error.
//! - Read failure (permissions, disk) → error. Starting empty here would
//!   clobber the data on the next save.
//!
//! ## Change Notification
//!
//! Clients register callbacks with [`product_store::ProductStore::subscribe`]
//! and receive a [`product_store::StoreEvent`] after each persisted change.
//! The store never knows who is listening.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file on disk (`products.json`).
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::Product;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod product_store;

/// Abstract interface for product storage.
pub trait DataStore {
    /// Add a product. Fails if its code is already present.
    fn add_product(&mut self, product: Product) -> Result<()>;

    /// Delete by code. `Ok(None)` when nothing matched.
    fn delete_product(&mut self, code: u64) -> Result<Option<Product>>;

    fn get_product(&self, code: u64) -> Option<&Product>;

    /// All products in insertion order
    fn list_products(&self) -> &[Product];
}
