//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all shelf operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//! - **Exposes store subscriptions** so a UI can react to changes without
//!   polling
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::form::ProductDraft;
use crate::model::Product;
use crate::store::backend::StorageBackend;
use crate::store::product_store::{ProductStore, StoreEvent, SubscriptionId};
use crate::store::DataStore;
use crate::view::ListQuery;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for shelf operations.
pub struct ShelfApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_product(&mut self, draft: &ProductDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_products(&self, query: &ListQuery) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    /// What `delete_product(code)` would remove.
    pub fn delete_preview(&self, code: u64) -> Option<Product> {
        commands::delete::preview(&self.store, code)
    }

    pub fn delete_product(&mut self, code: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, code)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<B: StorageBackend> ShelfApi<ProductStore<B>> {
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}
