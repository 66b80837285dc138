use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::{decode_products, encode_products, Product};
use serde::Serialize;
use std::collections::HashSet;

/// Change notification sent to subscribers after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum StoreEvent {
    Loaded { count: usize },
    Added(Product),
    Deleted(Product),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StoreEvent)>;

pub struct ProductStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    products: Vec<Product>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<B: StorageBackend> ProductStore<B> {
    /// Wraps a backend without reading from it. Call [`Self::load`] next,
    /// or use [`Self::open`].
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            products: Vec::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Wraps a backend and loads whatever it holds.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::with_backend(backend);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// A missing blob yields an empty store. An unparseable blob also yields an
    /// empty store, with a warning; it is not an error. Read failures are
    /// returned, since starting empty would overwrite the data on the next save.
    ///
    /// Codes stay unique: if the blob repeats a code, the first record wins and
    /// the rest are dropped with a warning.
    pub fn load(&mut self) -> Result<usize> {
        let location = self.backend.location();
        self.products = match self.backend.read()? {
            None => {
                tracing::debug!(location = %location.display(), "no persisted products");
                Vec::new()
            }
            Some(bytes) => match decode_products(&bytes) {
                Ok(products) => drop_duplicate_codes(products),
                Err(e) => {
                    tracing::warn!(
                        location = %location.display(),
                        error = %e,
                        "could not parse persisted products, starting empty"
                    );
                    Vec::new()
                }
            },
        };

        let count = self.products.len();
        tracing::debug!(count, "products loaded");
        self.notify(&StoreEvent::Loaded { count });
        Ok(count)
    }

    /// Append a product, then persist the whole collection.
    ///
    /// Fails with [`ShelfError::DuplicateCode`] if the code is taken. If the
    /// write fails the product is taken back out and the error returned.
    pub fn add(&mut self, product: Product) -> Result<()> {
        if self.contains(product.code) {
            return Err(ShelfError::DuplicateCode(product.code));
        }

        self.products.push(product);
        if let Err(e) = self.persist() {
            self.products.pop();
            return Err(e);
        }

        let added = &self.products[self.products.len() - 1];
        tracing::debug!(code = added.code, "product added");
        let event = StoreEvent::Added(added.clone());
        self.notify(&event);
        Ok(())
    }

    /// Remove the product with `code`, then persist the rest.
    ///
    /// Returns `Ok(None)` without writing if no product has that code. If the
    /// write fails the product is put back where it was.
    pub fn delete(&mut self, code: u64) -> Result<Option<Product>> {
        let Some(position) = self.products.iter().position(|p| p.code == code) else {
            tracing::debug!(code, "delete of unknown code ignored");
            return Ok(None);
        };

        let removed = self.products.remove(position);
        if let Err(e) = self.persist() {
            self.products.insert(position, removed);
            return Err(e);
        }

        tracing::debug!(code, "product deleted");
        self.notify(&StoreEvent::Deleted(removed.clone()));
        Ok(Some(removed))
    }

    /// Products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, code: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    pub fn contains(&self, code: u64) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Register a callback for every persisted change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn persist(&self) -> Result<()> {
        let bytes = encode_products(&self.products)?;
        self.backend.write(&bytes)
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }
}

fn drop_duplicate_codes(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(products.len());
    products
        .into_iter()
        .filter(|p| {
            let first = seen.insert(p.code);
            if !first {
                tracing::warn!(code = p.code, name = %p.name, "ignoring persisted product with duplicate code");
            }
            first
        })
        .collect()
}

impl<B: StorageBackend> DataStore for ProductStore<B> {
    fn add_product(&mut self, product: Product) -> Result<()> {
        self.add(product)
    }

    fn delete_product(&mut self, code: u64) -> Result<Option<Product>> {
        self.delete(code)
    }

    fn get_product(&self, code: u64) -> Option<&Product> {
        self.get(code)
    }

    fn list_products(&self) -> &[Product] {
        self.list()
    }
}
