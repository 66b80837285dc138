use super::mem_backend::MemBackend;
use super::product_store::ProductStore;

pub type InMemoryStore = ProductStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ProductStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Product;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` products with codes 1..=count, each created one
        /// minute after the previous one.
        pub fn with_products(mut self, count: u64) -> Self {
            let start = Utc::now() - Duration::minutes(count as i64);
            for i in 1..=count {
                let product = Product::with_created_at(
                    i,
                    format!("Product {}", i),
                    format!("Description for product {}", i),
                    i * 10,
                    start + Duration::minutes(i as i64),
                );
                self.store.add(product).unwrap();
            }
            self
        }

        pub fn with_product(mut self, code: u64, name: &str, quantity: u64) -> Self {
            let product = Product::new(
                code,
                name.to_string(),
                format!("{} description", name),
                quantity,
            );
            self.store.add(product).unwrap();
            self
        }
    }
}
