use super::fs_backend::FsBackend;
use super::product_store::ProductStore;
use crate::error::Result;
use std::path::PathBuf;

pub type FileStore = ProductStore<FsBackend>;

impl FileStore {
    /// Opens the store backed by `data_file`, loading whatever is there.
    pub fn open_file(data_file: PathBuf) -> Result<Self> {
        ProductStore::open(FsBackend::new(data_file))
    }

    pub fn data_file(&self) -> PathBuf {
        self.backend.data_file().to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::test_utils::TestEnv;
    use std::fs;

    #[test]
    fn test_products_survive_reopen() {
        let env = TestEnv::new();
        let mut store = FileStore::open_file(env.data_file.clone()).unwrap();
        store
            .add(Product::new(1, "Widget".into(), "A basic widget".into(), 10))
            .unwrap();
        store
            .add(Product::new(2, "Gadget".into(), "A fancier gadget".into(), 4))
            .unwrap();
        store.delete(1).unwrap();

        let reopened = FileStore::open_file(env.data_file.clone()).unwrap();
        assert_eq!(reopened.list(), store.list());
        assert_eq!(reopened.list()[0].code, 2);
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let env = TestEnv::new();
        fs::write(&env.data_file, "{ truncated").unwrap();

        let store = FileStore::open_file(env.data_file.clone()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_persisted_layout_is_an_array_of_records() {
        let env = TestEnv::new();
        let mut store = FileStore::open_file(env.data_file.clone()).unwrap();
        store
            .add(Product::new(3, "Lamp".into(), "Desk lamp".into(), 0))
            .unwrap();

        let raw = fs::read_to_string(store.data_file()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["code"], 3);
        assert!(records[0]["createdAt"].is_string());
    }
}
