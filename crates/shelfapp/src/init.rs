//! # Context Initialization
//!
//! Resolves where data and configuration live, loads the config, and opens
//! the store.
//!
//! ## Data Directory
//!
//! 1. `SHELF_DATA` environment variable, if set (primarily for testing).
//! 2. Otherwise the OS-appropriate data directory (via the `directories` crate),
//!    e.g. `~/.local/share/shelf` on Linux.
//!
//! ## Data File
//!
//! `data_file` from the config (default `products.json`) inside the data
//! directory. A `data_override` path replaces it entirely; relative config
//! values are joined to the data directory, absolute ones are used as-is.
//!
//! ## Layout
//!
//! ```text
//! <data dir>/
//! ├── shelf.toml       # Optional configuration
//! └── products.json    # The product collection
//! ```

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::image::{ImageLookup, LookupError};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "SHELF_DATA";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
}

impl ShelfContext {
    /// Open the product file at `data_file` with an already loaded config.
    pub fn open(data_file: PathBuf, config: ShelfConfig) -> Result<Self> {
        let store = FileStore::open_file(data_file)?;
        Ok(Self {
            api: ShelfApi::new(store),
            config,
        })
    }

    /// Image lookup using the configured API key. Only commands that show
    /// images need one, so the HTTP client is built on demand.
    pub fn image_lookup(&self) -> std::result::Result<ImageLookup, LookupError> {
        ImageLookup::new(self.config.api_key())
    }
}

/// Directory holding config and, by default, the product file.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".to_string()))
}

/// Resolve the product file from config, unless explicitly overridden.
pub fn resolve_data_file(data_dir: &Path, config: &ShelfConfig, data_override: Option<PathBuf>) -> PathBuf {
    match data_override {
        Some(path) => path,
        None => {
            let configured = PathBuf::from(&config.data_file);
            if configured.is_absolute() {
                configured
            } else {
                data_dir.join(configured)
            }
        }
    }
}

pub fn load_config(data_dir: &Path) -> ShelfConfig {
    match Clapfig::builder()
        .app_name("shelf")
        .file_name("shelf.toml")
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
    {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "could not load shelf.toml, using defaults");
            ShelfConfig::default()
        }
    }
}

/// Initialize the shelf context: config and store.
///
/// # Arguments
///
/// * `data_override` - Optional explicit path to the product file.
///
/// # Environment Variables
///
/// * `SHELF_DATA` - Overrides the data directory.
/// * `PIXABAY_KEY` - Image API key when the config has none.
pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = data_dir()?;
    let config = load_config(&data_dir);
    let data_file = resolve_data_file(&data_dir, &config, data_override);
    tracing::debug!(data_dir = %data_dir.display(), data_file = %data_file.display(), "initializing");

    ShelfContext::open(data_file, config)
}
