//! # Configuration
//!
//! Shelf configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SHELF__DATA_FILE`, `SHELF__PIXABAY_KEY`, etc.
//! 2. **Config file**: `shelf.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! The image API key is additionally read from the plain `PIXABAY_KEY`
//! environment variable when the config leaves it unset.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `products.json` | File name of the product collection inside the data directory |
//! | `pixabay_key` | unset | API key for image lookups |
//! | `images` | `false` | Look up images on `list` without `--images` |
//! | `default_sort` | `created-desc` | Sort order used when `list` gets no `--sort` |

use crate::view::SortOrder;
use confique::Config;
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "PIXABAY_KEY";

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name of the product collection (e.g. "products.json")
    #[config(default = "products.json")]
    pub data_file: String,

    /// Pixabay API key used for product thumbnails.
    pub pixabay_key: Option<String>,

    /// Look up product images when listing.
    #[config(default = false)]
    pub images: bool,

    /// Default list order, as `<key>-<direction>`.
    #[config(default = "created-desc")]
    pub default_sort: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: "products.json".to_string(),
            pixabay_key: None,
            images: false,
            default_sort: "created-desc".to_string(),
        }
    }
}

impl ShelfConfig {
    /// The configured default order. Falls back to `created-desc` if the
    /// value does not parse.
    pub fn default_sort(&self) -> SortOrder {
        match self.default_sort.parse() {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!(value = %self.default_sort, error = %e, "invalid default_sort, using created-desc");
                SortOrder::default()
            }
        }
    }

    /// The API key from config, else from `PIXABAY_KEY`.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with_env(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_env(&self, env_value: Option<String>) -> Option<String> {
        self.pixabay_key
            .clone()
            .or(env_value)
            .filter(|k| !k.trim().is_empty())
    }
}
