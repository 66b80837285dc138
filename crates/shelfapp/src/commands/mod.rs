//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each command lives in its
//! own submodule and implements pure Rust functions that operate on data types.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, file formatting, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **User interaction**: No prompts or confirmations. Commands that need one
//!   expose a `preview` the UI can show first.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_products`: Products that were added or removed
//! - `listed_products`: Products to display, already filtered and ordered
//! - `messages`: Structured messages with levels (info, success)
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch here; the store
//! and projection have their own tests.
//!
//! ## Command Modules
//!
//! - [`create`]: Validate a draft and add it
//! - [`delete`]: Remove a product by code
//! - [`list`]: Filtered, sorted listing

use crate::model::Product;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }
}
