//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic product inventory library**. The `shelf` binary is one
//! client of it; nothing in here knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / delete / list                                   │
//! │  - Validation (form.rs) and projection (view.rs)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore over a pluggable StorageBackend             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The image lookup ([`image`]) sits beside these layers. It is async, talks
//! to a third-party API, and is never consulted by the store.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never prompts. Diagnostics go through `tracing`;
//! the client decides where they end up.
//!
//! ## Module Overview
//!
//! - [`model`]: The `Product` record and its persisted encoding
//! - [`form`]: Field validation for new products
//! - [`view`]: Search and sort projection for listing
//! - [`store`]: Collection ownership, persistence, change notification
//! - [`commands`]: Business logic per operation
//! - [`api`]: Facade used by clients
//! - [`config`], [`init`]: Configuration and context setup
//! - [`image`]: Best-effort thumbnail lookup

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod image;
pub mod init;
pub mod model;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_utils;
