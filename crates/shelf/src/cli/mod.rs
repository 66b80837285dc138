//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, prompts)
//! - Handles argument parsing
//! - Owns an async runtime (for image lookups)
//! - Formats output for human consumption
//!
//! ## Commands
//!
//! - `shelf add --code 1 --name Widget --description "A basic widget" --quantity 10`
//! - `shelf list [--search TERM] [--sort name-asc] [--images]` (also the naked `shelf`)
//! - `shelf delete CODE [--yes]`
//!
//! Every command accepts `--output json` for scripting.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting (lists, messages, field errors)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
