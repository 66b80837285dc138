//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch, prompts, image fetching (commands.rs)          │
//! │  - Terminal and JSON rendering (render.rs)                  │
//! │  - tracing subscriber setup (logging.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  shelfapp: API facade → commands → store                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API facade inward is UI agnostic. The CLI layer is
//! responsible for **all** user-facing concerns: argument parsing, the delete
//! confirmation, rendering, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
