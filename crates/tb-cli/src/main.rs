//! threadboard - threaded comment board CLI
//!
//! Drives the in-memory comment store from the terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! threadboard config init
//!
//! # Walk through a sample discussion
//! threadboard demo
//!
//! # Same discussion as JSON
//! threadboard demo --format json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
