//! A catalogue of the Gang-of-Four behavioral and structural design
//! patterns, one module per pattern. Every module is self-contained: the
//! participant types, a `demo()` that walks through the pattern's narrative
//! on the console, and tests asserting the observable behavior.
//!
//! Run the catalogue binary to list or execute the demos:
//! `cargo run -- observer`, `cargo run -- all`.

pub mod behavioral;
pub mod catalogue;
pub mod structural;

use colored::Colorize;

/// Prints the standard demo banner, e.g. `=== Observer ===`.
pub(crate) fn banner(title: &str) {
    println!("\n=== {} ===", title.bold());
}
