//! Rust backend for the Seoggi bootstrap translator.

pub mod backend;
pub mod rules;

pub use backend::{RustBackend, PRELUDE, RUST, VERSION};
pub use rules::RULES;
