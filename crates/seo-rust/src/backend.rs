use seo_core::{RuleId, TranslationBackend, TranslationRule};

use crate::rules::RULES;

/// Canonical identifier for the Rust backend.
pub const RUST: &str = "rust";

/// Version of the embedded prelude, tied to the crate release.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mock types, impls, and a `std::fs` shim emitted ahead of every
/// translated module, kept byte-stable in a source-adjacent resource file.
pub const PRELUDE: &str = include_str!("runtime/prelude.rs");

/// Translates Seoggi declarations into Rust.
#[derive(Default)]
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl TranslationBackend for RustBackend {
    fn language(&self) -> &'static str {
        RUST
    }

    fn output_extension(&self) -> &'static str {
        "rs"
    }

    fn prelude(&self) -> &'static str {
        PRELUDE
    }

    fn rules(&self) -> &'static [TranslationRule] {
        RULES
    }

    /// Declarations are emitted bare; any body lines in the source reach
    /// the pass-through rule on their own.
    fn synthesized_body(&self, _id: RuleId) -> &'static [&'static str] {
        &[]
    }
}
