use seo_core::{RuleId, TranslationBackend, TranslationRule};

use crate::rules::RULES;

/// Canonical identifier for the Python backend.
pub const PYTHON: &str = "python";

/// Version of the embedded prelude, tied to the crate release.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runtime scaffolding emitted ahead of every translated module: mock
/// project, build, and error types the translated code can lean on. Kept in
/// a source-adjacent resource file so the block stays byte-stable.
pub const PRELUDE: &str = include_str!("runtime/prelude.py");

/// Translates Seoggi declarations into Python.
#[derive(Default)]
pub struct PythonBackend;

impl PythonBackend {
    pub fn new() -> Self {
        Self
    }
}

impl TranslationBackend for PythonBackend {
    fn language(&self) -> &'static str {
        PYTHON
    }

    fn output_extension(&self) -> &'static str {
        "py"
    }

    fn prelude(&self) -> &'static str {
        PRELUDE
    }

    fn rules(&self) -> &'static [TranslationRule] {
        RULES
    }

    fn synthesized_body(&self, id: RuleId) -> &'static [&'static str] {
        match id {
            RuleId::Structure | RuleId::Function => &["    pass", ""],
            _ => &[],
        }
    }
}
