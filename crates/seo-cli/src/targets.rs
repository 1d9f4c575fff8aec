use std::path::{Path, PathBuf};

use seo_core::TranslationBackend;
use seo_python::PythonBackend;
use seo_rust::RustBackend;

use crate::{CliError, Result};

/// Supported output language targets for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Python,
    Rust,
}

/// Parse a translation target from a user-provided string.
pub fn parse_target(s: &str) -> Result<Target> {
    let normalized = s.to_lowercase();
    let target = match normalized.as_str() {
        "python" | "py" => Target::Python,
        "rust" | "rs" => Target::Rust,
        _ => {
            return Err(CliError::InvalidInput(format!("Unsupported target: {}", s)));
        }
    };
    Ok(target)
}

/// The backend implementing a target.
pub fn backend_for(target: Target) -> &'static dyn TranslationBackend {
    match target {
        Target::Python => &PythonBackend,
        Target::Rust => &RustBackend,
    }
}

/// Resolve the output path for a run, respecting an explicit `--output`.
/// The default artifact is `<build_dir>/seoggi.<ext>`.
pub fn resolve_output_path(
    output: Option<&PathBuf>,
    build_dir: &Path,
    backend: &dyn TranslationBackend,
) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => build_dir.join(format!("seoggi.{}", backend.output_extension())),
    }
}
