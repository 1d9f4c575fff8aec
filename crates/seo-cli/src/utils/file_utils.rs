//! File and path utilities

use crate::{CliError, Result};
use std::fs;
use std::path::Path;

/// Utilities for working with files and paths
pub struct FileUtils;

impl FileUtils {
    /// Check if a file has a Seoggi extension
    pub fn is_seoggi_file(path: &Path) -> bool {
        path.extension().map_or(false, |ext| ext == "seo")
    }

    /// Ensure a directory exists, creating it if necessary
    pub fn ensure_dir_exists(dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(CliError::Io)?;
        }
        Ok(())
    }

    /// Write content to a file, creating parent directories if necessary
    pub fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent)?;
        }

        fs::write(path, content).map_err(CliError::Io)?;

        Ok(())
    }

    /// Mark a generated file executable (mode 0o755). No-op outside Unix;
    /// idempotent everywhere.
    pub fn mark_executable(path: &Path) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).map_err(CliError::Io)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms).map_err(CliError::Io)?;
        }
        #[cfg(not(unix))]
        {
            let _ = path;
        }
        Ok(())
    }
}
