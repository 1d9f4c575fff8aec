//! Seoggi CLI Library
//!
//! This crate provides the command-line interface for `seoc`, the Seoggi
//! bootstrap compiler. It wires the line translation pipeline to the
//! filesystem: input validation, target selection, output materialization,
//! and logging.

pub mod commands;
pub mod targets;
pub mod utils;

// Re-export core types for convenience
pub use seo_core::*;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error("Translation error: {0}")]
        Translation(String),

        #[error("Report error: {0}")]
        Report(String),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
