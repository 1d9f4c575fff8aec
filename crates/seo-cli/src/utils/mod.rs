//! Utility modules for the Seoggi CLI

pub mod file_utils;

pub use file_utils::FileUtils;
