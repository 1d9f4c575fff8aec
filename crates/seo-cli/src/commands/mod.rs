//! Command implementations for the Seoggi CLI

pub mod compile;

// Re-export command functions
pub use compile::{compile_command, CompileArgs};
