//! Python backend for the Seoggi bootstrap translator.

pub mod backend;
pub mod rules;

pub use backend::{PythonBackend, PRELUDE, PYTHON, VERSION};
pub use rules::RULES;
