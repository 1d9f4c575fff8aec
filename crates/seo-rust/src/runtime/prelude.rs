
#![allow(unused_imports)]
#![allow(dead_code)]

use std::error::Error;
use std::result::Result;
use std::path::PathBuf;
use std::collections::HashMap;

// Mock types for compilation
pub struct Project {
    pub testing: Testing,
    pub docs: Documentation,
    pub dependencies: Vec<Dependency>,
}

pub struct Testing {
    pub enabled: bool,
}

pub struct Documentation {
    pub generate: bool,
}

pub struct Target;
pub struct BuildConfig;
pub struct State;
pub struct SafetyBounds;
pub struct QuantumState;
pub struct Quantum;
pub struct Neural;
pub struct Safety;
pub struct Memory;
pub struct Consciousness;
pub struct Cognition;
pub struct Reasoning;
pub struct Input;
pub struct Output;
pub struct TrainingData;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<Box<dyn Error>>,
}

#[derive(Debug)]
pub enum ErrorKind {
    BuildError,
    CompileError,
    RuntimeError,
}

pub struct Dependency {
    pub source: DependencySource,
}

pub enum DependencySource {
    Registry,
    Git,
    Local,
}

// Mock implementations
impl Project {
    pub fn from_file(_: &str) -> Result<Self, Error> {
        Ok(Project {
            testing: Testing { enabled: true },
            docs: Documentation { generate: true },
            dependencies: Vec::new(),
        })
    }
}

impl Target {
    pub const LLVM: Self = Target;
}

impl Error {
    pub fn new(kind: ErrorKind, message: String, source: Option<Box<dyn Error>>) -> Self {
        Error { kind, message, source }
    }
}

mod std {
    pub mod fs {
        pub fn exists(_: &str) -> bool {
            true
        }
    }
}

