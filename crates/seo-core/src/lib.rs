//! Core translation pipeline for the Seoggi bootstrap translator.
//!
//! One line of Seoggi in, zero or more lines of target code out: an ordered
//! rule table classifies each line, the matched rewrite turns it into target
//! syntax, and the driver stitches the results after a fixed runtime prelude.
//! There is no lexer, no parser, and no symbol table; the bootstrap stage is
//! a deliberate line-granular rewriter, and everything it cannot recognize
//! is accounted for in a [`TranslationReport`] instead of guessed at.

pub mod backend;
pub mod body;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod source;

pub use backend::TranslationBackend;
pub use body::{BodyTranslator, UnsupportedBodies};
pub use error::{Error, Result};
pub use pipeline::{translate, TranslationOutput};
pub use report::{DroppedLine, TranslationReport, UntranslatedBody};
pub use rules::{classify, EmittedUnit, Predicate, Rewrite, RuleId, TranslationRule};
pub use source::{SourceLine, SourceText};
