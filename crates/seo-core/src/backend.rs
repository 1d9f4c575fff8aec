use crate::body::{BodyTranslator, UnsupportedBodies};
use crate::rules::{RuleId, TranslationRule};

/// A target language for the line translator.
///
/// A backend contributes three things: the prelude emitted ahead of any
/// translated code, the ordered rule table the pipeline matches lines
/// against, and the placeholder body appended under a declaration when no
/// real body translation is available. The pipeline owns everything else,
/// so a new target is a table plus a prelude, not a new pipeline.
pub trait TranslationBackend: Send + Sync {
    /// Human-readable language name used in logs and reports.
    fn language(&self) -> &'static str;

    /// Extension for materialized output files, without the dot.
    fn output_extension(&self) -> &'static str;

    /// Runtime scaffolding emitted verbatim before any translated line.
    fn prelude(&self) -> &'static str;

    /// Rule table, highest priority first.
    fn rules(&self) -> &'static [TranslationRule];

    /// Placeholder lines appended under a declaration whose body was
    /// discarded. May be empty for targets where a bare declaration is
    /// already well formed.
    fn synthesized_body(&self, id: RuleId) -> &'static [&'static str];

    /// Body translation hook; declines everything until a front end that
    /// understands bodies exists.
    fn body_translator(&self) -> &dyn BodyTranslator {
        &UnsupportedBodies
    }
}
