//! Line rewrite rules for the Rust target.

use seo_core::{EmittedUnit, RuleId, TranslationRule};

/// Ordered rule table for Rust output. The final entry claims every line the
/// earlier entries decline, so this table never drops input.
pub static RULES: &[TranslationRule] = &[
    TranslationRule {
        id: RuleId::Skip,
        matches: is_blank_or_comment,
        rewrite: elide,
    },
    TranslationRule {
        id: RuleId::Skip,
        matches: is_import,
        rewrite: elide,
    },
    TranslationRule {
        id: RuleId::Structure,
        matches: is_structure,
        rewrite: rewrite_structure,
    },
    TranslationRule {
        id: RuleId::Function,
        matches: is_function,
        rewrite: rewrite_function,
    },
    TranslationRule {
        id: RuleId::PassThrough,
        matches: claim_remainder,
        rewrite: escape_verbatim,
    },
];

fn is_blank_or_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with("//")
}

// The prelude's mock types replace anything the source would import.
fn is_import(line: &str) -> bool {
    line.starts_with("import")
}

fn is_structure(line: &str) -> bool {
    line.starts_with("struct")
}

fn is_function(line: &str) -> bool {
    line.starts_with("fn")
}

fn claim_remainder(_line: &str) -> bool {
    true
}

fn elide(_line: &str) -> EmittedUnit {
    Vec::new()
}

/// Structure headers gain a `Default` derive and `pub` visibility. Owned
/// `String` fields become `&str` and bare `new(` constructors become
/// `fn new(`, both replaced wherever they occur on the line.
fn rewrite_structure(line: &str) -> EmittedUnit {
    vec![
        "#[derive(Default)]".to_string(),
        format!(
            "pub {}",
            line.replace("new(", "fn new(").replace("String", "&str")
        ),
    ]
}

/// Function headers are already Rust syntax; they only gain `pub`.
fn rewrite_function(line: &str) -> EmittedUnit {
    vec![format!("pub {line}")]
}

/// Anything unclaimed is copied through with double quotes escaped.
fn escape_verbatim(line: &str) -> EmittedUnit {
    vec![line.replace('"', "\\\"")]
}
