//! Line rewrite rules for the Python target.

use seo_core::{EmittedUnit, RuleId, TranslationRule};

/// Ordered rule table for Python output. Earlier entries shadow later ones;
/// lines no entry claims are dropped by the pipeline.
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
];

fn is_blank_or_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with("//")
}

// Imports are elided: the prelude's mock types stand in for anything a
// bootstrap-era source could import.
fn is_import(line: &str) -> bool {
    line.starts_with("import")
}

fn is_structure(line: &str) -> bool {
    line.starts_with("struct")
}

fn is_function(line: &str) -> bool {
    line.starts_with("fn")
}

fn elide(_line: &str) -> EmittedUnit {
    Vec::new()
}

/// `struct Name ...` becomes a `class` header. Only the leading keyword is
/// rewritten; the rest of the line is kept verbatim.
fn rewrite_structure(line: &str) -> EmittedUnit {
    vec![format!("{}:", line.replacen("struct", "class", 1))]
}

/// `fn name(args) -> ret` becomes a `def` header with the return annotation
/// parked behind `#`. No trailing colon is emitted; the bootstrap output
/// format is preserved exactly, syntax error included.
fn rewrite_function(line: &str) -> EmittedUnit {
    vec![line.replacen("fn", "def", 1).replace("->", "#->")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seo_core::classify;

    #[test]
    fn structures_become_class_headers() {
        assert_eq!(classify("struct Point", RULES), RuleId::Structure);
        assert_eq!(rewrite_structure("struct Point"), vec!["class Point:"]);
    }

    #[test]
    fn functions_become_def_headers_without_colon() {
        assert_eq!(classify("fn add(a, b) -> int", RULES), RuleId::Function);
        assert_eq!(
            rewrite_function("fn add(a, b) -> int"),
            vec!["def add(a, b) #-> int"]
        );
    }

    #[test]
    fn keyword_rewrite_leaves_the_remainder_verbatim() {
        assert_eq!(
            rewrite_structure("struct Constructor"),
            vec!["class Constructor:"]
        );
        assert_eq!(
            rewrite_function("fn definite() -> bool"),
            vec!["def definite() #-> bool"]
        );
    }

    #[test]
    fn every_arrow_is_commented_out() {
        assert_eq!(
            rewrite_function("fn chain() -> Fn() -> int"),
            vec!["def chain() #-> Fn() #-> int"]
        );
    }

    #[test]
    fn blanks_comments_and_imports_are_elided() {
        assert_eq!(classify("", RULES), RuleId::Skip);
        assert_eq!(classify("// a note", RULES), RuleId::Skip);
        assert_eq!(classify("import sys", RULES), RuleId::Skip);
    }

    #[test]
    fn bindings_are_unclaimed() {
        assert_eq!(classify("let x = 5", RULES), RuleId::Unhandled);
    }
}
