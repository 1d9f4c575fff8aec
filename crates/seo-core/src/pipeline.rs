use crate::backend::TranslationBackend;
use crate::report::TranslationReport;
use crate::rules::match_rule;
use crate::source::SourceText;

/// Everything one translation run produces: the output text plus the
/// accounting of what happened to each input line.
pub struct TranslationOutput {
    pub code: String,
    pub report: TranslationReport,
}

/// Translate `source` line by line against `backend`'s rule table.
///
/// The backend prelude is emitted first, verbatim. Each input line is then
/// trimmed, matched against the rule table in order, and rewritten by the
/// first rule that claims it; lines no rule claims are dropped from the
/// output and recorded in the report. A single forward pass, no lookahead,
/// no state carried between lines. Total: malformed input cannot fail the
/// run, only degrade it, and the degradation is visible in the report.
/// Byte-identical input yields byte-identical output.
pub fn translate(source: &SourceText, backend: &dyn TranslationBackend) -> TranslationOutput {
    let mut code = String::from(backend.prelude());
    let mut report = TranslationReport::new(source.name());

    for line in source.lines() {
        let trimmed = line.raw.trim();
        let Some(rule) = match_rule(trimmed, backend.rules()) else {
            report.record_dropped(line.number, trimmed);
            continue;
        };

        let mut unit = (rule.rewrite)(trimmed);
        if rule.id.is_declaration() {
            match backend.body_translator().translate_body(trimmed) {
                Ok(body) => unit.extend(body),
                Err(_) => {
                    unit.extend(
                        backend
                            .synthesized_body(rule.id)
                            .iter()
                            .map(|s| s.to_string()),
                    );
                    report.record_untranslated_body(line.number, trimmed);
                }
            }
        }

        if unit.is_empty() {
            report.record_elided();
        } else {
            report.record_emitted();
            for emitted in &unit {
                code.push_str(emitted);
                code.push('\n');
            }
        }
    }

    TranslationOutput { code, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{EmittedUnit, RuleId, TranslationRule};
    use pretty_assertions::assert_eq;

    fn is_blank_or_note(line: &str) -> bool {
        line.is_empty() || line.starts_with('#')
    }

    fn skip(_line: &str) -> EmittedUnit {
        Vec::new()
    }

    fn is_box(line: &str) -> bool {
        line.starts_with("box ")
    }

    fn rewrite_box(line: &str) -> EmittedUnit {
        vec![line.replacen("box", "carton", 1)]
    }

    static TOY_RULES: &[TranslationRule] = &[
        TranslationRule {
            id: RuleId::Skip,
            matches: is_blank_or_note,
            rewrite: skip,
        },
        TranslationRule {
            id: RuleId::Structure,
            matches: is_box,
            rewrite: rewrite_box,
        },
    ];

    struct Toy;

    impl TranslationBackend for Toy {
        fn language(&self) -> &'static str {
            "toy"
        }

        fn output_extension(&self) -> &'static str {
            "toy"
        }

        fn prelude(&self) -> &'static str {
            "prelude line\n"
        }

        fn rules(&self) -> &'static [TranslationRule] {
            TOY_RULES
        }

        fn synthesized_body(&self, _id: RuleId) -> &'static [&'static str] {
            &["    stub"]
        }
    }

    #[test]
    fn empty_input_yields_bare_prelude() {
        let source = SourceText::anonymous("");
        let out = translate(&source, &Toy);
        assert_eq!(out.code, "prelude line\n");
        assert_eq!(out.report.translated, 0);
        assert!(!out.report.is_lossy());
    }

    #[test]
    fn prelude_precedes_translated_lines_in_source_order() {
        let source = SourceText::anonymous("box a\n\nbox b\n");
        let out = translate(&source, &Toy);
        assert_eq!(
            out.code,
            "prelude line\ncarton a\n    stub\ncarton b\n    stub\n"
        );
        assert_eq!(out.report.translated, 2);
        assert_eq!(out.report.elided, 1);
    }

    #[test]
    fn unmatched_lines_are_dropped_and_surfaced() {
        let source = SourceText::anonymous("box a\nlet x = 5\n");
        let out = translate(&source, &Toy);
        assert!(!out.code.contains("let x = 5"));
        assert_eq!(out.report.dropped.len(), 1);
        assert_eq!(out.report.dropped[0].line, 2);
        assert_eq!(out.report.dropped[0].text, "let x = 5");
        assert!(out.report.is_lossy());
    }

    #[test]
    fn declarations_record_their_placeholder_bodies() {
        let source = SourceText::anonymous("box a\n");
        let out = translate(&source, &Toy);
        assert_eq!(out.report.untranslated_bodies.len(), 1);
        assert_eq!(out.report.untranslated_bodies[0].decl, "box a");
    }

    #[test]
    fn indentation_is_ignored_when_matching() {
        let flat = translate(&SourceText::anonymous("box a\n"), &Toy);
        let indented = translate(&SourceText::anonymous("    box a\n"), &Toy);
        assert_eq!(flat.code, indented.code);
    }

    #[test]
    fn translation_is_deterministic() {
        let source = SourceText::anonymous("box a\n# note\nlet x = 5\nbox b\n");
        let first = translate(&source, &Toy);
        let second = translate(&source, &Toy);
        assert_eq!(first.code, second.code);
        assert_eq!(first.report, second.report);
    }
}
