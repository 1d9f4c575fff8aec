use serde::{Deserialize, Serialize};

/// A source line no rule claimed, dropped from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedLine {
    /// 1-based line number in the input.
    pub line: usize,
    /// The trimmed text that was dropped.
    pub text: String,
}

/// A declaration whose body could not be translated and was replaced by
/// the backend's placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntranslatedBody {
    /// 1-based line number of the declaration.
    pub line: usize,
    /// The trimmed declaration text.
    pub decl: String,
}

/// Accounting for one translation run.
///
/// The counts partition the input: every source line is either translated
/// (contributed output), elided (matched a rule that emits nothing), or
/// dropped (matched no rule). Untranslated bodies overlap with the
/// translated count, since the declaration line itself still emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationReport {
    /// Name of the translated source, as given to [`SourceText`].
    ///
    /// [`SourceText`]: crate::source::SourceText
    pub source: String,
    /// Lines that contributed at least one output line.
    pub translated: usize,
    /// Lines deliberately skipped (blanks, comments, imports).
    pub elided: usize,
    /// Lines silently discarded by the original tool, surfaced here.
    pub dropped: Vec<DroppedLine>,
    /// Declarations that received a placeholder body.
    pub untranslated_bodies: Vec<UntranslatedBody>,
}

impl TranslationReport {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            translated: 0,
            elided: 0,
            dropped: Vec::new(),
            untranslated_bodies: Vec::new(),
        }
    }

    pub(crate) fn record_emitted(&mut self) {
        self.translated += 1;
    }

    pub(crate) fn record_elided(&mut self) {
        self.elided += 1;
    }

    pub(crate) fn record_dropped(&mut self, line: usize, text: &str) {
        self.dropped.push(DroppedLine {
            line,
            text: text.to_string(),
        });
    }

    pub(crate) fn record_untranslated_body(&mut self, line: usize, decl: &str) {
        self.untranslated_bodies.push(UntranslatedBody {
            line,
            decl: decl.to_string(),
        });
    }

    /// True when information was lost: lines dropped or bodies replaced.
    pub fn is_lossy(&self) -> bool {
        !self.dropped.is_empty() || !self.untranslated_bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_report_is_lossless() {
        let report = TranslationReport::new("demo.seo");
        assert_eq!(report.source, "demo.seo");
        assert_eq!(report.translated, 0);
        assert_eq!(report.elided, 0);
        assert!(!report.is_lossy());
    }

    #[test]
    fn dropped_lines_make_the_report_lossy() {
        let mut report = TranslationReport::new("demo.seo");
        report.record_emitted();
        report.record_dropped(4, "let x = 5");
        assert!(report.is_lossy());
        assert_eq!(
            report.dropped,
            vec![DroppedLine {
                line: 4,
                text: "let x = 5".to_string()
            }]
        );
    }

    #[test]
    fn placeholder_bodies_make_the_report_lossy() {
        let mut report = TranslationReport::new("demo.seo");
        report.record_untranslated_body(2, "fn add(a, b) -> int");
        assert!(report.is_lossy());
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut report = TranslationReport::new("demo.seo");
        report.record_emitted();
        report.record_elided();
        report.record_dropped(7, "let x = 5");
        let json = serde_json::to_string(&report).unwrap();
        let back: TranslationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
