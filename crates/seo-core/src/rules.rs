/// Lines produced by rewriting a single source line, without trailing
/// newlines. An empty unit means the line contributes nothing to the output.
pub type EmittedUnit = Vec<String>;

/// Decides whether a rule claims a (trimmed) source line.
pub type Predicate = fn(&str) -> bool;

/// Rewrites a claimed line into target-language text. Total: every input
/// maps to some unit, possibly empty, and no rewrite can fail.
pub type Rewrite = fn(&str) -> EmittedUnit;

/// Identifies the translation rule that claimed a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleId {
    /// Blank lines, comments, and imports: elided from the output.
    Skip,
    /// Structure declarations, rewritten to the target's record syntax.
    Structure,
    /// Function declarations, rewritten to the target's function syntax.
    Function,
    /// Lines copied into the output unchanged apart from escaping.
    PassThrough,
    /// No rule recognizes the construct; the line is dropped.
    Unhandled,
}

impl RuleId {
    /// Structure and function rules emit declarations whose bodies the
    /// bootstrap translator never inspects.
    pub fn is_declaration(self) -> bool {
        matches!(self, RuleId::Structure | RuleId::Function)
    }
}

/// One (predicate, rewrite) pairing. A backend's rule set is a fixed,
/// ordered slice of these, evaluated top to bottom with first-match
/// semantics, so adding a rule is additive rather than a rewrite of some
/// branching logic. Several entries may share an id: blank/comment elision
/// and import elision are distinct rules that both classify as [`RuleId::Skip`].
pub struct TranslationRule {
    pub id: RuleId,
    pub matches: Predicate,
    pub rewrite: Rewrite,
}

/// Returns the first rule in `rules` whose predicate accepts `line`.
///
/// `line` must already be trimmed of surrounding whitespace; original
/// indentation is never preserved. There is no lookahead, so a construct
/// spanning physical lines is matched (or missed) one line at a time.
pub fn match_rule<'r>(line: &str, rules: &'r [TranslationRule]) -> Option<&'r TranslationRule> {
    rules.iter().find(|rule| (rule.matches)(line))
}

/// First-match classification of one line. Surrounding whitespace is
/// stripped before matching, so a whitespace-only line classifies like an
/// empty one. Total over its input: a line no rule claims is `Unhandled`.
pub fn classify(line: &str, rules: &[TranslationRule]) -> RuleId {
    match_rule(line.trim(), rules).map_or(RuleId::Unhandled, |rule| rule.id)
}
