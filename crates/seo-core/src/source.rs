/// One physical line of source text, numbered from 1.
#[derive(Debug, Clone, Copy)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub raw: &'a str,
}

/// Seoggi source text: an ordered sequence of lines, immutable once loaded.
///
/// The pipeline consumes it once, front to back. No intermediate
/// representation outlives the pass.
#[derive(Debug, Clone)]
pub struct SourceText {
    name: String,
    text: String,
}

impl SourceText {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Source text without an originating file, e.g. in tests.
    pub fn anonymous(text: impl Into<String>) -> Self {
        Self::new("<memory>", text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines in source order. Construct boundaries never span lines, so
    /// this is the only tokenization the bootstrap translator performs.
    pub fn lines(&self) -> impl Iterator<Item = SourceLine<'_>> {
        self.text.lines().enumerate().map(|(index, raw)| SourceLine {
            number: index + 1,
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_numbered_from_one() {
        let source = SourceText::anonymous("first\nsecond\nthird");
        let numbers: Vec<_> = source.lines().map(|l| (l.number, l.raw)).collect();
        assert_eq!(
            numbers,
            vec![(1, "first"), (2, "second"), (3, "third")]
        );
    }

    #[test]
    fn anonymous_source_has_placeholder_name() {
        assert_eq!(SourceText::anonymous("").name(), "<memory>");
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let source = SourceText::anonymous("only\n");
        assert_eq!(source.text(), "only\n");
        assert_eq!(source.lines().count(), 1);
    }
}
