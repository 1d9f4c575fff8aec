use crate::error::{Error, Result};

/// Extension point for translating declaration bodies.
///
/// The bootstrap translator never looks inside a structure or function
/// body; this seam exists so a future front end can slot real body
/// translation in without touching the rule tables. Until then the only
/// implementation refuses every request, which keeps the "body discarded"
/// outcome explicit instead of dressing an empty body up as a successful
/// translation.
pub trait BodyTranslator: Send + Sync {
    fn translate_body(&self, decl: &str) -> Result<Vec<String>>;
}

/// The stub wired into every current backend.
pub struct UnsupportedBodies;

impl BodyTranslator for UnsupportedBodies {
    fn translate_body(&self, decl: &str) -> Result<Vec<String>> {
        Err(Error::UnsupportedBody {
            construct: first_token(decl).to_string(),
        })
    }
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or(line)
}
