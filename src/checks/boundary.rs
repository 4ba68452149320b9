use crate::diagnostics::{Diagnostic, Severity};
use crate::model::Sentence;

use super::BoundaryCheck;

/// Sub-document prefix of a sentence identifier: everything before the
/// first underscore.
#[must_use]
pub fn subdoc_prefix(sent_id: &str) -> &str {
    match sent_id.find('_') {
        Some(idx) => &sent_id[..idx],
        None => sent_id,
    }
}

/// The first sentence of every sub-document must carry the newdoc flag.
pub struct NewdocBoundaryCheck;

impl BoundaryCheck for NewdocBoundaryCheck {
    fn name(&self) -> &'static str {
        "newdoc-boundary"
    }

    fn run(&self, sentence: &Sentence, prev_prefix: Option<&str>) -> Vec<Diagnostic> {
        let prefix = subdoc_prefix(sentence.sent_id());
        if prev_prefix == Some(prefix) || sentence.is_newdoc() {
            return Vec::new();
        }
        vec![Diagnostic::sentence(
            Severity::Error,
            sentence.sent_id(),
            "newdoc id declaration missing".to_string(),
        )]
    }
}

#[cfg(test)]
#[path = "boundary_tests.rs"]
mod tests;
