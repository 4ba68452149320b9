use rayon::prelude::*;

use crate::checks::{CheckRegistry, NodeContext, SentenceContext, SentenceIndex, subdoc_prefix};
use crate::diagnostics::{Diagnostic, Report};
use crate::model::{Document, Sentence};

/// Single owner of traversal order and check dispatch.
///
/// Traversal is fixed: sentences in document order; per sentence, boundary
/// checks first, then structural pre-checks, then every node in ascending id
/// order receiving each node-scoped check in registration order, then the
/// sentence-scoped checks. Sentence-wide indices are built exactly once per
/// sentence, before node traversal.
pub struct Validator {
    registry: CheckRegistry,
    parallel: bool,
}

impl Validator {
    #[must_use]
    pub const fn new(registry: CheckRegistry) -> Self {
        Self {
            registry,
            parallel: false,
        }
    }

    /// Validate sentences on the rayon pool. Sentences are independent for
    /// node- and sentence-scoped checks; per-sentence diagnostics are still
    /// buffered and emitted in document order, and boundary checks always
    /// run sequentially, so the output is identical either way.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn validate(&self, document: &Document) -> Report {
        let per_sentence: Vec<Vec<Diagnostic>> = if self.parallel {
            document
                .sentences()
                .par_iter()
                .map(|sentence| self.validate_sentence(sentence))
                .collect()
        } else {
            document
                .sentences()
                .iter()
                .map(|sentence| self.validate_sentence(sentence))
                .collect()
        };

        let mut report = Report::new();
        let mut prev_prefix: Option<&str> = None;
        for (sentence, diagnostics) in document.sentences().iter().zip(per_sentence) {
            for check in self.registry.boundary_checks() {
                report.extend(check.run(sentence, prev_prefix));
            }
            prev_prefix = Some(subdoc_prefix(sentence.sent_id()));
            report.extend(diagnostics);
        }
        report
    }

    fn validate_sentence(&self, sentence: &Sentence) -> Vec<Diagnostic> {
        let index = SentenceIndex::build(sentence);
        let ctx = SentenceContext {
            sentence,
            index: &index,
        };
        let mut out = Vec::new();

        for check in self.registry.pre_checks() {
            out.extend(check.run(&ctx));
        }
        for node in sentence.nodes() {
            let node_ctx = NodeContext {
                sentence,
                node,
                index: &index,
            };
            for check in self.registry.node_checks() {
                out.extend(check.run(&node_ctx));
            }
        }
        for check in self.registry.sentence_checks() {
            out.extend(check.run(&ctx));
        }
        out
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
