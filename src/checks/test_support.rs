//! Helpers for exercising a single check in isolation.

use crate::diagnostics::Diagnostic;
use crate::model::Sentence;

use super::{NodeCheck, NodeContext, SentenceCheck, SentenceContext, SentenceIndex};

pub fn run_node_check(check: &dyn NodeCheck, sentence: &Sentence) -> Vec<Diagnostic> {
    let index = SentenceIndex::build(sentence);
    let mut out = Vec::new();
    for node in sentence.nodes() {
        let ctx = NodeContext {
            sentence,
            node,
            index: &index,
        };
        out.extend(check.run(&ctx));
    }
    out
}

pub fn run_sentence_check(check: &dyn SentenceCheck, sentence: &Sentence) -> Vec<Diagnostic> {
    let index = SentenceIndex::build(sentence);
    let ctx = SentenceContext {
        sentence,
        index: &index,
    };
    check.run(&ctx)
}
