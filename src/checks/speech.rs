use crate::diagnostics::Diagnostic;
use crate::model::Node;

use super::{SentenceCheck, SentenceContext};

/// Verbs of saying that take reported speech as their complement.
const SPEECH_LEMMATA: [&str; 10] = [
    "abair",
    "aidich",
    "bruidhinn",
    "cabadaich",
    "can",
    "èigh",
    "faighnich",
    "foighneach",
    "freagair",
    "inns",
];

/// Frozen quotative; attaches loosely wherever it appears.
const QUOTATIVE: &str = "arsa";

const OPEN_QUOTE_XPOS: &str = "Fq";
const CLOSE_QUOTE_XPOS: &str = "Fz";

/// Reported speech is a complement of the verb of saying, except where the
/// verb interrupts the speech: there the speech carries the root and the
/// verb attaches loosely inside it.
pub struct ReportedSpeechCheck;

impl SentenceCheck for ReportedSpeechCheck {
    fn name(&self) -> &'static str {
        "reported-speech"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let sentence = ctx.sentence;
        let mut out = Vec::new();

        let mut open: Option<usize> = None;
        let mut n_open = 0usize;
        let mut n_close = 0usize;
        let mut blocks: Vec<(usize, usize)> = Vec::new();
        let mut parataxes: Vec<&Node> = Vec::new();
        let mut root_id = 0usize;

        for (i, node) in sentence.nodes().iter().enumerate() {
            if node.deprel == "parataxis" {
                parataxes.push(node);
            }
            if node.deprel == "root" {
                root_id = node.id;
            }
            if node.xpos == OPEN_QUOTE_XPOS {
                n_open += 1;
                open = Some(node.id);
            }
            let at_end = i + 1 == sentence.len();
            if (node.xpos == CLOSE_QUOTE_XPOS || at_end)
                && let Some(q) = open.take()
            {
                n_close += 1;
                blocks.push((q, node.id));
            }
        }

        if (n_open > 1 || n_close > 1) && !parataxes.is_empty() {
            let root_in_quote = blocks.iter().any(|&(q, z)| q < root_id && root_id < z);
            if blocks.first().is_some_and(|&(q, _)| q < 2) && !root_in_quote {
                out.push(ctx.sentence_error("root should be inside quote".to_string()));
            }
        }

        // Speech that starts mid-sentence (or no speech at all) means the
        // saying verb governs it: parataxis should have been ccomp.
        if blocks.first().is_none_or(|&(q, _)| q > 2) {
            for parataxis in parataxes {
                let Some(head) = sentence.node(parataxis.head) else {
                    continue;
                };
                if SPEECH_LEMMATA.contains(&head.lemma.as_str()) && parataxis.lemma != QUOTATIVE {
                    out.push(
                        ctx.node_error(parataxis.id, "deprel should be ccomp".to_string()),
                    );
                }
            }
        }

        out
    }
}

#[cfg(test)]
#[path = "speech_tests.rs"]
mod tests;
