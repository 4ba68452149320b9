use crate::diagnostics::Diagnostic;
use crate::lexicon::{FixedLexicon, normalize};

use super::{SentenceCheck, SentenceContext};

/// Words linked by `fixed` must form a known fixed expression: the word
/// itself must continue some listed expression, and the word before it must
/// be an allowed predecessor.
pub struct FixedInventoryCheck {
    lexicon: FixedLexicon,
}

impl FixedInventoryCheck {
    #[must_use]
    pub const fn new(lexicon: FixedLexicon) -> Self {
        Self { lexicon }
    }
}

impl SentenceCheck for FixedInventoryCheck {
    fn name(&self) -> &'static str {
        "fixed-inventory"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for node in ctx.sentence.nodes() {
            if node.deprel != "fixed" {
                continue;
            }
            let form = normalize(node.effective_form());
            if !self.lexicon.known_continuation(&form) {
                out.push(ctx.node_error(
                    node.id,
                    format!("'{}' not in fixed list", node.form),
                ));
                continue;
            }
            let Some(prev) = ctx.sentence.prev(node.id) else {
                continue;
            };
            if !self.lexicon.allows(&form, &normalize(prev.effective_form())) {
                out.push(ctx.node_error(
                    node.id,
                    format!("'{} {}' not in fixed list", prev.form, node.form),
                ));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "fixed_tests.rs"]
mod tests;
