use indexmap::IndexMap;

use crate::diagnostics::Diagnostic;
use crate::model::Upos;

use super::{NodeCheck, NodeContext};

/// Relations that in Gaelic word order point from a dependent back to an
/// earlier head.
const LEFTWARD_ONLY: [&str; 3] = ["acl:relcl", "flat", "fixed"];

/// Relations that point forward to a later head.
const RIGHTWARD_ONLY: [&str; 5] = ["case", "cc", "cop", "mark", "nummod"];

/// Numeral words that legitimately follow what they quantify.
const NUMERAL_EXCEPTIONS: [&str; 2] = ["ceud", "fichead"];

/// Numeral particle tag; a preceding one licenses a leftward `nummod`.
const NUMERAL_PARTICLE_XPOS: &str = "Uo";

pub struct DirectionCheck;

impl NodeCheck for DirectionCheck {
    fn name(&self) -> &'static str {
        "direction"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        let deprel = node.deprel.as_str();
        let mut out = Vec::new();

        if LEFTWARD_ONLY.contains(&deprel) && node.head > node.id {
            out.push(ctx.warning(format!("{deprel} goes wrong way (usually) for gd")));
        }

        if RIGHTWARD_ONLY.contains(&deprel)
            && node.head != 0
            && node.head < node.id
            && !ctx.prev().is_some_and(|p| p.xpos == NUMERAL_PARTICLE_XPOS)
            && !NUMERAL_EXCEPTIONS.contains(&node.form.as_str())
            && ctx.parent().is_some_and(|h| h.upos != Upos::Sym)
        {
            out.push(ctx.error(format!("{deprel} goes wrong way for gd")));
        }

        out
    }
}

/// Attachment relations expected to span only a short linear distance.
pub struct SpanLengthCheck {
    thresholds: IndexMap<String, usize>,
}

impl SpanLengthCheck {
    #[must_use]
    pub fn new() -> Self {
        let mut thresholds = IndexMap::new();
        thresholds.insert("compound".to_string(), 2);
        thresholds.insert("det".to_string(), 3);
        thresholds.insert("fixed".to_string(), 2);
        thresholds.insert("flat".to_string(), 4);
        Self { thresholds }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &IndexMap<String, usize>) -> Self {
        for (deprel, threshold) in overrides {
            self.thresholds.insert(deprel.clone(), *threshold);
        }
        self
    }
}

impl Default for SpanLengthCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeCheck for SpanLengthCheck {
    fn name(&self) -> &'static str {
        "span-length"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        let Some(&threshold) = self.thresholds.get(node.deprel.as_str()) else {
            return Vec::new();
        };

        let distance = node.id.abs_diff(node.head);
        if distance <= threshold {
            return Vec::new();
        }

        // A chain of same-relation attachments is flagged once, on the word
        // that opens it.
        let Some(prev) = ctx.prev() else {
            return Vec::new();
        };
        if prev.deprel == node.deprel {
            return Vec::new();
        }

        let message = format!("Too long a range ({distance}) for {}", node.deprel);
        if distance <= threshold + 3 {
            vec![ctx.warning(message)]
        } else {
            vec![ctx.error(message)]
        }
    }
}

/// Categories allowed as subject or (rightward) object.
const NOMINAL: [Upos; 7] = [
    Upos::Noun,
    Upos::Part,
    Upos::Pron,
    Upos::Propn,
    Upos::Num,
    Upos::Sym,
    Upos::X,
];

pub struct ArgumentCategoryCheck;

impl NodeCheck for ArgumentCategoryCheck {
    fn name(&self) -> &'static str {
        "argument-category"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if !matches!(node.deprel.as_str(), "nsubj" | "obj") {
            return Vec::new();
        }
        if node.head >= node.id || NOMINAL.contains(&node.upos) || node.feats.has("ExtPos") {
            return Vec::new();
        }
        vec![ctx.error(
            "nsubj and (rightward) obj should only be for NOUN, PART, PRON, PROPN, NUM, SYM or X"
                .to_string(),
        )]
    }
}

#[cfg(test)]
#[path = "ranges_tests.rs"]
mod tests;
