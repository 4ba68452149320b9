use crate::diagnostics::{Diagnostic, Severity};
use crate::model::Upos;

use super::{NodeCheck, NodeContext};

/// The word a fixed expression hangs off must carry an `ExtPos` feature
/// giving the expression's external category.
pub struct FixedHeadExtPosCheck;

impl NodeCheck for FixedHeadExtPosCheck {
    fn name(&self) -> &'static str {
        "fixed-extpos"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if node.deprel != "fixed" {
            return Vec::new();
        }
        // Only the first word of a fixed chain looks at its head.
        if ctx.prev().is_some_and(|p| p.deprel == "fixed") {
            return Vec::new();
        }
        let Some(head) = ctx.parent() else {
            return Vec::new();
        };
        if head.feats.has("ExtPos") {
            return Vec::new();
        }
        vec![Diagnostic::node(
            Severity::Error,
            ctx.sent_id(),
            head.id,
            "head of fixed should have ExtPos feature".to_string(),
        )]
    }
}

const ALLOWED_ADVTYPES: [&str; 4] = ["Conj", "Man", "Loc", "Tim"];

pub struct AdvTypeCheck;

impl NodeCheck for AdvTypeCheck {
    fn name(&self) -> &'static str {
        "advtype"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        ctx.node
            .feats
            .values("AdvType")
            .filter(|value| !ALLOWED_ADVTYPES.contains(value))
            .map(|value| ctx.error(format!("Unrecognised AdvType {value}")))
            .collect()
    }
}

const ALLOWED_FLATTYPES: [&str; 8] = [
    "Borrow", "Date", "Top", "Num", "Redup", "Name", "Foreign", "Time",
];

/// `flat` relations are typed in the MISC column; the inventory of types is
/// closed, and an untyped bare `flat` is worth reviewing.
pub struct FlatTypeCheck;

impl NodeCheck for FlatTypeCheck {
    fn name(&self) -> &'static str {
        "flattype"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        let mut out: Vec<Diagnostic> = node
            .misc
            .values("FlatType")
            .filter(|value| !ALLOWED_FLATTYPES.contains(value))
            .map(|value| ctx.error(format!("Unrecognised FlatType {value}")))
            .collect();

        if node.deprel == "flat" && !node.misc.has("FlatType") {
            out.push(ctx.info(
                "should be flat:name or flat:foreign, or FlatType should be specified".to_string(),
            ));
        }
        out
    }
}

/// Anonymisation placeholders must be declared as such in MISC.
pub struct AnonymisedCheck;

impl NodeCheck for AnonymisedCheck {
    fn name(&self) -> &'static str {
        "anonymised"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if !matches!(node.lemma.as_str(), "[Name]" | "[Placename]") {
            return Vec::new();
        }
        if node.misc.has("Anonymised") {
            return Vec::new();
        }
        vec![ctx.error("Anonymised=Yes missing from MISC column".to_string())]
    }
}

/// An XPOS that merely repeats the UPOS, with no features, is a placeholder
/// left over from pre-annotation.
pub struct PlaceholderXposCheck;

impl NodeCheck for PlaceholderXposCheck {
    fn name(&self) -> &'static str {
        "placeholder-xpos"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if node.xpos == node.upos.as_str() && node.feats.is_empty() {
            return vec![ctx.error(format!(
                "XPOS {} should not match UPOS if feats is empty",
                node.xpos
            ))];
        }
        Vec::new()
    }
}

pub struct NounTypeCheck;

impl NodeCheck for NounTypeCheck {
    fn name(&self) -> &'static str {
        "nountype"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        let mut out = Vec::new();
        if node.upos == Upos::Propn && !node.feats.has("NounType") {
            out.push(ctx.error("PROPN should have NounType feature".to_string()));
        }
        if node.feats.has("NounType") && !matches!(node.upos, Upos::Noun | Upos::Propn) {
            out.push(ctx.error("NounType is only for NOUN or PROPN".to_string()));
        }
        out
    }
}

/// A bare `obl` or `nmod` with no adposition introducing it must say so
/// explicitly; the marker is an error when a case dependent is present
/// after all.
pub struct UnmarkedOblCheck;

impl NodeCheck for UnmarkedOblCheck {
    fn name(&self) -> &'static str {
        "unmarked-obl"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if !matches!(node.deprel.as_str(), "obl" | "nmod") {
            return Vec::new();
        }
        let has_case_child = ctx.index.case_heads.contains(&node.id);
        let marked = node.misc.contains("OblType", "Unmarked");

        if !has_case_child && !marked {
            return vec![ctx.warning(format!(
                "{} without a case dependent should have OblType=Unmarked",
                node.deprel
            ))];
        }
        if has_case_child && marked {
            return vec![ctx.error(
                "OblType=Unmarked on a node with a case dependent".to_string(),
            )];
        }
        Vec::new()
    }
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
