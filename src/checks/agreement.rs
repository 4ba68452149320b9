use indexmap::IndexMap;

use crate::diagnostics::{Diagnostic, Severity};
use crate::model::Upos;

use super::{NodeCheck, NodeContext, SentenceCheck, SentenceContext};

fn join(categories: &[Upos]) -> String {
    categories
        .iter()
        .map(|u| u.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Categories a dependent of the given relation may carry.
fn allowed_dependents(deprel: &str) -> Option<&'static [Upos]> {
    match deprel {
        "amod" => Some(&[Upos::Adj]),
        "flat:name" => Some(&[Upos::Adj, Upos::Det, Upos::Num, Upos::Part, Upos::Propn]),
        "nmod" => Some(&[
            Upos::Noun,
            Upos::Num,
            Upos::Part,
            Upos::Pron,
            Upos::Propn,
            Upos::X,
        ]),
        _ => None,
    }
}

pub struct DependentCategoryCheck;

impl NodeCheck for DependentCategoryCheck {
    fn name(&self) -> &'static str {
        "dependent-category"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        let Some(allowed) = allowed_dependents(&node.deprel) else {
            return Vec::new();
        };
        if allowed.contains(&node.upos) || node.feats.has("ExtPos") {
            return Vec::new();
        }
        vec![ctx.error(format!(
            "UPOS for {} must be one of ({}) not {}",
            node.deprel,
            join(allowed),
            node.upos
        ))]
    }
}

/// Categories a head of the given relation may carry.
fn allowed_heads(deprel: &str) -> Option<&'static [Upos]> {
    match deprel {
        "acl" => Some(&[Upos::Noun]),
        "acl:relcl" => Some(&[Upos::Noun, Upos::Num, Upos::Part, Upos::Pron, Upos::Propn]),
        "advcl:relcl" => Some(&[Upos::Adj, Upos::Adv, Upos::Verb]),
        "obl" | "obl:smod" | "obl:tmod" => Some(&[Upos::Verb, Upos::Adj, Upos::Adv]),
        "nmod" | "appos" => Some(&[
            Upos::Noun,
            Upos::Num,
            Upos::Pron,
            Upos::Propn,
            Upos::Sym,
            Upos::X,
        ]),
        _ => None,
    }
}

/// Validates that e.g. `obl` is headed by something verbal and `nmod` by
/// something nominal. Heads carrying `VerbForm` are exempt.
pub struct HeadCategoryCheck;

impl SentenceCheck for HeadCategoryCheck {
    fn name(&self) -> &'static str {
        "head-category"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut constrained: IndexMap<usize, (&str, usize)> = IndexMap::new();
        for node in ctx.sentence.nodes() {
            if allowed_heads(&node.deprel).is_some() && node.head != 0 {
                constrained.insert(node.head, (node.deprel.as_str(), node.id));
            }
        }

        let mut out = Vec::new();
        for node in ctx.sentence.nodes() {
            let Some(&(deprel, dep_id)) = constrained.get(&node.id) else {
                continue;
            };
            if node.feats.has("VerbForm") {
                continue;
            }
            if let Some(allowed) = allowed_heads(deprel)
                && !allowed.contains(&node.upos)
            {
                out.push(ctx.node_error(
                    node.id,
                    format!(
                        "head of {} (node {}) must be one of ({}) not {}",
                        deprel,
                        dep_id,
                        join(allowed),
                        node.upos
                    ),
                ));
            }
            if node.form == "ais" {
                out.push(ctx.node_error(node.id, "'ais' should not be a head".to_string()));
            }
        }
        out
    }
}

/// Relations the head of a `cc` or `case` dependent may itself attach by.
fn allowed_attachments(deprel: &str) -> Option<&'static [&'static str]> {
    match deprel {
        "cc" => Some(&["conj"]),
        "case" => Some(&[
            "dep",
            "obl",
            "advmod",
            "nmod",
            "nummod",
            "xcomp",
            "xcomp:pred",
            "ccomp",
            "acl",
            "acl:relcl",
            "conj",
            "csubj:cop",
        ]),
        _ => None,
    }
}

/// Attachments that are acceptable for any constrained head.
const ATTACHMENT_EXTRAS: [&str; 5] = ["root", "parataxis", "reparandum", "appos", "orphan"];

pub struct HeadAttachmentCheck;

impl NodeCheck for HeadAttachmentCheck {
    fn name(&self) -> &'static str {
        "head-attachment"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        let Some(allowed) = allowed_attachments(&node.deprel) else {
            return Vec::new();
        };
        // Clefted expressions attach freely.
        if node.deprel == "case" && node.feats.has("CleftType") {
            return Vec::new();
        }
        let Some(head) = ctx.parent() else {
            return Vec::new();
        };
        if allowed.contains(&head.deprel.as_str())
            || ATTACHMENT_EXTRAS.contains(&head.deprel.as_str())
        {
            return Vec::new();
        }

        let mut all: Vec<&str> = allowed.to_vec();
        all.extend_from_slice(&ATTACHMENT_EXTRAS);
        vec![Diagnostic::node(
            Severity::Error,
            ctx.sent_id(),
            head.id,
            format!(
                "target of {} must be one of ({}) not {}",
                node.deprel,
                all.join(", "),
                head.deprel
            ),
        )]
    }
}

#[cfg(test)]
#[path = "agreement_tests.rs"]
mod tests;
