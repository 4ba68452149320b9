use indexmap::IndexMap;

use crate::diagnostics::Diagnostic;
use crate::model::{Node, Sentence, Upos};

use super::{SentenceCheck, SentenceContext};

fn child_nodes<'a>(sentence: &'a Sentence, head: usize) -> impl Iterator<Item = &'a Node> {
    sentence
        .children(head)
        .iter()
        .filter_map(|&id| sentence.node(id))
}

fn format_pairs(pairs: &[(usize, &str)]) -> String {
    let inner: Vec<String> = pairs
        .iter()
        .map(|(id, deprel)| format!("{id}:{deprel}"))
        .collect();
    format!("[{}]", inner.join(", "))
}

/// Core argument relations that may occur at most once under a head.
const SINGLE_USE: [&str; 3] = ["nsubj", "obj", "xcomp:pred"];

pub struct MultiplesCheck;

impl SentenceCheck for MultiplesCheck {
    fn name(&self) -> &'static str {
        "multiples"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut counts: IndexMap<(usize, &str), usize> = IndexMap::new();
        for node in ctx.sentence.nodes() {
            if SINGLE_USE.contains(&node.deprel.as_str()) {
                *counts.entry((node.head, node.deprel.as_str())).or_insert(0) += 1;
            }
        }
        counts
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(&(head, deprel), &count)| {
                ctx.sentence_error(format!(
                    "Count for {deprel} on node {head} is {count} not 0 or 1"
                ))
            })
            .collect()
    }
}

/// Relations that, under a copula head, should have been a clausal subject.
const CSUBJ_CANDIDATES: [&str; 4] = ["xcomp", "acl", "ccomp", "acl:relcl"];

/// Relations that satisfy the copula head's need for a subject.
const CSUBJ_SUBJECTS: [&str; 3] = ["csubj:cleft", "csubj:cop", "nsubj"];

/// A head of `cop` taking clausal material must mark one piece of it as its
/// clausal subject.
pub struct CopulaSubjectCheck;

impl SentenceCheck for CopulaSubjectCheck {
    fn name(&self) -> &'static str {
        "copula-subject"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for &head in &ctx.index.cop_heads {
            let mut candidates: Vec<(usize, &str)> = Vec::new();
            let mut has_subject = false;
            for child in child_nodes(ctx.sentence, head) {
                let deprel = child.deprel.as_str();
                if CSUBJ_SUBJECTS.contains(&deprel) {
                    has_subject = true;
                } else if CSUBJ_CANDIDATES.contains(&deprel) {
                    candidates.push((child.id, deprel));
                }
            }
            if !candidates.is_empty() && !has_subject {
                out.push(ctx.node_error(
                    head,
                    format!(
                        "head of cop should have a csubj:* among {}",
                        format_pairs(&candidates)
                    ),
                ));
            }
        }
        out
    }
}

/// `CleftType` belongs on cleft heads only.
pub struct CleftTypeCheck;

impl SentenceCheck for CleftTypeCheck {
    fn name(&self) -> &'static str {
        "cleft-type"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for &head in &ctx.index.cop_heads {
            let Some(node) = ctx.sentence.node(head) else {
                continue;
            };
            if node.feats.has("CleftType") && !ctx.index.cleft_heads.contains(&head) {
                out.push(ctx.node_error(
                    head,
                    "is not a cleft and should not have CleftType".to_string(),
                ));
            }
        }
        out
    }
}

/// Whether a child of _bi_ could be carrying its predicate.
///
/// Adverbs only qualify when locational; obliques qualify unless their
/// `OblType` says otherwise.
fn possible_predicate(node: &Node) -> bool {
    match node.deprel.as_str() {
        "xcomp" | "obl:smod" | "xcomp:pred" => true,
        "advmod" => node.feats.contains("AdvType", "Loc"),
        "obl" => !node.misc.has("OblType") || node.misc.contains("OblType", "Loc"),
        _ => false,
    }
}

/// The substantive verb _bi_ takes its predicate as `xcomp:pred`, and never
/// takes a direct object.
pub struct BiPredicateCheck;

impl SentenceCheck for BiPredicateCheck {
    fn name(&self) -> &'static str {
        "bi-predicate"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for head in ctx.sentence.nodes() {
            if head.lemma != "bi" {
                continue;
            }
            let mut candidates: Vec<(usize, &str)> = Vec::new();
            let mut has_pred = false;
            let mut bare_obj = false;
            for child in child_nodes(ctx.sentence, head.id) {
                if possible_predicate(child) {
                    candidates.push((child.id, child.deprel.as_str()));
                    if child.deprel == "xcomp:pred" {
                        has_pred = true;
                    }
                }
                if child.deprel == "obj" && child.upos != Upos::Part {
                    bare_obj = true;
                }
            }
            if !candidates.is_empty() && !has_pred {
                out.push(ctx.node_error(
                    head.id,
                    format!(
                        "bi should have an xcomp:pred among {}",
                        format_pairs(&candidates)
                    ),
                ));
            }
            if bare_obj {
                out.push(ctx.node_error(head.id, "bi should not have obj".to_string()));
            }
        }
        out
    }
}

/// Deprecated passive pattern: _rach_ heading an infinitive. The infinitive
/// should head the clause with _rach_ attached as a passive auxiliary.
/// "Go to do" constructions (an `aig` oblique) are genuine motion, not
/// passives.
pub struct PassiveCheck;

impl SentenceCheck for PassiveCheck {
    fn name(&self) -> &'static str {
        "passive"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for head in ctx.sentence.nodes() {
            if head.lemma != "rach" || head.upos == Upos::Noun {
                continue;
            }
            let children: Vec<&Node> = child_nodes(ctx.sentence, head.id).collect();
            let has_xcomp = children.iter().any(|c| c.deprel == "xcomp");
            let has_nsubj = children.iter().any(|c| c.deprel == "nsubj");
            if !has_xcomp || has_nsubj {
                continue;
            }
            let rach_aig = children.iter().any(|c| {
                c.deprel == "obl"
                    && ctx.index.adposition_by_head.get(&c.id).map(String::as_str) == Some("aig")
            });
            if rach_aig {
                continue;
            }
            for child in children {
                if child.deprel == "xcomp" {
                    out.push(ctx.node_error(
                        child.id,
                        format!("'{}' should be the head", child.form),
                    ));
                }
            }
        }
        out
    }
}

const RELATIVE_XPOS: [&str; 2] = ["Q-r", "Qnr"];
const INTERROGATIVE_LEMMATA: [&str; 3] = ["carson", "ciamar", "cuin'"];

/// The relative particle's relation depends on what precedes it; where the
/// context allows several readings, suggest the missing core argument.
pub struct RelativeParticleCheck;

impl SentenceCheck for RelativeParticleCheck {
    fn name(&self) -> &'static str {
        "relative-particle"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let mut suggest_heads: Vec<usize> = Vec::new();
        for node in ctx.sentence.nodes() {
            if !RELATIVE_XPOS.contains(&node.xpos.as_str()) || node.deprel != "mark:prt" {
                continue;
            }
            let Some(prev) = ctx.sentence.prev(node.id) else {
                continue;
            };
            if prev.upos == Upos::Adp {
                out.push(ctx.node_error(
                    node.id,
                    format!("deprel for '{}' should be obl, nmod or xcomp:pred", node.form),
                ));
            } else if INTERROGATIVE_LEMMATA.contains(&prev.lemma.as_str()) {
                out.push(ctx.node_error(
                    node.id,
                    format!("deprel for '{}' should be advmod or xcomp:pred", node.form),
                ));
            } else if !matches!(prev.upos, Upos::Cconj | Upos::Sconj) {
                out.push(ctx.node_error(
                    node.id,
                    format!("deprel for '{}' should usually be nsubj or obj", node.form),
                ));
                if !suggest_heads.contains(&node.head) {
                    suggest_heads.push(node.head);
                }
            }
        }
        for head in suggest_heads {
            let deprels: Vec<&str> = child_nodes(ctx.sentence, head)
                .map(|c| c.deprel.as_str())
                .collect();
            let suggestion = if deprels.contains(&"nsubj") {
                "obj"
            } else {
                "nsubj"
            };
            out.push(ctx.node_info(
                head,
                format!("children are [{}]; suggestion: {suggestion}", deprels.join(", ")),
            ));
        }
        out
    }
}

const CLAUSE_DEPRELS: [&str; 3] = ["ccomp", "advcl", "acl:relcl"];

/// `mark` and `mark:prt` determine how the clause they sit in attaches:
/// a plain subordinator forces advcl; a complementiser particle ccomp; a
/// relative particle acl:relcl.
pub struct ClauseMarkingCheck;

impl SentenceCheck for ClauseMarkingCheck {
    fn name(&self) -> &'static str {
        "clause-marking"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for head in ctx.sentence.nodes() {
            if !CLAUSE_DEPRELS.contains(&head.deprel.as_str()) {
                continue;
            }
            let children: Vec<&Node> = child_nodes(ctx.sentence, head.id).collect();
            if children.iter().any(|c| c.deprel == "mark") {
                if head.deprel != "advcl" {
                    out.push(ctx.node_warning(head.id, "deprel should be advcl".to_string()));
                }
                continue;
            }
            for child in children {
                if child.deprel != "mark:prt" {
                    continue;
                }
                if child.feats.contains("PartType", "Cmpl") && head.deprel != "ccomp" {
                    out.push(ctx.node_warning(head.id, "deprel should be ccomp".to_string()));
                }
                if child.feats.contains("PronType", "Rel") && head.deprel != "acl:relcl" {
                    out.push(ctx.node_warning(head.id, "deprel should be acl:relcl".to_string()));
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "subtree_tests.rs"]
mod tests;
