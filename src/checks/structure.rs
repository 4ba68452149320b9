use crate::diagnostics::Diagnostic;

use super::{SentenceCheck, SentenceContext};

/// Structural pre-check: tree well-formedness that every other check takes
/// for granted. Violations are reported, never fatal; tree-derived checks
/// are written to survive the malformed sentence this check flags.
pub struct StructureCheck;

impl SentenceCheck for StructureCheck {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic> {
        let sentence = ctx.sentence;
        let mut out = Vec::new();

        for (idx, node) in sentence.nodes().iter().enumerate() {
            if node.id != idx + 1 {
                out.push(ctx.sentence_error(format!(
                    "node ids are not contiguous: expected {}, found {}",
                    idx + 1,
                    node.id
                )));
                break;
            }
        }

        let roots: Vec<usize> = sentence
            .nodes()
            .iter()
            .filter(|n| n.is_root())
            .map(|n| n.id)
            .collect();
        match roots.len() {
            0 => {
                if !sentence.is_empty() {
                    out.push(ctx.sentence_error("sentence has no root node".to_string()));
                }
            }
            1 => {}
            n => out.push(ctx.sentence_error(format!(
                "sentence has {n} root nodes, expected exactly 1"
            ))),
        }

        for node in sentence.nodes() {
            if node.is_root() && node.deprel != "root" {
                out.push(ctx.node_error(
                    node.id,
                    format!("deprel for head 0 should be root, not {}", node.deprel),
                ));
            }
            if node.deprel == "root" && !node.is_root() {
                out.push(ctx.node_error(
                    node.id,
                    format!("deprel root with head {}", node.head),
                ));
            }
            if node.head > sentence.len() {
                out.push(ctx.node_error(
                    node.id,
                    format!("head {} is not a node id", node.head),
                ));
            }
        }

        if let Some(id) = find_cycle(ctx) {
            out.push(ctx.node_error(id, format!("dependency cycle involving node {id}")));
        }

        out
    }
}

/// Walks head pointers from every node; a walk that fails to terminate
/// within n steps has revisited a node.
fn find_cycle(ctx: &SentenceContext<'_>) -> Option<usize> {
    let sentence = ctx.sentence;
    let limit = sentence.len();
    for node in sentence.nodes() {
        let mut current = node.head;
        let mut steps = 0;
        while current != 0 {
            if steps >= limit {
                return Some(node.id);
            }
            match sentence.node(current) {
                Some(parent) => current = parent.head,
                None => break,
            }
            steps += 1;
        }
    }
    None
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
