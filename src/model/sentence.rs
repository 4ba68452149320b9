use serde::Serialize;

use super::Node;

/// Multiword span token: a surface contraction covering the real word ids
/// `from..=to`. Spans exist in the surface form only and are never visited by
/// node-scoped checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanToken {
    pub from: usize,
    pub to: usize,
    pub form: String,
}

/// One annotated sentence: real words in ascending id order plus the
/// multiword spans covering some of them.
///
/// Derived indices (`children`, `prev`/`next`) are built once at construction
/// in O(n). The structure tolerates malformed trees (dangling heads, duplicate
/// roots, cycles) so that the structural pre-check can report them without any
/// accessor panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    sent_id: String,
    newdoc: bool,
    nodes: Vec<Node>,
    spans: Vec<SpanToken>,
    /// Child ids in ascending order, indexed by head id (slot 0 = root edges).
    children: Vec<Vec<usize>>,
}

impl Sentence {
    #[must_use]
    pub fn new(sent_id: String, newdoc: bool, nodes: Vec<Node>, spans: Vec<SpanToken>) -> Self {
        let mut children = vec![Vec::new(); nodes.len() + 1];
        for node in &nodes {
            if let Some(slot) = children.get_mut(node.head) {
                slot.push(node.id);
            }
        }
        Self {
            sent_id,
            newdoc,
            nodes,
            spans,
            children,
        }
    }

    #[must_use]
    pub fn sent_id(&self) -> &str {
        &self.sent_id
    }

    /// Whether this sentence opens a new logical sub-document.
    #[must_use]
    pub const fn is_newdoc(&self) -> bool {
        self.newdoc
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node by id. Falls back to a scan when ids are not contiguous, so the
    /// accessor stays correct on sentences the pre-check will flag.
    #[must_use]
    pub fn node(&self, id: usize) -> Option<&Node> {
        if id == 0 {
            return None;
        }
        match self.nodes.get(id - 1) {
            Some(node) if node.id == id => Some(node),
            _ => self.nodes.iter().find(|n| n.id == id),
        }
    }

    /// Ids of the nodes whose head is `id`, ascending. `id` 0 yields the
    /// root-attached nodes.
    #[must_use]
    pub fn children(&self, id: usize) -> &[usize] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// The linearly preceding real word, or none at the sentence start.
    #[must_use]
    pub fn prev(&self, id: usize) -> Option<&Node> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        idx.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    /// The linearly following real word, or none at the sentence end.
    #[must_use]
    pub fn next(&self, id: usize) -> Option<&Node> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        self.nodes.get(idx + 1)
    }

    /// The unique root node, when the sentence is well formed.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        let mut roots = self.nodes.iter().filter(|n| n.is_root());
        let first = roots.next()?;
        if roots.next().is_some() {
            return None;
        }
        Some(first)
    }

    #[must_use]
    pub fn spans(&self) -> &[SpanToken] {
        &self.spans
    }

    /// The multiword span covering `id`, if any.
    #[must_use]
    pub fn span_covering(&self, id: usize) -> Option<&SpanToken> {
        self.spans.iter().find(|s| s.from <= id && id <= s.to)
    }
}

/// An ordered run of sentences, read-only during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    #[must_use]
    pub const fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
#[path = "sentence_tests.rs"]
mod tests;
