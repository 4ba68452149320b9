//! Shared test fixtures for building sentences by hand.
//!
//! Used across the model, check and engine test modules.

use super::{AttrBag, Node, Sentence, SpanToken, Upos};

/// A word whose lemma equals its form and whose feats/misc are empty.
#[must_use]
pub fn word(id: usize, form: &str, upos: Upos, xpos: &str, head: usize, deprel: &str) -> Node {
    Node {
        id,
        form: form.to_string(),
        lemma: form.to_string(),
        upos,
        xpos: xpos.to_string(),
        head,
        deprel: deprel.to_string(),
        feats: AttrBag::new(),
        misc: AttrBag::new(),
    }
}

#[must_use]
pub fn word_with_lemma(
    id: usize,
    form: &str,
    lemma: &str,
    upos: Upos,
    xpos: &str,
    head: usize,
    deprel: &str,
) -> Node {
    let mut node = word(id, form, upos, xpos, head, deprel);
    node.lemma = lemma.to_string();
    node
}

#[must_use]
pub fn with_feat(mut node: Node, key: &str, value: &str) -> Node {
    node.feats.insert(key, value);
    node
}

#[must_use]
pub fn with_misc(mut node: Node, key: &str, value: &str) -> Node {
    node.misc.insert(key, value);
    node
}

/// A sentence carrying the newdoc flag, so boundary checks stay quiet.
#[must_use]
pub fn sent(nodes: Vec<Node>) -> Sentence {
    Sentence::new("a01_001".to_string(), true, nodes, Vec::new())
}

#[must_use]
pub fn sent_with_id(sent_id: &str, newdoc: bool, nodes: Vec<Node>) -> Sentence {
    Sentence::new(sent_id.to_string(), newdoc, nodes, Vec::new())
}

#[must_use]
pub fn sent_with_spans(nodes: Vec<Node>, spans: Vec<SpanToken>) -> Sentence {
    Sentence::new("a01_001".to_string(), true, nodes, spans)
}

/// `Chunnaic Calum cù` — a VERB root with one nsubj and one obj, both nominal.
#[must_use]
pub fn simple_clause() -> Sentence {
    sent(vec![
        word_with_lemma(1, "Chunnaic", "faic", Upos::Verb, "V-s", 0, "root"),
        with_feat(word(2, "Calum", Upos::Propn, "Nn", 1, "nsubj"), "NounType", "Prs"),
        word_with_lemma(3, "cù", "cù", Upos::Noun, "Ncsmn", 1, "obj"),
    ])
}
