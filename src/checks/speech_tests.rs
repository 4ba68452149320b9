use super::super::test_support::run_sentence_check;
use super::*;
use crate::model::Upos;
use crate::model::test_fixtures::{sent, word, word_with_lemma};

#[test]
fn parataxis_under_a_saying_verb_should_be_ccomp() {
    // Thuirt e tha ... — no quotation marks anywhere
    let s = sent(vec![
        word_with_lemma(1, "Thuirt", "abair", Upos::Verb, "V-s", 0, "root"),
        word(2, "e", Upos::Pron, "Pp3sm", 1, "nsubj"),
        word_with_lemma(3, "tha", "bi", Upos::Verb, "V-p", 1, "parataxis"),
    ]);

    let diagnostics = run_sentence_check(&ReportedSpeechCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node_id, Some(3));
    assert_eq!(diagnostics[0].message, "deprel should be ccomp");
}

#[test]
fn quotative_arsa_attaches_loosely() {
    let s = sent(vec![
        word_with_lemma(1, "Thuirt", "abair", Upos::Verb, "V-s", 0, "root"),
        word(2, "e", Upos::Pron, "Pp3sm", 1, "nsubj"),
        word_with_lemma(3, "arsa", "arsa", Upos::Verb, "V", 1, "parataxis"),
    ]);

    assert!(run_sentence_check(&ReportedSpeechCheck, &s).is_empty());
}

#[test]
fn parataxis_under_other_verbs_is_fine() {
    let s = sent(vec![
        word_with_lemma(1, "Chunnaic", "faic", Upos::Verb, "V-s", 0, "root"),
        word_with_lemma(2, "tha", "bi", Upos::Verb, "V-p", 1, "parataxis"),
    ]);

    assert!(run_sentence_check(&ReportedSpeechCheck, &s).is_empty());
}

#[test]
fn quote_after_the_verb_still_wants_ccomp() {
    // Thuirt e "tha mi sgìth" — quote opens at position 3
    let s = sent(vec![
        word_with_lemma(1, "Thuirt", "abair", Upos::Verb, "V-s", 0, "root"),
        word(2, "e", Upos::Pron, "Pp3sm", 1, "nsubj"),
        word(3, "\u{201c}", Upos::Punct, "Fq", 4, "punct"),
        word_with_lemma(4, "tha", "bi", Upos::Verb, "V-p", 1, "parataxis"),
        word(5, "mi", Upos::Pron, "Pp1s", 4, "nsubj"),
        word(6, "\u{201d}", Upos::Punct, "Fz", 4, "punct"),
    ]);

    let diagnostics = run_sentence_check(&ReportedSpeechCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "deprel should be ccomp");
}

#[test]
fn interrupting_verb_inside_opening_quote_is_expected() {
    // "Tha," thuirt e, "mi sgìth." — root inside the first quote block
    let s = sent(vec![
        word(1, "\u{201c}", Upos::Punct, "Fq", 2, "punct"),
        word_with_lemma(2, "Tha", "bi", Upos::Verb, "V-p", 0, "root"),
        word(3, "\u{201d}", Upos::Punct, "Fz", 2, "punct"),
        word_with_lemma(4, "thuirt", "abair", Upos::Verb, "V-s", 2, "parataxis"),
        word(5, "e", Upos::Pron, "Pp3sm", 4, "nsubj"),
        word(6, "\u{201c}", Upos::Punct, "Fq", 7, "punct"),
        word_with_lemma(7, "sgìth", "sgìth", Upos::Adj, "Aq", 2, "parataxis"),
        word(8, "\u{201d}", Upos::Punct, "Fz", 7, "punct"),
    ]);

    let diagnostics = run_sentence_check(&ReportedSpeechCheck, &s);
    assert!(diagnostics.is_empty());
}

#[test]
fn root_outside_an_opening_quote_is_an_error() {
    let s = sent(vec![
        word(1, "\u{201c}", Upos::Punct, "Fq", 2, "punct"),
        word_with_lemma(2, "Tha", "bi", Upos::Verb, "V-p", 4, "parataxis"),
        word(3, "\u{201d}", Upos::Punct, "Fz", 2, "punct"),
        word_with_lemma(4, "thuirt", "abair", Upos::Verb, "V-s", 0, "root"),
        word(5, "e", Upos::Pron, "Pp3sm", 4, "nsubj"),
        word(6, "\u{201c}", Upos::Punct, "Fq", 7, "punct"),
        word_with_lemma(7, "sgìth", "sgìth", Upos::Adj, "Aq", 4, "parataxis"),
        word(8, "\u{201d}", Upos::Punct, "Fz", 7, "punct"),
    ]);

    let diagnostics = run_sentence_check(&ReportedSpeechCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node_id, None);
    assert_eq!(diagnostics[0].message, "root should be inside quote");
}
