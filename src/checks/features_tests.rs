use super::super::test_support::run_node_check;
use super::*;
use crate::diagnostics::Severity;
use crate::model::test_fixtures::{sent, with_feat, with_misc, word};

#[test]
fn fixed_head_needs_extpos() {
    // "an dèidh" as a complex preposition hanging off its head word
    let s = sent(vec![
        word(1, "dh'fhalbh", Upos::Verb, "V-s", 0, "root"),
        word(2, "an", Upos::Adp, "Sp", 1, "obl"),
        word(3, "dèidh", Upos::Noun, "Ncsfd", 2, "fixed"),
    ]);

    let diagnostics = run_node_check(&FixedHeadExtPosCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node_id, Some(2));
    assert_eq!(diagnostics[0].message, "head of fixed should have ExtPos feature");
}

#[test]
fn fixed_head_with_extpos_passes() {
    let s = sent(vec![
        word(1, "dh'fhalbh", Upos::Verb, "V-s", 0, "root"),
        with_feat(word(2, "an", Upos::Adp, "Sp", 1, "obl"), "ExtPos", "ADP"),
        word(3, "dèidh", Upos::Noun, "Ncsfd", 2, "fixed"),
    ]);

    assert!(run_node_check(&FixedHeadExtPosCheck, &s).is_empty());
}

#[test]
fn only_the_first_word_of_a_chain_checks_its_head() {
    let s = sent(vec![
        word(1, "dh'fhalbh", Upos::Verb, "V-s", 0, "root"),
        word(2, "a", Upos::Adp, "Sp", 1, "obl"),
        word(3, "thaobh", Upos::Noun, "Ncsmd", 2, "fixed"),
        word(4, "'s", Upos::Cconj, "Cc", 2, "fixed"),
    ]);

    // one error for the chain, not one per link
    let diagnostics = run_node_check(&FixedHeadExtPosCheck, &s);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn unrecognised_advtype_is_an_error() {
    let s = sent(vec![with_feat(
        word(1, "a-muigh", Upos::Adv, "Rg", 0, "root"),
        "AdvType",
        "Dir",
    )]);

    let diagnostics = run_node_check(&AdvTypeCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Unrecognised AdvType Dir");
}

#[test]
fn known_advtypes_pass() {
    for advtype in ["Conj", "Man", "Loc", "Tim"] {
        let s = sent(vec![with_feat(
            word(1, "a-muigh", Upos::Adv, "Rg", 0, "root"),
            "AdvType",
            advtype,
        )]);
        assert!(run_node_check(&AdvTypeCheck, &s).is_empty(), "{advtype}");
    }
}

#[test]
fn unrecognised_flattype_is_an_error() {
    let s = sent(vec![with_misc(
        word(1, "Alba", Upos::Propn, "Nt", 0, "root"),
        "FlatType",
        "Country",
    )]);

    let diagnostics = run_node_check(&FlatTypeCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].message, "Unrecognised FlatType Country");
}

#[test]
fn untyped_flat_is_informational() {
    let s = sent(vec![
        word(1, "Loch", Upos::Propn, "Nt", 0, "root"),
        word(2, "Obha", Upos::Propn, "Nt", 1, "flat"),
    ]);

    let diagnostics = run_node_check(&FlatTypeCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Info);
    assert_eq!(diagnostics[0].node_id, Some(2));
}

#[test]
fn typed_flat_is_quiet() {
    let s = sent(vec![
        word(1, "Loch", Upos::Propn, "Nt", 0, "root"),
        with_misc(word(2, "Obha", Upos::Propn, "Nt", 1, "flat"), "FlatType", "Top"),
    ]);

    assert!(run_node_check(&FlatTypeCheck, &s).is_empty());
}

#[test]
fn anonymised_placeholder_needs_misc_marker() {
    let s = sent(vec![word_with_name_lemma(false)]);
    let diagnostics = run_node_check(&AnonymisedCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Anonymised=Yes missing from MISC column");

    let s = sent(vec![word_with_name_lemma(true)]);
    assert!(run_node_check(&AnonymisedCheck, &s).is_empty());
}

fn word_with_name_lemma(marked: bool) -> crate::model::Node {
    let mut node = word(1, "Seumas", Upos::Propn, "Nn", 0, "root");
    node.lemma = "[Name]".to_string();
    if marked {
        node.misc.insert("Anonymised", "Yes");
    }
    node
}

#[test]
fn placeholder_xpos_with_empty_feats_is_an_error() {
    let s = sent(vec![word(1, "rud", Upos::Noun, "NOUN", 0, "root")]);

    let diagnostics = run_node_check(&PlaceholderXposCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "XPOS NOUN should not match UPOS if feats is empty"
    );
}

#[test]
fn placeholder_xpos_with_feats_is_tolerated() {
    let s = sent(vec![with_feat(
        word(1, "rud", Upos::Noun, "NOUN", 0, "root"),
        "Case",
        "Nom",
    )]);

    assert!(run_node_check(&PlaceholderXposCheck, &s).is_empty());
}

#[test]
fn propn_needs_nountype() {
    let s = sent(vec![word(1, "Mòrag", Upos::Propn, "Nn", 0, "root")]);

    let diagnostics = run_node_check(&NounTypeCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "PROPN should have NounType feature");
}

#[test]
fn nountype_on_a_verb_is_an_error() {
    let s = sent(vec![with_feat(
        word(1, "ruith", Upos::Verb, "V-s", 0, "root"),
        "NounType",
        "Prs",
    )]);

    let diagnostics = run_node_check(&NounTypeCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "NounType is only for NOUN or PROPN");
}

#[test]
fn bare_obl_without_case_child_warns() {
    let s = sent(vec![
        word(1, "bha", Upos::Verb, "V-s", 0, "root"),
        word(2, "madainn", Upos::Noun, "Ncsfd", 1, "obl"),
    ]);

    let diagnostics = run_node_check(&UnmarkedOblCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(
        diagnostics[0].message,
        "obl without a case dependent should have OblType=Unmarked"
    );
}

#[test]
fn obl_with_case_child_is_quiet() {
    let s = sent(vec![
        word(1, "bha", Upos::Verb, "V-s", 0, "root"),
        word(2, "anns", Upos::Adp, "Sp", 3, "case"),
        word(3, "madainn", Upos::Noun, "Ncsfd", 1, "obl"),
    ]);

    assert!(run_node_check(&UnmarkedOblCheck, &s).is_empty());
}

#[test]
fn unmarked_obl_with_marker_is_quiet() {
    let s = sent(vec![
        word(1, "bha", Upos::Verb, "V-s", 0, "root"),
        with_misc(word(2, "madainn", Upos::Noun, "Ncsfd", 1, "obl"), "OblType", "Unmarked"),
    ]);

    assert!(run_node_check(&UnmarkedOblCheck, &s).is_empty());
}

#[test]
fn marker_alongside_case_child_is_an_error() {
    let s = sent(vec![
        word(1, "bha", Upos::Verb, "V-s", 0, "root"),
        word(2, "anns", Upos::Adp, "Sp", 3, "case"),
        with_misc(word(3, "madainn", Upos::Noun, "Ncsfd", 1, "obl"), "OblType", "Unmarked"),
    ]);

    let diagnostics = run_node_check(&UnmarkedOblCheck, &s);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        diagnostics[0].message,
        "OblType=Unmarked on a node with a case dependent"
    );
}

#[test]
fn subtyped_obl_is_exempt() {
    let s = sent(vec![
        word(1, "bha", Upos::Verb, "V-s", 0, "root"),
        word(2, "an-diugh", Upos::Adv, "Rt", 1, "obl:tmod"),
    ]);

    assert!(run_node_check(&UnmarkedOblCheck, &s).is_empty());
}
