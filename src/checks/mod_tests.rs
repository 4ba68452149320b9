use super::*;
use crate::model::Upos;
use crate::model::test_fixtures::{sent, word, word_with_lemma};

fn copula_sentence() -> crate::model::Sentence {
    sent(vec![
        word_with_lemma(1, "is", "is", Upos::Aux, "Wp-i", 3, "cop"),
        word(2, "e", Upos::Pron, "Pp3sm", 3, "nsubj"),
        word(3, "sgoilear", Upos::Noun, "Ncsmn", 0, "root"),
        word_with_lemma(4, "aig", "aig", Upos::Adp, "Sp", 5, "case"),
        word(5, "sgoil", Upos::Noun, "Ncsfd", 3, "nmod"),
        word(6, "a", Upos::Part, "Q-r", 7, "mark:prt"),
        word(7, "tha", Upos::Verb, "V-p", 3, "csubj:cleft"),
    ])
}

#[test]
fn index_collects_cop_and_case_heads() {
    let s = copula_sentence();
    let index = SentenceIndex::build(&s);

    assert!(index.cop_heads.contains(&3));
    assert_eq!(index.cop_heads.len(), 1);
    assert!(index.case_heads.contains(&5));
    assert!(index.cleft_heads.contains(&3));
    assert_eq!(
        index.adposition_by_head.get(&5).map(String::as_str),
        Some("aig")
    );
}

#[test]
fn index_keeps_first_adposition_per_head() {
    let s = sent(vec![
        word(1, "taigh", Upos::Noun, "Ncsmn", 0, "root"),
        word_with_lemma(2, "aig", "aig", Upos::Adp, "Sp", 1, "case"),
        word_with_lemma(3, "ri", "ri", Upos::Adp, "Sp", 1, "case"),
    ]);
    let index = SentenceIndex::build(&s);

    assert_eq!(
        index.adposition_by_head.get(&1).map(String::as_str),
        Some("aig")
    );
}

#[test]
fn node_context_exposes_the_neighbourhood() {
    let s = copula_sentence();
    let index = SentenceIndex::build(&s);
    let ctx = NodeContext {
        sentence: &s,
        node: &s.nodes()[1],
        index: &index,
    };

    assert_eq!(ctx.prev().map(|n| n.id), Some(1));
    assert_eq!(ctx.next().map(|n| n.id), Some(3));
    assert_eq!(ctx.parent().map(|n| n.id), Some(3));
    assert_eq!(ctx.sent_id(), "a01_001");

    let d = ctx.error("boom".to_string());
    assert_eq!(d.node_id, Some(2));
    assert_eq!(d.sent_id, "a01_001");
}

#[test]
fn root_has_no_parent() {
    let s = copula_sentence();
    let index = SentenceIndex::build(&s);
    let ctx = NodeContext {
        sentence: &s,
        node: &s.nodes()[2],
        index: &index,
    };
    assert!(ctx.parent().is_none());
}

#[test]
fn standard_registry_is_fully_populated() {
    let config = crate::config::Config::default();
    let registry = CheckRegistry::standard(&config, None);

    assert_eq!(registry.pre_checks().len(), 1);
    assert_eq!(registry.node_checks().len(), 18);
    assert_eq!(registry.sentence_checks().len(), 9);
    assert_eq!(registry.boundary_checks().len(), 1);
}

#[test]
fn lexicon_enables_the_fixed_inventory_check() {
    let config = crate::config::Config::default();
    let lexicon = crate::lexicon::FixedLexicon::parse_str(
        "an dèidh\n",
        std::path::Path::new("fixed.gd"),
    )
    .unwrap();
    let registry = CheckRegistry::standard(&config, Some(lexicon));

    assert_eq!(registry.sentence_checks().len(), 10);
    assert!(
        registry
            .sentence_checks()
            .iter()
            .any(|c| c.name() == "fixed-inventory")
    );
}

#[test]
fn check_names_are_unique() {
    let config = crate::config::Config::default();
    let registry = CheckRegistry::standard(&config, None);

    let mut names: Vec<&str> = registry
        .node_checks()
        .iter()
        .map(|c| c.name())
        .chain(registry.sentence_checks().iter().map(|c| c.name()))
        .chain(registry.pre_checks().iter().map(|c| c.name()))
        .chain(registry.boundary_checks().iter().map(|c| c.name()))
        .collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}
