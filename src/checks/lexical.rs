use crate::diagnostics::Diagnostic;
use crate::lexicon::normalize;
use crate::model::{Node, Upos};

use super::{NodeCheck, NodeContext};

/// _ais_ only occurs in petrified nominal expressions ("air ais" and kin).
pub struct AisNounCheck;

impl NodeCheck for AisNounCheck {
    fn name(&self) -> &'static str {
        "ais-noun"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if node.form == "ais" && node.upos != Upos::Noun {
            return vec![ctx.error("UPOS for 'ais' should be NOUN".to_string())];
        }
        Vec::new()
    }
}

/// Reflexives attach as nmod, obl or fixed.
pub struct ReflexiveCheck;

impl NodeCheck for ReflexiveCheck {
    fn name(&self) -> &'static str {
        "reflexive"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if node.xpos == "Px" && !matches!(node.deprel.as_str(), "nmod" | "fixed" | "obl") {
            return vec![ctx.error(format!("'{}' should be nmod or obl (or fixed)", node.form))];
        }
        Vec::new()
    }
}

/// A patronymic directly after a personal name is part of the name.
pub struct PatronymicCheck;

impl NodeCheck for PatronymicCheck {
    fn name(&self) -> &'static str {
        "patronymic"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if node.xpos == "Up"
            && node.deprel != "flat:name"
            && ctx.prev().is_some_and(|p| p.xpos == "Nn")
        {
            return vec![ctx.error("Patronymic should be flat:name".to_string())];
        }
        Vec::new()
    }
}

pub struct MarkCategoryCheck;

impl NodeCheck for MarkCategoryCheck {
    fn name(&self) -> &'static str {
        "mark-category"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if node.udeprel() == "mark" && !matches!(node.upos, Upos::Part | Upos::Sconj) {
            return vec![ctx.error("mark should only be for PART or SCONJ".to_string())];
        }
        Vec::new()
    }
}

const ADP_LEMMATA: [&str; 33] = [
    "a",
    "à",
    "aig",
    "air",
    "airson",
    "am",
    "an",
    "ann",
    "anns",
    "as",
    "às",
    "bho",
    "chun",
    "de",
    "dh'ionnsaigh",
    "do",
    "eadar",
    "fa",
    "fo",
    "gu",
    "gun",
    "le",
    "mar",
    "mu",
    "o",
    "os",
    "rè",
    "ri",
    "ro",
    "seach",
    "thar",
    "timcheall",
    "tro",
];

const DET_LEMMATA: [&str; 17] = [
    "a", "a'", "am", "an", "ar", "bhur", "cia", "dè", "do", "gach", "mo", "na", "seo", "sin",
    "siud", "uile", "ur",
];

const CCONJ_LEMMATA: [&str; 9] = [
    "ach", "agus", "air neo", "is", "na", "neo", "no", "oir", "'s",
];

const SCONJ_LEMMATA: [&str; 27] = [
    "a", "agus", "am", "an", "bho", "bhon", "chionn", "far", "fhad", "ged", "gu", "gum", "gun",
    "ma", "mar", "mas", "mu", "mun", "mura", "mus", "nach", "nam", "nan", "nuair", "o", "on",
    "sula",
];

const PRON_LEMMATA: [&str; 33] = [
    "càil",
    "chèile",
    "ciod",
    "cò",
    "dad",
    "dè",
    "duine",
    "e",
    "esan",
    "feadhainn",
    "fear",
    "fhèin",
    "fèin",
    "gin",
    "i",
    "iad",
    "iadsan",
    "ise",
    "mi",
    "mise",
    "na",
    "seo",
    "sibh",
    "sibhse",
    "sin",
    "sinn",
    "sinne",
    "siud",
    "tè",
    "thu",
    "thusa",
    "tu",
    "tusa",
];

fn inventory(upos: Upos) -> Option<&'static [&'static str]> {
    match upos {
        Upos::Adp => Some(&ADP_LEMMATA),
        Upos::Det => Some(&DET_LEMMATA),
        Upos::Cconj => Some(&CCONJ_LEMMATA),
        Upos::Sconj => Some(&SCONJ_LEMMATA),
        Upos::Pron => Some(&PRON_LEMMATA),
        _ => None,
    }
}

fn is_foreign(node: &Node) -> bool {
    node.feats.has("Foreign") || node.misc.contains("FlatType", "Foreign")
}

/// Closed-class categories draw from a small fixed inventory; anything else
/// is a likely mis-tagging unless the word is marked as foreign.
pub struct ClosedClassCheck;

impl NodeCheck for ClosedClassCheck {
    fn name(&self) -> &'static str {
        "closed-class"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        let Some(lemmata) = inventory(node.upos) else {
            return Vec::new();
        };
        if is_foreign(node) {
            return Vec::new();
        }
        let lemma = normalize(node.effective_lemma());
        if lemmata.contains(&lemma.as_str()) {
            return Vec::new();
        }
        vec![ctx.error(format!("'{lemma}' is not in the {} inventory", node.upos))]
    }
}

/// Simple-preposition forms that are really preposition-article contractions
/// and should have been split into two tokens.
const CONTRACTIONS: [&str; 8] = ["den", "dhen", "dhan", "don", "fon", "ron", "sna", "tron"];

/// Forms that are only contractions in some contexts; resolved by looking at
/// the following word.
const AMBIGUOUS_CONTRACTIONS: [(&str, &str); 4] = [
    ("mun", "mu + an"),
    ("on", "o + an"),
    ("sa", "anns + a'"),
    ("san", "anns + an"),
];

pub struct ContractionCheck;

impl NodeCheck for ContractionCheck {
    fn name(&self) -> &'static str {
        "contraction"
    }

    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic> {
        let node = ctx.node;
        if node.upos != Upos::Adp {
            return Vec::new();
        }
        // A covering span token means the contraction is already split.
        if ctx.sentence.span_covering(node.id).is_some() {
            return Vec::new();
        }
        let form = normalize(node.effective_form());

        if CONTRACTIONS.contains(&form.as_str()) {
            return vec![ctx.error(format!("'{form}' should be split into two tokens"))];
        }

        if let Some(&(_, expansion)) = AMBIGUOUS_CONTRACTIONS
            .iter()
            .find(|(f, _)| *f == form)
            && ctx.next().is_some_and(|next| {
                next.lemma != "an" && matches!(next.upos, Upos::Noun | Upos::Propn | Upos::Num)
            })
        {
            return vec![ctx.warning(format!(
                "'{form}' is probably a contraction of {expansion}"
            ))];
        }
        Vec::new()
    }
}

#[cfg(test)]
#[path = "lexical_tests.rs"]
mod tests;
