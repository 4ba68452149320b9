use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AttrBag;

/// Coarse part-of-speech tag. The inventory is closed; an unknown tag in the
/// input is a load error, not a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Upos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl Upos {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }
}

impl fmt::Display for Upos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Upos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADJ" => Ok(Self::Adj),
            "ADP" => Ok(Self::Adp),
            "ADV" => Ok(Self::Adv),
            "AUX" => Ok(Self::Aux),
            "CCONJ" => Ok(Self::Cconj),
            "DET" => Ok(Self::Det),
            "INTJ" => Ok(Self::Intj),
            "NOUN" => Ok(Self::Noun),
            "NUM" => Ok(Self::Num),
            "PART" => Ok(Self::Part),
            "PRON" => Ok(Self::Pron),
            "PROPN" => Ok(Self::Propn),
            "PUNCT" => Ok(Self::Punct),
            "SCONJ" => Ok(Self::Sconj),
            "SYM" => Ok(Self::Sym),
            "VERB" => Ok(Self::Verb),
            "X" => Ok(Self::X),
            other => Err(format!("unknown UPOS tag: {other}")),
        }
    }
}

/// One real word of a sentence. Multiword span tokens are not nodes; they are
/// kept on the [`super::Sentence`] as [`super::SpanToken`] records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// 1-based position among real words; 0 is never a node id.
    pub id: usize,
    pub form: String,
    pub lemma: String,
    pub upos: Upos,
    /// Language-specific fine-grained tag; open vocabulary.
    pub xpos: String,
    /// Id of the syntactic parent; 0 denotes the sentence root.
    pub head: usize,
    /// Relation label, `primary` or `primary:subtype`.
    pub deprel: String,
    pub feats: AttrBag,
    pub misc: AttrBag,
}

impl Node {
    /// Primary component of the relation label.
    #[must_use]
    pub fn udeprel(&self) -> &str {
        match self.deprel.find(':') {
            Some(idx) => &self.deprel[..idx],
            None => &self.deprel,
        }
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.head == 0
    }

    /// Surface form with annotation overrides applied: a corrected form wins
    /// over a modernised form, which wins over the raw form.
    #[must_use]
    pub fn effective_form(&self) -> &str {
        self.misc
            .first("CorrectForm")
            .or_else(|| self.misc.first("ModernForm"))
            .unwrap_or(&self.form)
    }

    /// Lemma with the same override chain as [`Self::effective_form`].
    #[must_use]
    pub fn effective_lemma(&self) -> &str {
        self.misc
            .first("CorrectLemma")
            .or_else(|| self.misc.first("ModernLemma"))
            .unwrap_or(&self.lemma)
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
