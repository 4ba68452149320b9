mod agreement;
mod boundary;
mod features;
mod fixed;
mod lexical;
mod ranges;
mod speech;
mod structure;
mod subtree;

pub use agreement::{DependentCategoryCheck, HeadAttachmentCheck, HeadCategoryCheck};
pub use boundary::{NewdocBoundaryCheck, subdoc_prefix};
pub use features::{
    AdvTypeCheck, AnonymisedCheck, FixedHeadExtPosCheck, FlatTypeCheck, NounTypeCheck,
    PlaceholderXposCheck, UnmarkedOblCheck,
};
pub use fixed::FixedInventoryCheck;
pub use lexical::{
    AisNounCheck, ClosedClassCheck, ContractionCheck, MarkCategoryCheck, PatronymicCheck,
    ReflexiveCheck,
};
pub use ranges::{ArgumentCategoryCheck, DirectionCheck, SpanLengthCheck};
pub use speech::ReportedSpeechCheck;
pub use structure::StructureCheck;
pub use subtree::{
    BiPredicateCheck, CleftTypeCheck, ClauseMarkingCheck, CopulaSubjectCheck, MultiplesCheck,
    PassiveCheck, RelativeParticleCheck,
};

use indexmap::{IndexMap, IndexSet};

use crate::config::Config;
use crate::diagnostics::{Diagnostic, Severity};
use crate::lexicon::FixedLexicon;
use crate::model::{Node, Sentence};

/// Sentence-wide indices a check may declare it needs. The engine builds
/// these exactly once per sentence, before node traversal; checks never
/// recompute them.
#[derive(Debug, Default)]
pub struct SentenceIndex {
    /// Ids of nodes that are heads of a `cop` relation.
    pub cop_heads: IndexSet<usize>,
    /// Ids of nodes that are heads of a `case` relation.
    pub case_heads: IndexSet<usize>,
    /// Ids of nodes that are heads of a clausal-subject relation marking a
    /// cleft (`csubj:cleft`, `csubj:outer`).
    pub cleft_heads: IndexSet<usize>,
    /// Lemma of the first `case` dependent attached to each head.
    pub adposition_by_head: IndexMap<usize, String>,
}

impl SentenceIndex {
    #[must_use]
    pub fn build(sentence: &Sentence) -> Self {
        let mut index = Self::default();
        for node in sentence.nodes() {
            match node.deprel.as_str() {
                "cop" => {
                    index.cop_heads.insert(node.head);
                }
                "case" => {
                    index.case_heads.insert(node.head);
                    index
                        .adposition_by_head
                        .entry(node.head)
                        .or_insert_with(|| node.lemma.clone());
                }
                "csubj:cleft" | "csubj:outer" => {
                    index.cleft_heads.insert(node.head);
                }
                _ => {}
            }
        }
        index
    }
}

/// Bounded context handed to a node-scoped check: the node itself plus
/// read-only access to its immediate neighbourhood.
pub struct NodeContext<'a> {
    pub sentence: &'a Sentence,
    pub node: &'a Node,
    pub index: &'a SentenceIndex,
}

impl NodeContext<'_> {
    #[must_use]
    pub fn sent_id(&self) -> &str {
        self.sentence.sent_id()
    }

    #[must_use]
    pub fn prev(&self) -> Option<&Node> {
        self.sentence.prev(self.node.id)
    }

    #[must_use]
    pub fn next(&self) -> Option<&Node> {
        self.sentence.next(self.node.id)
    }

    /// The syntactic parent; none for the root or a dangling head.
    #[must_use]
    pub fn parent(&self) -> Option<&Node> {
        self.sentence.node(self.node.head)
    }

    #[must_use]
    pub fn error(&self, message: String) -> Diagnostic {
        Diagnostic::node(Severity::Error, self.sent_id(), self.node.id, message)
    }

    #[must_use]
    pub fn warning(&self, message: String) -> Diagnostic {
        Diagnostic::node(Severity::Warning, self.sent_id(), self.node.id, message)
    }

    #[must_use]
    pub fn info(&self, message: String) -> Diagnostic {
        Diagnostic::node(Severity::Info, self.sent_id(), self.node.id, message)
    }
}

/// Context handed to a sentence-scoped check.
pub struct SentenceContext<'a> {
    pub sentence: &'a Sentence,
    pub index: &'a SentenceIndex,
}

impl SentenceContext<'_> {
    #[must_use]
    pub fn sent_id(&self) -> &str {
        self.sentence.sent_id()
    }

    #[must_use]
    pub fn node_error(&self, node_id: usize, message: String) -> Diagnostic {
        Diagnostic::node(Severity::Error, self.sent_id(), node_id, message)
    }

    #[must_use]
    pub fn node_warning(&self, node_id: usize, message: String) -> Diagnostic {
        Diagnostic::node(Severity::Warning, self.sent_id(), node_id, message)
    }

    #[must_use]
    pub fn node_info(&self, node_id: usize, message: String) -> Diagnostic {
        Diagnostic::node(Severity::Info, self.sent_id(), node_id, message)
    }

    #[must_use]
    pub fn sentence_error(&self, message: String) -> Diagnostic {
        Diagnostic::sentence(Severity::Error, self.sent_id(), message)
    }
}

/// A constraint over one node and its immediate neighbourhood.
///
/// Checks are pure: they inspect the context and return diagnostics. They
/// never mutate the model and never traverse beyond the context they are
/// given, so they can be added, removed or reordered independently.
pub trait NodeCheck: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &NodeContext<'_>) -> Vec<Diagnostic>;
}

/// A constraint over a whole sentence, with precomputed indices.
pub trait SentenceCheck: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &SentenceContext<'_>) -> Vec<Diagnostic>;
}

/// A constraint over sentence transitions. `prev_prefix` is the previous
/// sentence's sub-document prefix, none at the start of the document.
pub trait BoundaryCheck: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, sentence: &Sentence, prev_prefix: Option<&str>) -> Vec<Diagnostic>;
}

/// Ordered registry of checks. Registration order is the execution order
/// within each scope, and therefore part of the output contract.
#[derive(Default)]
pub struct CheckRegistry {
    pre_checks: Vec<Box<dyn SentenceCheck>>,
    node_checks: Vec<Box<dyn NodeCheck>>,
    sentence_checks: Vec<Box<dyn SentenceCheck>>,
    boundary_checks: Vec<Box<dyn BoundaryCheck>>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural pre-checks run before any node-scoped check of a sentence.
    pub fn register_pre(&mut self, check: Box<dyn SentenceCheck>) {
        self.pre_checks.push(check);
    }

    pub fn register_node(&mut self, check: Box<dyn NodeCheck>) {
        self.node_checks.push(check);
    }

    pub fn register_sentence(&mut self, check: Box<dyn SentenceCheck>) {
        self.sentence_checks.push(check);
    }

    pub fn register_boundary(&mut self, check: Box<dyn BoundaryCheck>) {
        self.boundary_checks.push(check);
    }

    #[must_use]
    pub fn pre_checks(&self) -> &[Box<dyn SentenceCheck>] {
        &self.pre_checks
    }

    #[must_use]
    pub fn node_checks(&self) -> &[Box<dyn NodeCheck>] {
        &self.node_checks
    }

    #[must_use]
    pub fn sentence_checks(&self) -> &[Box<dyn SentenceCheck>] {
        &self.sentence_checks
    }

    #[must_use]
    pub fn boundary_checks(&self) -> &[Box<dyn BoundaryCheck>] {
        &self.boundary_checks
    }

    /// The full shipped rule set. The fixed-expression inventory check is
    /// registered only when a lexicon was loaded.
    #[must_use]
    pub fn standard(config: &Config, lexicon: Option<FixedLexicon>) -> Self {
        let mut registry = Self::new();

        registry.register_pre(Box::new(StructureCheck));

        registry.register_node(Box::new(DirectionCheck));
        registry.register_node(Box::new(
            SpanLengthCheck::new().with_overrides(&config.spans),
        ));
        registry.register_node(Box::new(ArgumentCategoryCheck));
        registry.register_node(Box::new(DependentCategoryCheck));
        registry.register_node(Box::new(HeadAttachmentCheck));
        registry.register_node(Box::new(FixedHeadExtPosCheck));
        registry.register_node(Box::new(AdvTypeCheck));
        registry.register_node(Box::new(FlatTypeCheck));
        registry.register_node(Box::new(AnonymisedCheck));
        registry.register_node(Box::new(PlaceholderXposCheck));
        registry.register_node(Box::new(NounTypeCheck));
        registry.register_node(Box::new(UnmarkedOblCheck));
        registry.register_node(Box::new(AisNounCheck));
        registry.register_node(Box::new(ReflexiveCheck));
        registry.register_node(Box::new(PatronymicCheck));
        registry.register_node(Box::new(MarkCategoryCheck));
        registry.register_node(Box::new(ClosedClassCheck));
        registry.register_node(Box::new(ContractionCheck));

        registry.register_sentence(Box::new(HeadCategoryCheck));
        if let Some(lexicon) = lexicon {
            registry.register_sentence(Box::new(FixedInventoryCheck::new(lexicon)));
        }
        registry.register_sentence(Box::new(MultiplesCheck));
        registry.register_sentence(Box::new(CopulaSubjectCheck));
        registry.register_sentence(Box::new(CleftTypeCheck));
        registry.register_sentence(Box::new(BiPredicateCheck));
        registry.register_sentence(Box::new(PassiveCheck));
        registry.register_sentence(Box::new(RelativeParticleCheck));
        registry.register_sentence(Box::new(ClauseMarkingCheck));
        registry.register_sentence(Box::new(ReportedSpeechCheck));

        registry.register_boundary(Box::new(NewdocBoundaryCheck));

        registry
    }
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
