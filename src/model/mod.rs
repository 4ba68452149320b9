mod attrs;
mod node;
mod sentence;

pub use attrs::{AttrBag, AttrError};
pub use node::{Node, Upos};
pub use sentence::{Document, Sentence, SpanToken};

#[cfg(test)]
pub mod test_fixtures;
