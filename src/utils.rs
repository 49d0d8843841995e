//! Utilities upon which the dense bit set is built.

mod error;
mod word;
mod word_iter;
mod word_store;

pub use error::StoreError;
pub use word::{BitIndex, Word, WordIndex};
pub use word_iter::{BitInWordIter, visit_word};
pub use word_store::{WordStore, grown_capacity};
