//! Vocabulary construction: tag tokens to dense indices plus document frequency

use std::collections::{HashMap, HashSet};

use crate::document::Document;

/// Corpus vocabulary
///
/// Maps every distinct tag to a dense index in `0..len()` and records, per
/// tag, the number of documents containing it at least once. Built once per
/// run and immutable afterwards.
#[derive(Debug, Default)]
pub struct Vocabulary {
    indices: HashMap<String, usize>,
    doc_freq: Vec<u32>,
}

impl Vocabulary {
    /// Scan the collection and build the tag index and document-frequency table
    ///
    /// Returns `None` when no document carries any tag; the pipeline treats
    /// that as "no results for anyone" rather than an error.
    pub fn build(docs: &[Document]) -> Option<Self> {
        let mut vocab = Vocabulary::default();
        let mut seen = HashSet::new();
        for doc in docs {
            seen.clear();
            for tag in &doc.tags {
                // Document frequency counts presence, not repetition.
                if !seen.insert(tag.as_str()) {
                    continue;
                }
                let next = vocab.doc_freq.len();
                let idx = *vocab.indices.entry(tag.clone()).or_insert(next);
                if idx == vocab.doc_freq.len() {
                    vocab.doc_freq.push(0);
                }
                vocab.doc_freq[idx] += 1;
            }
        }
        if vocab.indices.is_empty() {
            None
        } else {
            Some(vocab)
        }
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }

    /// Dense index for a tag, if known
    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.indices.get(tag).copied()
    }

    /// Number of documents containing the tag at the given index
    pub fn doc_freq(&self, index: usize) -> u32 {
        self.doc_freq[index]
    }
}
