//! Similarity engine: ranks every document's most similar peers by tag overlap
//!
//! A single forward pass: vocabulary, term-frequency vectors, TF-IDF
//! weighting, pairwise cosine matrix, per-document ranking. Two early exits
//! (empty collection, empty vocabulary) terminate with empty results for
//! every document. All intermediate structures are immutable once built,
//! so the matrix and ranking stages fan out across threads.

pub mod matrix;
pub mod rank;
pub mod vectorize;
pub mod vocabulary;
pub mod weighting;

#[cfg(test)]
mod tests;

use rayon::prelude::*;
use tracing::debug;

use crate::config::SimilarPostsConfig;
use crate::diagnostics::DiagnosticSink;
use crate::document::{Document, SimilarityResult};
use crate::error::Result;
use vectorize::SparseVector;
use vocabulary::Vocabulary;

/// Rank every document's most similar peers
///
/// Returns one ranked list per input position, most similar first. The
/// configuration is validated once on entry; an empty collection or a
/// corpus without tags yields empty lists, not an error.
pub fn rank_documents(
    docs: &[Document],
    config: &SimilarPostsConfig,
) -> Result<Vec<Vec<SimilarityResult>>> {
    config.validate()?;

    if docs.is_empty() {
        return Ok(Vec::new());
    }

    let vocab = match Vocabulary::build(docs) {
        Some(vocab) => vocab,
        None => {
            debug!("collection has no tags; every result list is empty");
            return Ok(vec![Vec::new(); docs.len()]);
        }
    };
    debug!(documents = docs.len(), tags = vocab.len(), "built vocabulary");

    let vectors: Vec<SparseVector> = docs
        .iter()
        .map(|doc| weighting::weigh(&vectorize::term_frequencies(doc, &vocab), &vocab, docs.len()))
        .collect();

    let matrix = matrix::similarity_matrix(&vectors);

    let ranked = matrix
        .par_iter()
        .enumerate()
        .map(|(i, row)| rank::rank_row(i, row, docs, config))
        .collect();

    Ok(ranked)
}

/// Compute similar documents and write them back onto each record
///
/// Each document's `similar_posts` field receives the ranked ids of its
/// most similar peers; documents with no qualifying match get an empty
/// list. Every ranked row is also reported to the diagnostic sink.
pub fn compute_similar_posts(
    docs: &mut [Document],
    config: &SimilarPostsConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let ranked = rank_documents(docs, config)?;

    for (idx, results) in ranked.into_iter().enumerate() {
        sink.record(&docs[idx].id, &results);
        docs[idx].similar_posts = results.into_iter().map(|r| r.id).collect();
    }
    Ok(())
}
