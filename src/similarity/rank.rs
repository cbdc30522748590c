//! Per-document ranking and selection

use crate::config::SimilarPostsConfig;
use crate::document::{Document, SimilarityResult};

/// Select and order the similar documents for the document at `position`
///
/// Keeps candidates scoring at or above `min_score` (inclusive), excluding
/// the document itself, orders them by score then recency then original
/// position, and truncates to `max_count`.
pub fn rank_row(
    position: usize,
    scores: &[f64],
    docs: &[Document],
    config: &SimilarPostsConfig,
) -> Vec<SimilarityResult> {
    let mut candidates: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .filter(|&(idx, &score)| idx != position && score >= config.min_score)
        .map(|(idx, &score)| (idx, score))
        .collect();

    // Score desc, then date desc, then input position asc. The explicit
    // position key keeps the order independent of sort stability.
    candidates.sort_unstable_by(|&(a_idx, a_score), &(b_idx, b_score)| {
        b_score
            .total_cmp(&a_score)
            .then_with(|| docs[b_idx].date.cmp(&docs[a_idx].date))
            .then_with(|| a_idx.cmp(&b_idx))
    });
    candidates.truncate(config.max_count);

    candidates
        .into_iter()
        .map(|(idx, score)| SimilarityResult {
            id: docs[idx].id.clone(),
            score,
        })
        .collect()
}
