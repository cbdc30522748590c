//! TF-IDF weighting and vector normalization

use crate::similarity::vectorize::SparseVector;
use crate::similarity::vocabulary::Vocabulary;

/// Local weight: dampens the effect of within-document repetition
fn local_weight(tf: u32) -> f64 {
    f64::from(tf).sqrt()
}

/// Global weight: smoothed inverse document frequency, squared
///
/// `(1 + ln((D+1)/(df+1)))^2` stays strictly positive even when a tag
/// appears in every document: df == D makes the log term 0, leaving a
/// weight of 1. A plain `ln(D/df)` would score a corpus of identical tag
/// sets as having zero similarity everywhere.
fn global_weight(doc_freq: u32, doc_count: usize) -> f64 {
    let ratio = (doc_count as f64 + 1.0) / (f64::from(doc_freq) + 1.0);
    (1.0 + ratio.ln()).powi(2)
}

/// Convert term-frequency entries into a weighted, L2-normalized vector
///
/// The weight of a tag is `sqrt(tf) * idf`. Documents with no known tags
/// produce the zero vector, which is left un-normalized.
pub fn weigh(term_freqs: &[(usize, u32)], vocab: &Vocabulary, doc_count: usize) -> SparseVector {
    let entries = term_freqs
        .iter()
        .map(|&(idx, tf)| {
            let weight = local_weight(tf) * global_weight(vocab.doc_freq(idx), doc_count);
            (idx, weight)
        })
        .collect();
    let mut vector = SparseVector::from_entries(entries);
    vector.l2_normalize();
    vector
}
