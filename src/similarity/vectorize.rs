//! Term-frequency vectorization and the sparse vector representation

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::document::Document;
use crate::similarity::vocabulary::Vocabulary;

/// Sparse vector keyed by vocabulary index
///
/// Entries are sorted by index and carry no explicit zeros. Dot products
/// walk both entry lists in one merge pass, which fixes the floating-point
/// summation order: parallel and sequential runs produce identical scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(idx, _)| idx);
        Self { entries }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Divide every component by the vector's norm
    ///
    /// A near-zero norm (no components, or components lost to rounding)
    /// leaves the zero vector instead of dividing.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm <= f64::EPSILON {
            self.entries.clear();
            return;
        }
        for (_, w) in &mut self.entries {
            *w /= norm;
        }
    }

    /// Dot product over the indices shared by two sparse vectors
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let mut lhs = self.entries.iter();
        let mut rhs = other.entries.iter();
        let (mut a, mut b) = (lhs.next(), rhs.next());
        while let (Some(&(a_idx, a_weight)), Some(&(b_idx, b_weight))) = (a, b) {
            match a_idx.cmp(&b_idx) {
                Ordering::Less => a = lhs.next(),
                Ordering::Greater => b = rhs.next(),
                Ordering::Equal => {
                    sum += a_weight * b_weight;
                    a = lhs.next();
                    b = rhs.next();
                }
            }
        }
        sum
    }
}

/// Count tag occurrences per document against the vocabulary
///
/// The value at a tag's index is its occurrence count within the document
/// (at least 1 for tags present); absent tags contribute nothing.
pub fn term_frequencies(doc: &Document, vocab: &Vocabulary) -> Vec<(usize, u32)> {
    let mut counts: HashMap<usize, u32> = HashMap::new();
    for tag in &doc.tags {
        if let Some(idx) = vocab.index_of(tag) {
            *counts.entry(idx).or_insert(0) += 1;
        }
    }
    let mut entries: Vec<(usize, u32)> = counts.into_iter().collect();
    entries.sort_unstable_by_key(|&(idx, _)| idx);
    entries
}
