//! Pairwise cosine similarity over the weighted vectors

use rayon::prelude::*;

use crate::similarity::vectorize::SparseVector;

/// Compute the dense symmetric matrix of pairwise cosine similarities
///
/// With L2-normalized inputs the cosine of a pair is their dot product.
/// Only the upper triangle is computed (rows in parallel, each independent)
/// and the lower triangle is mirrored, so `matrix[i][j] == matrix[j][i]`
/// holds by construction. The diagonal is 1 for documents with any known
/// tag and 0 for zero vectors; the ranker excludes it either way.
pub fn similarity_matrix(vectors: &[SparseVector]) -> Vec<Vec<f64>> {
    let n = vectors.len();
    let upper: Vec<Vec<f64>> = vectors
        .par_iter()
        .enumerate()
        .map(|(i, vec_i)| {
            vectors[i + 1..]
                .iter()
                .map(|vec_j| vec_i.dot(vec_j))
                .collect()
        })
        .collect();

    let mut matrix = vec![vec![0.0; n]; n];
    for (i, row) in upper.iter().enumerate() {
        if !vectors[i].is_zero() {
            matrix[i][i] = 1.0;
        }
        for (offset, &score) in row.iter().enumerate() {
            let j = i + 1 + offset;
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }
    matrix
}
