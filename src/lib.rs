//! Similar Posts
//!
//! Batch similarity engine over tagged documents. Given a complete snapshot
//! of a document collection, it computes for every document the ranked list
//! of its most similar peers, where similarity is the cosine between
//! TF-IDF-weighted tag vectors and ties break toward more recent documents.
//!
//! The engine runs once per batch; vocabulary, weighted vectors, and the
//! similarity matrix are built for the run and discarded afterwards.

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod logging;
pub mod similarity;

pub use config::SimilarPostsConfig;
pub use diagnostics::{DiagnosticSink, JsonLinesSink, NullSink, TracingSink};
pub use document::{Document, SimilarityResult};
pub use error::{Result, SimilarPostsError};
pub use similarity::{compute_similar_posts, rank_documents};
