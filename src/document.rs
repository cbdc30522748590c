//! Document records consumed and annotated by the engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single document in the collection
///
/// Hosts with optional tag or date attributes map absence to the defaults
/// here: an empty tag set and the Unix epoch. That keeps the sort order
/// total without per-record presence checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, echoed back in similarity results
    pub id: String,

    /// Categorical tags; the only similarity signal
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date, used to break ties between equal scores
    #[serde(default = "epoch")]
    pub date: DateTime<Utc>,

    /// Ranked ids of the most similar documents, filled in by the engine.
    /// Always a valid list, empty when nothing qualifies.
    #[serde(default)]
    pub similar_posts: Vec<String>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl Document {
    /// Create a document with the given tags and date
    pub fn new(id: impl Into<String>, tags: Vec<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            tags,
            date,
            similar_posts: Vec::new(),
        }
    }

    /// Create a document with no tags and the epoch date
    pub fn bare(id: impl Into<String>) -> Self {
        Self::new(id, Vec::new(), DateTime::UNIX_EPOCH)
    }
}

/// Similarity score between two documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Document ID
    pub id: String,
    /// Similarity score (0.0 to 1.0)
    pub score: f64,
}
