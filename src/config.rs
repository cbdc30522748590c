//! Engine configuration
//!
//! Two options, both read once per run and applied uniformly to every
//! document. Validation rejects bad values up front rather than clamping,
//! so a misconfigured caller is told instead of silently served defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarPostsError};

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarPostsConfig {
    /// Maximum number of similar documents returned per document
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Inclusive similarity threshold; candidates scoring below are dropped
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

fn default_max_count() -> usize {
    5
}

fn default_min_score() -> f64 {
    0.0001
}

impl Default for SimilarPostsConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            min_score: default_min_score(),
        }
    }
}

impl SimilarPostsConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults; the loaded configuration
    /// is validated before being returned.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SimilarPostsConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// `max_count` must be positive; `min_score` must be finite and
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.max_count == 0 {
            return Err(SimilarPostsError::InvalidConfig {
                field: "max_count",
                reason: "must be a positive integer".to_string(),
            });
        }
        if !self.min_score.is_finite() {
            return Err(SimilarPostsError::InvalidConfig {
                field: "min_score",
                reason: format!("must be a finite number, got {}", self.min_score),
            });
        }
        if self.min_score < 0.0 {
            return Err(SimilarPostsError::InvalidConfig {
                field: "min_score",
                reason: format!("must not be negative, got {}", self.min_score),
            });
        }
        Ok(())
    }
}
