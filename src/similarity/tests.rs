#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use std::collections::HashSet;

    use chrono::{DateTime, TimeZone, Utc};

    use crate::config::SimilarPostsConfig;
    use crate::diagnostics::{DiagnosticSink, NullSink};
    use crate::document::{Document, SimilarityResult};
    use crate::similarity::{compute_similar_posts, rank_documents};

    fn doc(id: &str, tags: &[&str]) -> Document {
        Document::new(
            id,
            tags.iter().map(|t| t.to_string()).collect(),
            DateTime::UNIX_EPOCH,
        )
    }

    fn dated(id: &str, tags: &[&str], year: i32) -> Document {
        Document::new(
            id,
            tags.iter().map(|t| t.to_string()).collect(),
            Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn ids(results: &[SimilarityResult]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    fn id_set(results: &[SimilarityResult]) -> HashSet<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_documents() {
        let ranked = rank_documents(&[], &SimilarPostsConfig::default()).unwrap();
        assert!(ranked.is_empty());

        let mut docs: Vec<Document> = Vec::new();
        compute_similar_posts(&mut docs, &SimilarPostsConfig::default(), &mut NullSink).unwrap();
    }

    #[test]
    fn test_single_document() {
        let docs = [doc("only", &["tag1", "tag2"])];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].is_empty());
    }

    #[test]
    fn test_no_tags_anywhere() {
        let docs = [doc("a", &[]), doc("b", &[]), doc("c", &[])];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_identical_tag_sets_still_rank_as_similar() {
        // A naive log(D/df) weighting scores this corpus all-zero.
        let docs = [
            doc("a", &["common"]),
            doc("b", &["common"]),
            doc("c", &["common"]),
        ];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        assert_eq!(id_set(&ranked[0]), HashSet::from(["b", "c"]));
        assert_eq!(id_set(&ranked[1]), HashSet::from(["a", "c"]));
        assert_eq!(id_set(&ranked[2]), HashSet::from(["a", "b"]));
    }

    #[test]
    fn test_shared_tag_with_unique_tags() {
        let docs = [
            doc("a", &["common", "unique1"]),
            doc("b", &["common", "unique2"]),
            doc("c", &["common", "unique3"]),
        ];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        assert_eq!(id_set(&ranked[0]), HashSet::from(["b", "c"]));
        assert_eq!(id_set(&ranked[1]), HashSet::from(["a", "c"]));
        assert_eq!(id_set(&ranked[2]), HashSet::from(["a", "b"]));
    }

    #[test]
    fn test_partial_overlap() {
        let docs = [
            doc("0", &["common1"]),
            doc("1", &["common2"]),
            doc("2", &["common2", "common1"]),
            doc("3", &["common2", "unique1"]),
            doc("4", &["unique2", "unique3"]),
            doc("5", &["common2", "unique4", "unique5"]),
            doc("6", &["common2"]),
        ];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        assert_eq!(id_set(&ranked[0]), HashSet::from(["2"]));
        assert_eq!(id_set(&ranked[1]), HashSet::from(["2", "3", "5", "6"]));
        assert!(ranked[4].is_empty(), "doc 4 shares no tags with anyone");
    }

    #[test]
    fn test_disjoint_tags_yield_empty_lists() {
        let docs = [
            doc("a", &["t1"]),
            doc("b", &["t2"]),
            doc("c", &["t3"]),
            doc("d", &["t4"]),
        ];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();
        assert!(ranked.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_max_count_enforced_among_ties() {
        let docs = [
            doc("a", &["shared"]),
            doc("b", &["shared"]),
            doc("c", &["shared"]),
            doc("d", &["shared"]),
        ];
        let config = SimilarPostsConfig {
            max_count: 2,
            ..Default::default()
        };
        let ranked = rank_documents(&docs, &config).unwrap();

        for results in &ranked {
            assert_eq!(results.len(), 2, "tied candidates must still be capped");
        }
    }

    #[test]
    fn test_min_score_enforced() {
        let docs = [
            doc("0", &["common1"]),
            doc("1", &["common1", "unique"]),
            doc("2", &["common2"]),
            doc("3", &["common2"]),
        ];
        let config = SimilarPostsConfig {
            min_score: 1.0,
            ..Default::default()
        };
        let ranked = rank_documents(&docs, &config).unwrap();

        assert!(ranked[0].is_empty(), "partial overlap scores below 1.0");
        assert!(ranked[1].is_empty(), "partial overlap scores below 1.0");
        assert_eq!(ids(&ranked[2]), vec!["3"]);
        assert_eq!(ids(&ranked[3]), vec!["2"]);
    }

    #[test]
    fn test_ties_break_by_recency() {
        let docs = [
            dated("y2016", &["common3"], 2016),
            dated("y2017", &["common3"], 2017),
            dated("y2018", &["common3"], 2018),
        ];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        assert_eq!(ids(&ranked[0]), vec!["y2018", "y2017"]);
        assert_eq!(ids(&ranked[1]), vec!["y2018", "y2016"]);
        assert_eq!(ids(&ranked[2]), vec!["y2017", "y2016"]);
    }

    #[test]
    fn test_score_beats_recency() {
        // "twin" matches the subject exactly but is much older than "near".
        let docs = [
            dated("subject", &["a", "b"], 2010),
            dated("twin", &["a", "b"], 2000),
            dated("near", &["a"], 2024),
        ];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        assert_eq!(ids(&ranked[0]), vec!["twin", "near"]);
    }

    #[test]
    fn test_scores_are_symmetric() {
        let docs = [
            doc("a", &["x", "y"]),
            doc("b", &["y", "z"]),
            doc("c", &["x", "z", "w"]),
            doc("d", &["w"]),
        ];
        let config = SimilarPostsConfig {
            max_count: 10,
            min_score: 0.0,
        };
        let ranked = rank_documents(&docs, &config).unwrap();

        let score_of = |from: usize, to: &str| -> Option<f64> {
            ranked[from].iter().find(|r| r.id == to).map(|r| r.score)
        };
        let names = ["a", "b", "c", "d"];
        for (i, &i_name) in names.iter().enumerate() {
            for (j, &j_name) in names.iter().enumerate() {
                if i == j {
                    continue;
                }
                assert_eq!(
                    score_of(i, j_name),
                    score_of(j, i_name),
                    "score between {} and {} must not depend on direction",
                    i_name,
                    j_name
                );
            }
        }
    }

    #[test]
    fn test_no_document_lists_itself() {
        let docs = [
            doc("a", &["x"]),
            doc("b", &["x"]),
            doc("c", &["x", "y"]),
        ];
        let ranked = rank_documents(&docs, &SimilarPostsConfig::default()).unwrap();

        for (i, results) in ranked.iter().enumerate() {
            assert!(
                !ids(results).contains(&docs[i].id.as_str()),
                "document {} listed itself",
                docs[i].id
            );
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_before_compute() {
        let docs = [doc("a", &["x"])];
        let config = SimilarPostsConfig {
            max_count: 0,
            ..Default::default()
        };
        assert!(rank_documents(&docs, &config).is_err());
    }

    #[test]
    fn test_write_back_assigns_every_document() {
        let mut docs = vec![
            doc("a", &["shared"]),
            doc("b", &["shared"]),
            doc("c", &["lonely"]),
        ];
        compute_similar_posts(&mut docs, &SimilarPostsConfig::default(), &mut NullSink).unwrap();

        assert_eq!(docs[0].similar_posts, vec!["b".to_string()]);
        assert_eq!(docs[1].similar_posts, vec!["a".to_string()]);
        assert!(docs[2].similar_posts.is_empty());
    }

    #[test]
    fn test_diagnostic_sink_sees_every_document() {
        struct Recorder(Vec<(String, usize)>);
        impl DiagnosticSink for Recorder {
            fn record(&mut self, doc_id: &str, results: &[SimilarityResult]) {
                self.0.push((doc_id.to_string(), results.len()));
            }
        }

        let mut docs = vec![doc("a", &["shared"]), doc("b", &["shared"]), doc("c", &[])];
        let mut sink = Recorder(Vec::new());
        compute_similar_posts(&mut docs, &SimilarPostsConfig::default(), &mut sink).unwrap();

        assert_eq!(
            sink.0,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 1),
                ("c".to_string(), 0)
            ]
        );
    }
}
