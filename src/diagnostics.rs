//! Diagnostic reporting for ranked similarity output
//!
//! The engine reports each document's ranked (id, score) pairs through an
//! injected sink; it writes to the sink but never owns or configures the
//! destination. Traces are best-effort: a failing sink never fails a run.

use std::io::Write;

use serde::Serialize;

use crate::document::SimilarityResult;

/// Receiver for per-document similarity traces
pub trait DiagnosticSink {
    /// Record the ranked results computed for one document
    fn record(&mut self, doc_id: &str, results: &[SimilarityResult]);
}

/// Discards every trace
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _doc_id: &str, _results: &[SimilarityResult]) {}
}

/// Emits traces as `tracing` debug events
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, doc_id: &str, results: &[SimilarityResult]) {
        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        tracing::debug!(doc = doc_id, ?scores, "similar documents ranked");
    }
}

/// Writes one JSON object per document to the underlying writer
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

#[derive(Serialize)]
struct TraceLine<'a> {
    doc: &'a str,
    similar: &'a [SimilarityResult],
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and hand back the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for JsonLinesSink<W> {
    fn record(&mut self, doc_id: &str, results: &[SimilarityResult]) {
        let line = TraceLine {
            doc: doc_id,
            similar: results,
        };
        if serde_json::to_writer(&mut self.writer, &line).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}
