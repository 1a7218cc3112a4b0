//! Summary statistics over a chunk sequence

use super::chunk::{Chunk, ChunkKind};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Counts derived from a final chunk sequence
///
/// Kinds that never occur are absent from `kind_counts` rather than
/// reported as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of chunks
    pub total_chunks: usize,
    /// Chunks flagged for linguistic transformation
    pub translatable_chunks: usize,
    /// Chunks passed through verbatim
    pub non_translatable_chunks: usize,
    /// Occurrences per kind (only kinds that occurred)
    pub kind_counts: BTreeMap<ChunkKind, usize>,
}

impl Report {
    /// Tally a chunk sequence in one pass
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let mut report = Report::default();
        for chunk in chunks {
            report.total_chunks += 1;
            if chunk.translatable {
                report.translatable_chunks += 1;
            } else {
                report.non_translatable_chunks += 1;
            }
            *report.kind_counts.entry(chunk.kind).or_insert(0) += 1;
        }
        report
    }

    /// Count for a kind, `None` when the kind never occurred
    pub fn count(&self, kind: ChunkKind) -> Option<usize> {
        self.kind_counts.get(&kind).copied()
    }

    /// Count for a kind, zero when absent
    pub fn count_or_zero(&self, kind: ChunkKind) -> usize {
        self.count(kind).unwrap_or(0)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.kind_counts.len()))?;
        map.serialize_entry("total_chunks", &self.total_chunks)?;
        map.serialize_entry("translatable_chunks", &self.translatable_chunks)?;
        map.serialize_entry("non_translatable_chunks", &self.non_translatable_chunks)?;
        for (kind, count) in &self.kind_counts {
            map.serialize_entry(&format!("{}_chunks", kind.as_str()), count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = Report::from_chunks(&[]);
        assert_eq!(report.total_chunks, 0);
        assert!(report.kind_counts.is_empty());
    }

    #[test]
    fn test_counts_and_omitted_kinds() {
        let chunks = vec![
            Chunk::text("Text", 0..4),
            Chunk::atomic(ChunkKind::Code, "`code`", 5..11),
            Chunk::atomic(ChunkKind::Url, "[link](url)", 12..23),
            Chunk::atomic(ChunkKind::Url, "http://example.com", 24..42),
            Chunk::text("a", 43..44),
        ];
        let report = Report::from_chunks(&chunks);

        assert_eq!(report.total_chunks, 5);
        assert_eq!(report.translatable_chunks, 1);
        assert_eq!(report.non_translatable_chunks, 4);
        assert_eq!(report.count(ChunkKind::Text), Some(2));
        assert_eq!(report.count(ChunkKind::Url), Some(2));
        assert_eq!(report.count(ChunkKind::Image), None);
        assert_eq!(report.count_or_zero(ChunkKind::Image), 0);
    }

    #[test]
    fn test_serialized_keys() {
        let chunks = vec![
            Chunk::text("Hello there", 0..11),
            Chunk::atomic(ChunkKind::Timing, "1\n00:00:01,000 --> 00:00:02,000", 12..43),
        ];
        let value = serde_json::to_value(Report::from_chunks(&chunks)).unwrap();

        assert_eq!(value["total_chunks"], 2);
        assert_eq!(value["translatable_chunks"], 1);
        assert_eq!(value["non_translatable_chunks"], 1);
        assert_eq!(value["text_chunks"], 1);
        assert_eq!(value["timing_chunks"], 1);
        assert!(value.get("code_chunks").is_none());
    }
}
