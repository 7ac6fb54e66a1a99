//! Generated sample documents for demonstration and testing.
//!
//! Produces a large, reproducible JSON array of records mixing every value
//! type, so the viewer can be exercised without a file on disk.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

use crate::document::Document;
use crate::error::ViewerError;
use crate::source::DocumentReader;

const DEFAULT_RECORDS: usize = 20_000;
const NAMES: [&str; 8] = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel"];
const TAGS: [&str; 6] = ["red", "green", "blue", "urgent", "archived", "draft"];

pub struct SampleDocumentReader {
    records: usize,
    seed: u64,
}

impl SampleDocumentReader {
    pub fn new() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            seed: 42,
        }
    }

    pub fn with_config(records: usize, seed: u64) -> Self {
        Self { records, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the sample value.
    pub fn generate(&self) -> Value {
        let mut rng = StdRng::seed_from_u64(self.seed);
        Value::Array((0..self.records).map(|id| generate_record(&mut rng, id)).collect())
    }
}

impl Default for SampleDocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for SampleDocumentReader {
    fn read(&self, _path: &Path, max_depth: usize) -> Result<Document, ViewerError> {
        Ok(Document::from_value(&self.generate(), max_depth)?)
    }
}

fn generate_record(rng: &mut StdRng, id: usize) -> Value {
    let mut record = Map::new();
    record.insert("id".to_string(), json!(id));
    record.insert(
        "name".to_string(),
        json!(format!("{}-{}", NAMES[rng.gen_range(0..NAMES.len())], id)),
    );
    record.insert("active".to_string(), json!(rng.gen_bool(0.5)));
    record.insert("score".to_string(), json!((rng.gen_range(0.0..100.0_f64) * 100.0).round() / 100.0));

    let tag_count = rng.gen_range(0..=3);
    let tags: Vec<Value> = (0..tag_count).map(|_| json!(TAGS[rng.gen_range(0..TAGS.len())])).collect();
    record.insert("tags".to_string(), Value::Array(tags));

    let owner = if rng.gen_bool(0.2) {
        Value::Null
    } else {
        json!({
            "user": NAMES[rng.gen_range(0..NAMES.len())],
            "level": rng.gen_range(1..=5),
        })
    };
    record.insert("owner".to_string(), owner);

    let history_len = rng.gen_range(0..=2);
    let history: Vec<Value> = (0..history_len)
        .map(|step| {
            json!({
                "step": step,
                "delta": [rng.gen_range(-10..10), rng.gen_range(-10..10)],
            })
        })
        .collect();
    record.insert("history".to_string(), Value::Array(history));

    Value::Object(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_reproducible() {
        let reader = SampleDocumentReader::with_config(50, 7);
        assert_eq!(reader.generate(), reader.generate());
        assert_ne!(reader.generate(), SampleDocumentReader::with_config(50, 8).generate());
    }

    #[test]
    fn test_sample_document_reads() {
        let reader = SampleDocumentReader::with_config(100, 42);
        let doc = reader.read(Path::new(""), 16).unwrap();
        // Wrapper brackets plus at least key, id, name, active, score, tags, ], owner, history, ] per record
        assert!(doc.len() > 100 * 10);
        assert_eq!(doc.lines()[0].depth(), 0);
    }
}
