//! Document acquisition: local files in, decoded text and documents out.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use brotli::Decompressor;

use crate::document::Document;
use crate::error::ViewerError;

/// Trait for producing a flattened [`Document`] from some source.
pub trait DocumentReader: Send {
    /// Reads, parses and flattens. `path` may be ignored by generated sources.
    fn read(&self, path: &Path, max_depth: usize) -> Result<Document, ViewerError>;
}

/// Reads JSON files from disk. Files ending in `.br` are Brotli-compressed.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileReader;

impl JsonFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for JsonFileReader {
    fn read(&self, path: &Path, max_depth: usize) -> Result<Document, ViewerError> {
        let text = read_text(path)?;
        Document::parse(&text, max_depth)
    }
}

/// Reads the whole file at `path` into a string.
pub fn read_text(path: &Path) -> Result<String, ViewerError> {
    let file = File::open(path)?;
    let compressed = path.extension().map(|ext| ext == "br").unwrap_or(false);

    let mut bytes = Vec::new();
    if compressed {
        let mut decompressor = Decompressor::new(file, 4096);
        decompressor.read_to_end(&mut bytes)?;
    } else {
        BufReader::new(file).read_to_end(&mut bytes)?;
    }

    let mut text = String::from_utf8(bytes)?;
    if text.starts_with('\u{feff}') {
        text.replace_range(..'\u{feff}'.len_utf8(), "");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_plain_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"a": [1, 2]}"#).unwrap();

        let doc = JsonFileReader::new().read(file.path(), 16).unwrap();
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("\u{feff}[true]".as_bytes()).unwrap();
        assert_eq!(read_text(file.path()).unwrap(), "[true]");
    }

    #[test]
    fn test_read_brotli_file() {
        let mut compressed = Vec::new();
        {
            let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 5, 22);
            writer.write_all(br#"[null, "x"]"#).unwrap();
        }
        let mut file = tempfile::Builder::new().suffix(".json.br").tempfile().unwrap();
        file.write_all(&compressed).unwrap();

        let doc = JsonFileReader::new().read(file.path(), 16).unwrap();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.line(2).and_then(|l| l.value()), Some("\"x\""));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'"', 0xff, 0xfe, b'"']).unwrap();
        assert!(matches!(read_text(file.path()), Err(ViewerError::Utf8(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = read_text(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ViewerError::Io(_)));
    }
}
