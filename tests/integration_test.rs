use rjview::{BlockScheduler, ChunkOutcome, Document, DocumentReader, JsonFileReader, SampleDocumentReader};
use rjview::{Bracket, FixedAdvanceMeasurer, RenderStrategy, TextBlock, ViewerConfig, ViewerError, ViewerSession};
use anyhow::Result;
use serde_json::json;
use std::io::Write;

/// `{"items": [0, 1, ...]}` with `entries` elements, i.e. `entries + 2` lines.
fn items_document(entries: usize) -> Result<Document> {
    let items: Vec<_> = (0..entries).map(|i| json!(i)).collect();
    Ok(Document::from_value(&json!({ "items": items }), 64)?)
}

fn run_to_done(session: &mut ViewerSession<TextBlock>) {
    while session.materialize_next_chunk() == ChunkOutcome::Pending {}
}

fn write_temp(suffix: &str, bytes: &[u8]) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(bytes)?;
    Ok(file)
}

#[test]
fn test_read_nested_object_file() -> Result<()> {
    let file = write_temp(".json", br#"{"a": [1, "two", null]}"#)?;
    let doc = JsonFileReader::new().read(file.path(), 64)?;

    let rendered: Vec<String> = doc.lines().iter().map(|l| l.to_string()).collect();
    assert_eq!(rendered, vec!["a: [", "0: 1", "1: \"two\"", "2: null", "]"]);

    let depths: Vec<usize> = doc.lines().iter().map(|l| l.depth()).collect();
    assert_eq!(depths, vec![0, 1, 1, 1, 0]);
    assert!(doc.lines()[1..4].iter().all(|l| l.is_array_element()));
    assert_eq!(doc.lines()[0].bracket_glyph(), Some(Bracket::OpenArray));
    Ok(())
}

#[test]
fn test_empty_array_document() -> Result<()> {
    let file = write_temp(".json", b"[]")?;
    let doc = JsonFileReader::new().read(file.path(), 64)?;

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.lines()[0].bracket_glyph(), Some(Bracket::OpenArray));
    assert_eq!(doc.lines()[1].bracket_glyph(), Some(Bracket::CloseArray));
    assert!(doc.lines().iter().all(|l| l.depth() == 0));
    Ok(())
}

#[test]
fn test_parse_failure_never_builds_a_document() -> Result<()> {
    let file = write_temp(".json", br#"{"a": [1, 2"#)?;
    let err = JsonFileReader::new().read(file.path(), 64).unwrap_err();

    assert!(matches!(err, ViewerError::Parse(_)));
    assert!(err.is_parse_failure());
    Ok(())
}

#[test]
fn test_brotli_file_matches_plain_file() -> Result<()> {
    let text = serde_json::to_vec(&json!({"users": [{"name": "ada", "admin": true}], "count": 1}))?;

    let mut compressed = Vec::new();
    {
        let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 5, 22);
        writer.write_all(&text)?;
    }

    let plain = write_temp(".json", &text)?;
    let packed = write_temp(".json.br", &compressed)?;

    let reader = JsonFileReader::new();
    let from_plain = reader.read(plain.path(), 64)?;
    let from_packed = reader.read(packed.path(), 64)?;
    assert_eq!(from_plain.lines(), from_packed.lines());
    Ok(())
}

#[test]
fn test_reader_polymorphism() -> Result<()> {
    let file = write_temp(".json", b"[true, false]")?;
    let readers: Vec<(Box<dyn DocumentReader>, &std::path::Path)> = vec![
        (Box::new(JsonFileReader::new()), file.path()),
        (Box::new(SampleDocumentReader::with_config(10, 42)), std::path::Path::new("")),
    ];

    for (reader, path) in &readers {
        let doc = reader.read(path, 64)?;
        assert!(!doc.is_empty());
        assert_eq!(doc.lines()[0].bracket_glyph(), Some(Bracket::OpenArray));
        assert_eq!(doc.lines()[doc.len() - 1].bracket_glyph(), Some(Bracket::CloseArray));
    }
    Ok(())
}

#[test]
fn test_sample_document_is_reproducible() -> Result<()> {
    let first = SampleDocumentReader::new().read(std::path::Path::new(""), 64)?;
    let second = SampleDocumentReader::new().read(std::path::Path::new(""), 64)?;
    assert_eq!(first.lines(), second.lines());
    assert!(first.len() > 100_000);
    Ok(())
}

#[test]
fn test_midpoint_materializes_three_blocks() -> Result<()> {
    let doc = items_document(9_998)?;
    assert_eq!(doc.len(), 10_000);
    assert_eq!(doc.block_count(100), 100);

    let mut measurer = FixedAdvanceMeasurer::new(8.0, 20.0);
    let mut session = ViewerSession::new(doc, ViewerConfig::default(), &mut measurer, TextBlock::new);

    // Viewport centered on line 5,000
    session.on_viewport_change(99_600.0, 800.0);
    run_to_done(&mut session);

    let ranges: Vec<_> = session.placements().iter().map(|p| p.range.clone()).collect();
    assert_eq!(ranges, vec![4_900..5_000, 5_000..5_100, 5_100..5_200]);
    assert_eq!(session.materialized_line_count(), 300);
    Ok(())
}

#[test]
fn test_one_block_scroll_reassigns_one_slot() -> Result<()> {
    let doc = items_document(9_998)?;
    let mut scheduler = BlockScheduler::new(100, 1, 100, TextBlock::new);
    let block_height = 100.0 * 20.0;

    let first = scheduler.on_viewport_change(&doc, 101_000.0, block_height);
    assert_eq!(first.center, 50);
    while !scheduler.materialize_next_chunk(&doc).is_done() {}

    let second = scheduler.on_viewport_change(&doc, 103_000.0, block_height);
    assert_eq!(second.center, 51);
    assert_eq!(second.reassigned.len(), 1);

    // Same center again: nothing moves
    let third = scheduler.on_viewport_change(&doc, 103_500.0, block_height);
    assert!(third.reassigned.is_empty());
    Ok(())
}

#[test]
fn test_scrolling_never_exceeds_capacity() -> Result<()> {
    let doc = items_document(4_998)?;
    let mut measurer = FixedAdvanceMeasurer::new(8.0, 10.0);
    let mut session = ViewerSession::new(doc, ViewerConfig::default(), &mut measurer, TextBlock::new);
    let capacity_lines = 3 * 100;

    let mut offset = 0.0;
    while offset < session.track_height() {
        session.on_viewport_change(offset, 600.0);
        // Only a couple of chunks per position, as during fast scrolling
        session.materialize_next_chunk();
        session.materialize_next_chunk();
        assert!(session.materialized_line_count() <= capacity_lines);
        assert!(session.placements().len() <= 3);
        offset += 730.0;
    }

    run_to_done(&mut session);
    assert!(session.materialized_line_count() <= capacity_lines);
    Ok(())
}

#[test]
fn test_jump_discards_stale_work() -> Result<()> {
    let doc = items_document(9_998)?;
    let mut measurer = FixedAdvanceMeasurer::new(8.0, 10.0);
    let mut session = ViewerSession::new(doc, ViewerConfig::default(), &mut measurer, TextBlock::new);

    // Block 10, then straight to block 80 before any deferred chunk runs
    session.on_viewport_change(10_000.0, 500.0);
    session.on_viewport_change(80_000.0, 500.0);
    run_to_done(&mut session);

    let ranges: Vec<_> = session.placements().iter().map(|p| p.range.clone()).collect();
    assert_eq!(ranges, vec![7_900..8_000, 8_000..8_100, 8_100..8_200]);
    Ok(())
}

#[test]
fn test_append_strategy_grows_with_scroll() -> Result<()> {
    let doc = items_document(2_998)?;
    let config = ViewerConfig {
        strategy: RenderStrategy::Append,
        append_lookahead_px: 200.0,
        ..ViewerConfig::default()
    };
    let mut measurer = FixedAdvanceMeasurer::new(8.0, 10.0);
    let mut session = ViewerSession::new(doc, config, &mut measurer, TextBlock::new);

    session.on_viewport_change(0.0, 600.0);
    run_to_done(&mut session);
    let initial = session.materialized_line_count();
    assert!(initial * 10 >= 800);

    session.on_viewport_change(25_000.0, 600.0);
    run_to_done(&mut session);
    assert!(session.materialized_line_count() * 10 >= 25_800);

    // Nothing is evicted: the single container starts at line 0
    let placements = session.placements();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].range.start, 0);
    assert_eq!(placements[0].container.lines()[0].text(), "items: [");
    Ok(())
}

#[test]
fn test_too_deep_document() -> Result<()> {
    let mut value = json!(1);
    for _ in 0..20 {
        value = json!([value]);
    }
    let text = serde_json::to_vec(&value)?;
    let file = write_temp(".json", &text)?;

    let err = JsonFileReader::new().read(file.path(), 8).unwrap_err();
    assert!(matches!(err, ViewerError::Flatten(_)));
    assert!(JsonFileReader::new().read(file.path(), 64).is_ok());
    Ok(())
}
