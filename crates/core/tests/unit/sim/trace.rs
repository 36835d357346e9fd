//! Trace Reader Tests.
//!
//! Verifies token-pair parsing, address prefixes, label classification, and
//! error reporting for truncated or undecodable records.

use std::io::{Cursor, Write};

use cachesim_core::common::{SimError, TraceError};
use cachesim_core::sim::trace::parse_address;
use cachesim_core::sim::{AccessKind, TraceReader, TraceRecord};

fn parse(text: &str) -> Vec<Result<TraceRecord, SimError>> {
    TraceReader::new(Cursor::new(text.to_string())).collect()
}

fn records(text: &str) -> Vec<TraceRecord> {
    parse(text)
        .into_iter()
        .map(|r| match r {
            Ok(rec) => rec,
            Err(e) => panic!("unexpected trace error: {e}"),
        })
        .collect()
}

#[test]
fn parses_one_record_per_line() {
    let recs = records("0 7fffed80\n1 10010000\n0 10010060\n");
    assert_eq!(
        recs,
        vec![
            TraceRecord::read(0x7fff_ed80),
            TraceRecord::write(0x1001_0000),
            TraceRecord::read(0x1001_0060),
        ]
    );
}

#[test]
fn pairs_may_span_lines_and_spaces() {
    let recs = records("  0\n  7fffed80 1\t\t10010000\n\n");
    assert_eq!(
        recs,
        vec![TraceRecord::read(0x7fff_ed80), TraceRecord::write(0x1001_0000)]
    );
}

#[test]
fn accepts_hex_prefix_and_uppercase() {
    let recs = records("1 0xDEADBEEF 0 0X10 0 ABCDEF");
    assert_eq!(recs[0].address, 0xDEAD_BEEF);
    assert_eq!(recs[1].address, 0x10);
    assert_eq!(recs[2].address, 0xAB_CDEF);
}

#[test]
fn other_labels_are_unlabelled_accesses() {
    let recs = records("2 40 r 80");
    assert!(recs.iter().all(|r| r.kind == AccessKind::Other));
    assert!(!AccessKind::Other.is_write());
}

#[test]
fn empty_input_has_no_records() {
    assert!(parse("").is_empty());
    assert!(parse("\n   \n").is_empty());
}

#[test]
fn dangling_label_is_malformed() {
    let out = parse("0 40\n1");
    assert_eq!(out.len(), 2);
    match &out[1] {
        Err(SimError::Trace(TraceError::MalformedTraceRecord { record, text, .. })) => {
            assert_eq!(*record, 2);
            assert_eq!(text, "1");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn invalid_hex_is_malformed_and_ends_iteration() {
    let out = parse("0 40 1 xyz 0 80");
    assert_eq!(out.len(), 2);
    assert!(out[0].is_ok());
    assert!(matches!(
        &out[1],
        Err(SimError::Trace(TraceError::MalformedTraceRecord { record: 2, .. }))
    ));
}

#[test]
fn parse_address_rejects_signs_and_empty() {
    assert_eq!(parse_address("0x"), None);
    assert_eq!(parse_address("+10"), None);
    assert_eq!(parse_address("-10"), None);
    assert_eq!(parse_address("ff"), Some(0xff));
}

#[test]
fn opens_trace_file_from_disk() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(f) => f,
        Err(e) => panic!("tempfile: {e}"),
    };
    if let Err(e) = writeln!(file, "1 0\n0 40\n0 0") {
        panic!("write trace: {e}");
    }

    let reader = match TraceReader::open(file.path()) {
        Ok(r) => r,
        Err(e) => panic!("open trace: {e}"),
    };
    let recs: Vec<_> = reader.filter_map(Result::ok).collect();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0], TraceRecord::write(0));
}

#[test]
fn missing_file_is_io_error() {
    let err = TraceReader::open("/nonexistent/cachesim/trace.txt").err();
    assert!(matches!(err, Some(SimError::Trace(TraceError::Io(_)))));
}

#[test]
fn records_read_tracks_position() {
    let mut reader = TraceReader::new(Cursor::new("0 1 0 2".to_string()));
    let _ = reader.next();
    assert_eq!(reader.records_read(), 1);
    let _ = reader.next();
    assert_eq!(reader.records_read(), 2);
    assert!(reader.next().is_none());
}
