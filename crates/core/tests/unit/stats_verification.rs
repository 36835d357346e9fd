//! SimStats and SimReport unit tests.
//!
//! Verifies counter updates, the end-of-run flush adjustment, miss-rate
//! derivation, and the text and JSON renderings of the report.

use cachesim_core::SimReport;
use cachesim_core::sim::AccessKind;
use cachesim_core::stats::SimStats;
use pretty_assertions::assert_eq;

fn sample_report() -> SimReport {
    SimReport {
        accesses: 8,
        hits: 5,
        misses: 3,
        reads: 6,
        writes: 2,
        bytes_from_memory: 192,
        bytes_to_memory: 128,
    }
}

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.accesses, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.reads, 0);
    assert_eq!(stats.writes, 0);
    assert_eq!(stats.bytes_from_memory, 0);
    assert_eq!(stats.bytes_written_back, 0);
    assert_eq!(stats.resident_dirty_lines, 0);
}

#[test]
fn record_access_splits_by_kind() {
    let mut stats = SimStats::default();
    stats.record_access(AccessKind::Read);
    stats.record_access(AccessKind::Write);
    stats.record_access(AccessKind::Other);
    assert_eq!((stats.accesses, stats.reads, stats.writes), (3, 1, 1));
}

#[test]
fn write_back_decrements_resident_dirty_lines() {
    let mut stats = SimStats::default();
    stats.record_dirtied();
    stats.record_dirtied();
    stats.record_write_back(64);
    assert_eq!(stats.resident_dirty_lines, 1);
    assert_eq!(stats.bytes_written_back, 64);
}

#[test]
fn report_charges_resident_dirty_lines() {
    let mut stats = SimStats::default();
    stats.record_miss(32);
    stats.record_dirtied();
    stats.record_dirtied();
    stats.record_write_back(32);
    stats.record_dirtied();

    let report = stats.report(32);
    assert_eq!(report.bytes_from_memory, 32);
    // One eviction write-back plus two lines still dirty.
    assert_eq!(report.bytes_to_memory, 3 * 32);
}

#[test]
fn miss_rate_is_derived_at_report_time() {
    let report = sample_report();
    assert!((report.miss_rate() - 0.375).abs() < 1e-12);
}

#[test]
fn display_matches_text_layout() {
    let text = sample_report().to_string();
    let expected = "\
Demand fetch: 8
Cache hit: 5
Cache miss: 3
Miss rate: 0.3750
Read data: 6
Write data: 2
Bytes from memory: 192
Bytes to memory: 128";
    assert_eq!(text, expected);
}

#[test]
fn miss_rate_rounds_to_four_places() {
    let report = SimReport {
        accesses: 3,
        hits: 2,
        misses: 1,
        reads: 3,
        writes: 0,
        bytes_from_memory: 64,
        bytes_to_memory: 0,
    };
    assert!(report.to_string().contains("Miss rate: 0.3333"));
}

#[test]
fn json_includes_miss_rate() {
    let value = match serde_json::to_value(sample_report()) {
        Ok(v) => v,
        Err(e) => panic!("serialize: {e}"),
    };
    assert_eq!(value["accesses"], 8);
    assert_eq!(value["miss_rate"], 0.375);
    assert_eq!(value["bytes_to_memory"], 128);
}
