//! Record assembly through the driver

use super::{SIMPLE_RECORD, block, run};
use crate::driver::CatalogDriver;
use crate::models::Obsoletion;
use crate::sink::{MemorySink, RecordSink, TsvSink};

#[test]
fn test_single_record_tsv_output() {
    let mut sink = TsvSink::new(Vec::new());
    let stats = CatalogDriver::new()
        .process_str(SIMPLE_RECORD, &mut sink)
        .unwrap();
    sink.finish().unwrap();

    assert_eq!(stats.records_written, 1);
    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert_eq!(text, "5\tA\tB\t1.0\t2.0\t3.0\t4.0\tmerc\t\n");
}

#[test]
fn test_coordinates_are_written_as_read() {
    let input = "# A [B]\n(lat: 30.990, 35.00) - (lon: 100, -85.83333333333333333)\n<5> +proj=merc\n\n";
    let mut sink = TsvSink::new(Vec::new());
    CatalogDriver::new().process_str(input, &mut sink).unwrap();
    sink.finish().unwrap();

    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert_eq!(
        text,
        "5\tA\tB\t30.990\t35.00\t100\t-85.83333333333333333\tmerc\t\n"
    );
}

#[test]
fn test_incomplete_block_is_skipped() {
    let input = format!("# A [B]\n<5> +proj=merc\n\n{}", block(7, None));
    let (result, sink) = run(&input);
    let stats = result.unwrap();

    assert_eq!(stats.incomplete_records_skipped, 1);
    assert_eq!(stats.records_written, 1);
    assert_eq!(sink.records.len(), 1);
    assert_eq!(sink.records[0].identity, "7");
}

#[test]
fn test_incomplete_trailing_block_is_skipped_when_flushed() {
    let input = format!("{}<9> +proj=merc", block(1, None));
    let mut sink = MemorySink::new();
    let stats = CatalogDriver::new()
        .with_flush_trailing_record(true)
        .process_str(&input, &mut sink)
        .unwrap();

    assert_eq!(sink.records.len(), 1);
    assert_eq!(stats.incomplete_records_skipped, 1);
    assert!(!stats.trailing_record_flushed);
}

#[test]
fn test_deprecated_record() {
    let input = "# A [B]\n(lat: 1.0, 2.0) - (lon: 3.0, 4.0)\n# DEPRECATED\n<5> +proj=merc\n\n";
    let (result, sink) = run(input);
    result.unwrap();

    assert_eq!(sink.records.len(), 1);
    assert_eq!(sink.records[0].obsoletion, Some(Obsoletion::Deprecated));
    assert!(sink.records[0].to_tsv_row().ends_with("\tmerc\tDEPRECATED"));
}

#[test]
fn test_row_count_matches_terminated_blocks() {
    let markers = [None, Some("DEPRECATED"), None, Some("DISCONTINUED"), None];
    let input: String = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| block(i as u32 + 1, *marker))
        .collect();

    let (result, sink) = run(&input);
    let stats = result.unwrap();

    assert_eq!(sink.records.len(), markers.len());
    assert_eq!(stats.records_written, markers.len());
    assert_eq!(stats.blank_lines, markers.len());
    assert!(!stats.trailing_record_discarded);

    let identities: Vec<&str> = sink.records.iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(identities, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(sink.records[1].obsoletion, Some(Obsoletion::Deprecated));
    assert_eq!(sink.records[3].obsoletion, Some(Obsoletion::Discontinued));
    assert_eq!(sink.records[2].obsolete_description(), "");
    assert_eq!(sink.records[0].min_lat.value(), -1.5);
    assert_eq!(sink.records[0].max_lon.as_str(), "10.25");
    assert_eq!(sink.records[0].projection, "tmerc");
}

#[test]
fn test_empty_input_produces_no_records() {
    let (result, sink) = run("");
    let stats = result.unwrap();
    assert!(sink.records.is_empty());
    assert_eq!(stats.lines_read, 0);

    let (result, sink) = run("\n\n   \n\t\n");
    let stats = result.unwrap();
    assert!(sink.records.is_empty());
    assert_eq!(stats.blank_lines, 4);
    assert!(!stats.trailing_record_discarded);
}

#[test]
fn test_repeated_blank_lines_between_records() {
    let input = format!("\n\n{}\n\n\n{}", block(1, None), block(2, None));
    let (result, sink) = run(&input);
    result.unwrap();
    assert_eq!(sink.records.len(), 2);
}

#[test]
fn test_unterminated_final_record_is_discarded() {
    let input = format!("{}# A [B]\n(lat: 1.0, 2.0) - (lon: 3.0, 4.0)\n<5> +proj=merc", block(1, None));
    let (result, sink) = run(&input);
    let stats = result.unwrap();

    assert_eq!(sink.records.len(), 1);
    assert_eq!(sink.records[0].identity, "1");
    assert!(stats.trailing_record_discarded);
    assert!(!stats.trailing_record_flushed);
}

#[test]
fn test_unterminated_final_record_can_be_flushed() {
    let input = "# A [B]\n(lat: 1.0, 2.0) - (lon: 3.0, 4.0)\n<5> +proj=merc";
    let mut sink = MemorySink::new();
    let stats = CatalogDriver::new()
        .with_flush_trailing_record(true)
        .process_str(input, &mut sink)
        .unwrap();

    assert_eq!(sink.records.len(), 1);
    assert!(stats.trailing_record_flushed);
    assert!(!stats.trailing_record_discarded);
}

#[test]
fn test_crlf_line_endings() {
    let input = SIMPLE_RECORD.replace('\n', "\r\n");
    let (result, sink) = run(&input);
    result.unwrap();

    assert_eq!(sink.records.len(), 1);
    assert_eq!(sink.records[0].projection, "merc");
    assert_eq!(sink.records[0].description, "B");
}

#[test]
fn test_header_with_punctuation_is_verbatim() {
    let input = "# NAD83(HARN) / Oregon GIC Lambert (ft) [USA - Oregon; ft, \"intl\"]\n\
                 (lat: 41.98, 46.26) - (lon: -124.6, -116.47)\n\
                 <2994> +proj=lcc +lat_1=43 +units=ft\n\n";
    let (result, sink) = run(input);
    result.unwrap();

    let record = &sink.records[0];
    assert_eq!(record.name, "NAD83(HARN) / Oregon GIC Lambert (ft)");
    assert_eq!(record.description, "USA - Oregon; ft, \"intl\"");
    assert_eq!(record.identity, "2994");
    assert_eq!(record.projection, "lcc");
}
