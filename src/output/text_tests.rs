use super::*;

fn sample_stats() -> SlimStats {
    let mut stats = SlimStats::new();
    stats.record("lineageTag");
    stats.record("lineageTag");
    stats.record("annotation");
    stats.record("cultures-folder");
    stats
}

#[test]
fn text_summary_lists_sorted_counts() {
    let summary = RunSummary {
        documents_found: 3,
        documents_processed: 2,
        input_bytes: 2048,
        output_bytes: 512,
    };
    let out = TextFormatter::new().format(&summary, &sample_stats()).unwrap();

    assert!(out.contains("Slimmed 2 of 3 documents"));
    assert!(out.contains("Reduction: 75.0%"));
    assert!(out.contains("Removed 4 entries:"));

    let annotation_pos = out.find("annotation").unwrap();
    let cultures_pos = out.find("cultures-folder").unwrap();
    let lineage_pos = out.find("lineageTag").unwrap();
    assert!(annotation_pos < cultures_pos);
    assert!(cultures_pos < lineage_pos);
}

#[test]
fn text_summary_without_removals() {
    let summary = RunSummary {
        documents_found: 1,
        documents_processed: 1,
        input_bytes: 10,
        output_bytes: 10,
    };
    let out = TextFormatter::new()
        .format(&summary, &SlimStats::new())
        .unwrap();
    assert!(out.contains("Nothing removed."));
}

#[test]
fn bytes_are_human_readable() {
    assert_eq!(format_bytes(512), "512 B");
    assert_eq!(format_bytes(2048), "2.0 KiB");
    assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
}
