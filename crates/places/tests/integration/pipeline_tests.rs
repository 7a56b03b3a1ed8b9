//! File-backed ingestion, search and export through a bootstrapped context

use std::fs;
use std::path::Path;
use std::sync::Arc;

use places::prelude::*;
use places::providers::reporting::Report;

const HEADER: &str = "state_name,city_name,latitude,longitude,google_maps_url,wikipedia_content,unsplash_images,airbnb_listings,vector_embeddings";

fn write_rows(path: &Path, rows: &[&str]) {
    let mut text = format!("{HEADER}\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    fs::write(path, text).expect("write csv");
}

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.dataset.text_soft_limit = 20;
    config.search.default_k = 2;
    config
}

fn fixture_rows() -> Vec<&'static str> {
    vec![
        r#"Rajasthan,Jaipur,26.9124,75.7873,"https://www.google.com/maps?q=26.9124,75.7873",Pink city,"[""https://images.unsplash.com/jaipur-1""]","[{""id"":""a1"",""url"":""https://www.airbnb.com/rooms/1"",""price"":42.5,""rating"":4.8,""reviews"":120}]","[1.0,0.0,0.0]""#,
        r#"Rajasthan,Udaipur,24.5854,73.7125,"https://www.google.com/maps?q=24.5854,73.7125",City of lakes,"[]","[]","[0.9,0.1,0.0]""#,
        r#"Goa,Panaji,north,73.8278,"https://www.google.com/maps?q=15.4909,73.8278",,"[]","[]","[0.0,1.0,0.0]""#,
        r#"Kerala,Kochi,95,76.2673,"https://www.google.com/maps?q=9.9312,76.2673",,"[]","[]","[0.0,0.0,1.0]""#,
        r#"Punjab,Amritsar,31.634,74.8723,"https://www.google.com/maps?q=31.634,74.8723",Home of the Golden Temple and the Wagah border,"[]","[]","[0.5,0.5,0.0]""#,
    ]
}

#[test]
fn test_csv_ingestion_accounts_for_every_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("places.csv");
    write_rows(&path, &fixture_rows());

    let config = config();
    let reporter = Arc::new(CollectingReporter::new());
    let context = bootstrap_with_reporter(&config, reporter.clone()).expect("context");

    let options = config.io.csv_options().expect("csv options");
    let source = CsvRowSource::from_path(&path, options).expect("open csv");
    let summary = context.ingestion().ingest(source);

    assert_eq!(summary.total, 5);
    assert_eq!(summary.accepted, 3);
    assert_eq!(summary.warned, 1);
    assert_eq!(summary.decode_failed, 1);
    assert_eq!(summary.validation_failed, 1);
    assert_eq!(summary.rejected, 0);

    let failed_rows: Vec<usize> = summary.failures.iter().map(|f| f.row).collect();
    assert_eq!(failed_rows, vec![2, 3]);
    assert!(summary.failures[0].message.contains("latitude"));
    assert_eq!(summary.failures[1].issues[0].field, "latitude");

    // Kochi's range error and Amritsar's long text warning
    let issue_rows: Vec<usize> = reporter
        .reports()
        .iter()
        .filter(|r| matches!(r, Report::Issues { .. }))
        .map(Report::row)
        .collect();
    assert_eq!(issue_rows, vec![3, 4]);
    assert_eq!(reporter.failures().len(), 1);

    let stats = context.stats();
    assert_eq!(stats.places, 3);
    assert_eq!(stats.dimensions, Some(3));

    let jaipur = context.store().get("Rajasthan", "Jaipur").expect("stored");
    assert_eq!(jaipur.listings()[0].rating, Some(4.8));
    assert_eq!(jaipur.images().len(), 1);
}

#[test]
fn test_reject_policy_skips_warned_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("places.csv");
    write_rows(&path, &fixture_rows());

    let mut config = config();
    config.dataset.warning_policy = WarningPolicy::Reject;
    let context = bootstrap(&config).expect("context");

    let source = CsvRowSource::from_path(&path, CsvOptions::default()).expect("open csv");
    let summary = context.ingestion().ingest(source);

    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.warned, 0);
    assert_eq!(summary.validation_failed, 2);
    assert!(context.store().get("Punjab", "Amritsar").is_none());
}

#[test]
fn test_similar_to_excludes_the_anchor() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("places.csv");
    write_rows(&path, &fixture_rows());

    let context = bootstrap(&config()).expect("context");
    let source = CsvRowSource::from_path(&path, CsvOptions::default()).expect("open csv");
    context.ingestion().ingest(source);

    let similar = context
        .search()
        .similar_to("Rajasthan", "Jaipur", None)
        .expect("anchor stored");
    let cities: Vec<&str> = similar.iter().map(|s| s.place.city_name.as_str()).collect();
    assert_eq!(cities, vec!["Udaipur", "Amritsar"]);
    assert!(similar[0].score > similar[1].score);

    let err = context
        .search()
        .similar_to("Goa", "Panaji", None)
        .expect_err("never stored");
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_jsonl_export_reingests_to_equal_places() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv_path = dir.path().join("places.csv");
    let jsonl_path = dir.path().join("places.jsonl");
    write_rows(&csv_path, &fixture_rows());

    let first = bootstrap(&config()).expect("context");
    let source = CsvRowSource::from_path(&csv_path, CsvOptions::default()).expect("open csv");
    first.ingestion().ingest(source);

    let mut sink = JsonLinesRowSink::create(&jsonl_path).expect("create jsonl");
    let written = first
        .export()
        .export(&mut sink, RowFormat::Columnar)
        .expect("export");
    drop(sink);
    assert_eq!(written, 3);

    let lines = fs::read_to_string(&jsonl_path).expect("read jsonl");
    let first_line: serde_json::Value =
        serde_json::from_str(lines.lines().next().expect("a line")).expect("json object");
    assert_eq!(first_line["latitude"], serde_json::json!(26.9124));
    assert!(first_line["airbnb_listings"].is_array());

    let second = bootstrap(&config()).expect("context");
    let source = JsonLinesRowSource::from_path(&jsonl_path).expect("open jsonl");
    let summary = second.ingestion().ingest(source);
    assert_eq!(summary.accepted, 3);

    let before: Vec<Place> = first.store().scan().map(|p| (*p).clone()).collect();
    let after: Vec<Place> = second.store().scan().map(|p| (*p).clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_csv_export_writes_canonical_header_and_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv_path = dir.path().join("places.csv");
    let out_path = dir.path().join("export.csv");
    write_rows(&csv_path, &fixture_rows());

    let first = bootstrap(&config()).expect("context");
    let source = CsvRowSource::from_path(&csv_path, CsvOptions::default()).expect("open csv");
    first.ingestion().ingest(source);

    let mut sink = CsvRowSink::create(&out_path, CsvOptions::default()).expect("create csv");
    assert_eq!(first.export().export(&mut sink, RowFormat::Flat).expect("export"), 3);
    drop(sink);

    let text = fs::read_to_string(&out_path).expect("read export");
    assert_eq!(text.lines().next(), Some(HEADER));
    assert_eq!(text.lines().count(), 4);

    // Every optional column of the fixture is set, so the flat form re-reads exactly
    let second = bootstrap(&config()).expect("context");
    let source = CsvRowSource::from_path(&out_path, CsvOptions::default()).expect("open csv");
    assert_eq!(second.ingestion().ingest(source).accepted, 3);

    let before: Vec<Place> = first.store().scan().map(|p| (*p).clone()).collect();
    let after: Vec<Place> = second.store().scan().map(|p| (*p).clone()).collect();
    assert_eq!(before, after);
}
