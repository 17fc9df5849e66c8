//! Report writer tests against a temporary output directory

use chrono::NaiveDate;
use namecheck::report::{ReportLayout, ReportWriter};
use namecheck::{NameResult, ProbeOutcome, SourceId, SourceSet, Status};
use tempfile::TempDir;

fn layout() -> ReportLayout {
    ReportLayout {
        tlds: vec!["com".to_string(), "de".to_string()],
        platforms: vec!["instagram".to_string(), "tiktok".to_string()],
    }
}

fn results() -> Vec<NameResult> {
    let free = SourceSet::builder()
        .with_domains(["com", "de"])
        .with_social(["instagram", "tiktok"])
        .build();
    let taken = SourceSet::builder()
        .with_domains(["com", "de"])
        .with_social(["instagram", "tiktok"])
        .single(SourceId::Discogs, &ProbeOutcome::found("https://api.discogs.com/artists/1"))
        .single(SourceId::Bandcamp, &ProbeOutcome::found_weak())
        .domain("com", &ProbeOutcome::found("gone.com"))
        .social("tiktok", &ProbeOutcome::Failed("HTTP 429".to_string()))
        .build();

    vec![
        NameResult {
            name: "Nova".to_string(),
            sources: free,
            score: 0.0,
            status: Status::CertainlyFree,
        },
        NameResult {
            name: "Gone".to_string(),
            sources: taken,
            score: 0.6,
            status: Status::Partial,
        },
    ]
}

fn stamp_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(14, 5, 9))
        .unwrap()
}

#[test]
fn test_write_all_creates_three_timestamped_files() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("artists");
    let writer = ReportWriter::new(&dir, layout());

    let paths = writer.write_all(&results(), stamp_time()).unwrap();

    assert_eq!(paths.json, dir.join("results_19102026_140509.json"));
    assert_eq!(paths.csv, dir.join("results_19102026_140509.csv"));
    assert_eq!(paths.text, dir.join("results_19102026_140509.txt"));
    assert!(paths.json.exists());
    assert!(paths.csv.exists());
    assert!(paths.text.exists());
}

#[test]
fn test_json_report_structure() {
    let temp = TempDir::new().unwrap();
    let writer = ReportWriter::new(temp.path(), layout());
    let paths = writer.write_all(&results(), stamp_time()).unwrap();

    let content = std::fs::read_to_string(&paths.json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    let gone = &entries[1];
    assert_eq!(gone["name"], "Gone");
    assert_eq!(gone["status"], "partial");
    assert_eq!(gone["score"], 0.6);

    let sources = &gone["sources"];
    assert_eq!(sources["discogs"]["exists"], true);
    assert_eq!(
        sources["discogs"]["reference"],
        "https://api.discogs.com/artists/1"
    );
    assert_eq!(sources["bandcamp"]["exists"], true);
    assert!(sources["bandcamp"]["reference"].is_null());
    assert_eq!(sources["domains"]["com"], true);
    assert_eq!(sources["domains"]["de"], false);
    assert_eq!(sources["social_media"]["tiktok"]["exists"], false);
    assert_eq!(sources["failures"]["social_media.tiktok"], "HTTP 429");

    // No failures, no failures key
    assert!(entries[0]["sources"].get("failures").is_none());
    assert_eq!(entries[0]["status"], "certainly free");
}

#[test]
fn test_json_round_trips_into_results() {
    let temp = TempDir::new().unwrap();
    let writer = ReportWriter::new(temp.path(), layout());
    let paths = writer.write_all(&results(), stamp_time()).unwrap();

    let content = std::fs::read_to_string(&paths.json).unwrap();
    let parsed: Vec<NameResult> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, results());
}

#[test]
fn test_csv_report_rows() {
    let temp = TempDir::new().unwrap();
    let writer = ReportWriter::new(temp.path(), layout());
    let paths = writer.write_all(&results(), stamp_time()).unwrap();

    let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers.len(), 3 + 6 + 2 + 2);
    assert_eq!(headers[9], "domains_com");
    assert_eq!(headers[12], "social_tiktok");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Nova");
    assert_eq!(&rows[0][2], "certainly free");
    assert_eq!(&rows[1][1], "0.60");
    assert_eq!(&rows[1][3], "true");
    assert_eq!(&rows[1][9], "true");
    assert_eq!(&rows[1][12], "false");
}

#[test]
fn test_text_report_lists_free_names_only() {
    let temp = TempDir::new().unwrap();
    let writer = ReportWriter::new(temp.path(), layout());
    let paths = writer.write_all(&results(), stamp_time()).unwrap();

    let text = std::fs::read_to_string(&paths.text).unwrap();
    assert!(text.starts_with("Artist names - certainly free"));
    assert!(text.contains("19102026_140509"));
    assert!(text.contains("Name: Nova   Score: 0.00 Status: certainly free"));
    assert!(!text.contains("Gone"));
}

#[test]
fn test_existing_output_dir_reused() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("artists")).unwrap();
    let writer = ReportWriter::new(temp.path().join("artists"), layout());

    writer.write_all(&[], stamp_time()).unwrap();
    let later = NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(14, 6, 0))
        .unwrap();
    writer.write_all(&[], later).unwrap();

    let count = std::fs::read_dir(writer.output_dir()).unwrap().count();
    assert_eq!(count, 6);
}
