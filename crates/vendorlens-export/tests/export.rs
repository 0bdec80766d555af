//! Workbook export through the filesystem.

use chrono::NaiveDate;
use vendorlens_export::{build_sheets, render_xlsx, require_record, write_xlsx};
use vendorlens_extract::extract;

const THREAD: &str = "From: Acme Aluminum <sales@acme.test>\n\
Price: $24.99 per unit. ISO 9001 certified. Lead time is 3 weeks.";

#[test]
fn test_write_xlsx_names_file_after_vendor() {
    let dir = tempfile::tempdir().unwrap();
    let record = extract(THREAD);

    let path = write_xlsx(&record, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "AcmeAluminum_summary.xlsx");
    let bytes = std::fs::read(&path).unwrap();
    // XLSX is a zip container.
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_render_xlsx_in_memory() {
    let record = extract(THREAD);
    let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
    let bytes = render_xlsx(&build_sheets(&record, date)).unwrap();
    assert!(bytes.len() > 1000);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_truncates_oversized_cells() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = extract(THREAD);
    record.vendor_name = "A".repeat(40_000);
    record.additional_notes = "Payment terms: Net 30. ".repeat(2_000);

    let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
    let bytes = render_xlsx(&build_sheets(&record, date)).unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let path = write_xlsx(&record, dir.path()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_export_refuses_missing_record() {
    let err = require_record(None).unwrap_err();
    assert!(err.to_string().contains("No vendor record"));
}
