//! Tabular layout of a vendor record: four sheets of label/value rows.

use chrono::NaiveDate;
use vendorlens_extract::record::is_placeholder_list;
use vendorlens_extract::VendorRecord;

/// Marker prefixed to each bullet row.
pub const BULLET: &str = "• ";
/// Value written for a list holding only a "no information" sentinel.
pub const NOT_SPECIFIED_ROW: &str = "Not specified";

/// One spreadsheet row: a label cell and a value cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
    /// Title and section header rows are written bold.
    pub heading: bool,
}

impl Row {
    fn field(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            heading: false,
        }
    }

    fn heading(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            heading: true,
        }
    }

    fn blank() -> Self {
        Self::field("", "")
    }
}

/// A named worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: &'static str,
    pub rows: Vec<Row>,
}

/// Rows for a bullet list: the first carries the label, one row per bullet.
fn list_rows(label: &str, bullets: &[String]) -> Vec<Row> {
    if is_placeholder_list(bullets) {
        return vec![Row::field(label, NOT_SPECIFIED_ROW)];
    }
    bullets
        .iter()
        .enumerate()
        .map(|(i, bullet)| {
            let label = if i == 0 { label } else { "" };
            Row::field(label, &format!("{}{}", BULLET, bullet))
        })
        .collect()
}

fn sheet_header(title: &str, date: &str) -> Vec<Row> {
    vec![Row::heading(title), Row::field("Date", date), Row::blank()]
}

fn pricing_rows(record: &VendorRecord) -> Vec<Row> {
    vec![
        Row::field("Unit Price", &record.pricing.unit_price),
        Row::field("Additional Fees", &record.pricing.additional_fees),
        Row::field("Quantity Discounts", &record.pricing.quantity_discounts),
    ]
}

fn standards_rows(record: &VendorRecord) -> Vec<Row> {
    let mut rows = list_rows("ESG Standards", &record.standards.esg);
    rows.extend(list_rows("Quality Metrics", &record.standards.quality));
    rows.extend(list_rows("Safety Standards", &record.standards.safety));
    rows
}

fn logistics_rows(record: &VendorRecord) -> Vec<Row> {
    vec![
        Row::field("Delivery Terms", &record.logistics.delivery_terms),
        Row::field("Lead Time", &record.logistics.lead_time),
    ]
}

/// Build the Overview, Pricing, Standards and Logistics sheets.
pub fn build_sheets(record: &VendorRecord, date: NaiveDate) -> Vec<Sheet> {
    let date = date.format("%Y-%m-%d").to_string();

    let mut overview = sheet_header("Vendor Summary", &date);
    overview.push(Row::heading("GENERAL INFORMATION"));
    overview.push(Row::field("Vendor Name", &record.vendor_name));
    overview.push(Row::field("Contact", &record.contact_info));
    overview.push(Row::blank());
    overview.push(Row::heading("PRICING"));
    overview.extend(pricing_rows(record));
    overview.push(Row::blank());
    overview.push(Row::heading("STANDARDS"));
    overview.extend(standards_rows(record));
    overview.push(Row::blank());
    overview.push(Row::heading("LOGISTICS"));
    overview.extend(logistics_rows(record));
    overview.push(Row::blank());
    overview.push(Row::heading("ADDITIONAL NOTES"));
    overview.push(Row::field(&record.additional_notes, ""));

    let detail = |title: &str, rows: Vec<Row>| {
        let mut all = sheet_header(title, &date);
        all.push(Row::field("Vendor", &record.vendor_name));
        all.push(Row::blank());
        all.extend(rows);
        all
    };

    vec![
        Sheet {
            name: "Overview",
            rows: overview,
        },
        Sheet {
            name: "Pricing",
            rows: detail("PRICING DETAILS", pricing_rows(record)),
        },
        Sheet {
            name: "Standards",
            rows: detail("STANDARDS & COMPLIANCE", standards_rows(record)),
        },
        Sheet {
            name: "Logistics",
            rows: detail("LOGISTICS & DELIVERY", logistics_rows(record)),
        },
    ]
}

/// Longest filename stem kept, well under common filesystem limits.
const MAX_STEM_CHARS: usize = 100;

/// `<vendor name, alphanumerics only>_summary.xlsx`.
pub fn export_filename(vendor_name: &str) -> String {
    let stem: String = vendor_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_STEM_CHARS)
        .collect();
    if stem.is_empty() {
        "vendor_summary.xlsx".to_string()
    } else {
        format!("{}_summary.xlsx", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendorlens_extract::extract;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn find<'a>(sheet: &'a Sheet, label: &str) -> &'a Row {
        sheet.rows.iter().find(|r| r.label == label).unwrap()
    }

    #[test]
    fn test_four_sheets_in_order() {
        let sheets = build_sheets(&extract("From: Acme"), date());
        let names: Vec<&str> = sheets.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Overview", "Pricing", "Standards", "Logistics"]);
        for sheet in &sheets {
            assert_eq!(sheet.rows[1], Row::field("Date", "2026-03-14"));
        }
    }

    #[test]
    fn test_bullets_one_row_each() {
        let record = extract("ESG: • Carbon neutral\n• ISO 14001 certified\n\nThanks");
        let sheets = build_sheets(&record, date());
        let standards = &sheets[2];
        let start = standards
            .rows
            .iter()
            .position(|r| r.label == "ESG Standards")
            .unwrap();
        assert_eq!(standards.rows[start].value, "• Carbon neutral");
        assert_eq!(standards.rows[start + 1], Row::field("", "• ISO 14001 certified"));
        assert_eq!(find(standards, "Quality Metrics").value, NOT_SPECIFIED_ROW);
        assert_eq!(find(standards, "Safety Standards").value, NOT_SPECIFIED_ROW);
    }

    #[test]
    fn test_overview_sections() {
        let record = extract("From: Acme\nPrice $2.50 per unit. Lead time is 2 weeks.");
        let overview = &build_sheets(&record, date())[0];
        assert!(overview.rows[0].heading);
        assert_eq!(find(overview, "Vendor Name").value, "Acme");
        assert_eq!(find(overview, "Unit Price").value, "$2.50 per unit");
        assert_eq!(find(overview, "Lead Time").value, "2 weeks");
        let notes_at = overview
            .rows
            .iter()
            .position(|r| r.label == "ADDITIONAL NOTES")
            .unwrap();
        assert_eq!(overview.rows[notes_at + 1].label, record.additional_notes);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Acme Aluminum, Inc."), "AcmeAluminumInc_summary.xlsx");
        assert_eq!(export_filename("<>!"), "vendor_summary.xlsx");
    }

    #[test]
    fn test_export_filename_caps_long_names() {
        let name = export_filename(&"A".repeat(40_000));
        assert_eq!(name.len(), MAX_STEM_CHARS + "_summary.xlsx".len());
    }
}
