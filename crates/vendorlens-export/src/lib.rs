//! VendorLens Export: renders a [`VendorRecord`] as summary panels and as a
//! four-sheet spreadsheet.

pub mod panels;
pub mod sheets;
pub mod xlsx;

pub use panels::{summary_panels, PanelBody, SummaryPanel};
pub use sheets::{build_sheets, export_filename, Row, Sheet};
pub use xlsx::{render_xlsx, write_xlsx};

use vendorlens_core::{Error, Result};
use vendorlens_extract::VendorRecord;

/// Refuse to export when no analysis result is present.
pub fn require_record(record: Option<&VendorRecord>) -> Result<&VendorRecord> {
    record.ok_or(Error::MissingRecord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_record() {
        assert!(matches!(require_record(None), Err(Error::MissingRecord)));
        let record = vendorlens_extract::extract("From: Acme");
        assert_eq!(require_record(Some(&record)).unwrap().vendor_name, "Acme");
    }
}
