//! XLSX rendering via `rust_xlsxwriter`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;
use vendorlens_core::{Error, Result};
use vendorlens_extract::VendorRecord;

use crate::sheets::{build_sheets, export_filename, Sheet};

const LABEL_WIDTH: f64 = 20.0;
const VALUE_WIDTH: f64 = 50.0;

/// Excel's per-cell character limit.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Cell text cut to [`MAX_CELL_CHARS`], ending in an ellipsis when shortened.
fn cell_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        None => Cow::Borrowed(text),
        Some(_) => {
            let mut cut: String = text.chars().take(MAX_CELL_CHARS - 1).collect();
            cut.push('…');
            Cow::Owned(cut)
        }
    }
}

/// Render sheets into an in-memory `.xlsx` file.
pub fn render_xlsx(sheets: &[Sheet]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet.name)
            .map_err(|err| Error::Export(format!("Unable to name sheet {}: {err}", sheet.name)))?;
        worksheet
            .set_column_width(0, LABEL_WIDTH)
            .and_then(|ws| ws.set_column_width(1, VALUE_WIDTH))
            .map_err(|err| Error::Export(format!("Unable to size columns: {err}")))?;

        for (index, row) in sheet.rows.iter().enumerate() {
            let r = index as u32;
            if !row.label.is_empty() {
                let written = if row.heading {
                    worksheet.write_string_with_format(r, 0, cell_text(&row.label), &bold)
                } else {
                    worksheet.write_string(r, 0, cell_text(&row.label))
                };
                written.map_err(|err| {
                    Error::Export(format!("Unable to write {} row {}: {err}", sheet.name, r))
                })?;
            }
            if !row.value.is_empty() {
                worksheet.write_string(r, 1, cell_text(&row.value)).map_err(|err| {
                    Error::Export(format!("Unable to write {} row {}: {err}", sheet.name, r))
                })?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|err| Error::Export(format!("Unable to finalize workbook: {err}")))
}

/// Write the record's workbook into `dir`, returning the file path.
pub fn write_xlsx(record: &VendorRecord, dir: &Path) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    let bytes = render_xlsx(&build_sheets(record, today))?;
    let path = dir.join(export_filename(&record.vendor_name));
    std::fs::write(&path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "Exported vendor summary");
    Ok(path)
}
