use crate::domain::{FieldValue, Location, LocationField};
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

/// Builds a one-sheet workbook: a header row, then one row per location.
///
/// Text cells stay text (postcodes keep leading zeros); numeric cells are numbers.
pub fn export_locations_xlsx(locations: &[Location]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, field) in LocationField::ALL.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, field.as_str())
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", field, e))
            })?;
    }

    for (i, location) in locations.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, field) in LocationField::ALL.iter().enumerate() {
            let col = col as u16;
            let written = match field.value(location) {
                FieldValue::Text(s) => worksheet.write_string(r, col, s),
                FieldValue::Integer(n) => worksheet.write_number(r, col, n as f64),
                FieldValue::Float(x) => worksheet.write_number(r, col, x),
            };

            written.map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {} on row {}: {}", field, r, e))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
