//! CSV export of a filtered collection.

use crate::resource::{ExportSpec, Resource};
use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv output is not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("failed to flush csv writer: {0}")]
    Flush(String),
}

/// Writes `records` as CSV: a 1-based `SNo` column followed by the
/// configured columns. Absent values become empty cells.
pub fn to_csv<R: Resource>(records: &[&R], spec: &ExportSpec) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["SNo"];
    header.extend(spec.columns.iter().map(|column| column.header));
    writer.write_record(&header)?;

    for (index, record) in records.iter().enumerate() {
        let mut row = vec![(index + 1).to_string()];
        row.extend(
            spec.columns
                .iter()
                .map(|column| record.field_value(column.field).unwrap_or_default()),
        );
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders an RFC 3339 timestamp in local time; anything unparsable is
/// returned as is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(stamp) => stamp
            .with_timezone(&Local)
            .format("%d %b %Y, %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;

    #[test]
    fn rows_are_numbered_from_one() {
        let alice = Customer {
            id: "a".into(),
            name: "Alice".into(),
            email: "alice@shop.test".into(),
            mobile: "555, 0101".into(),
            ..Customer::default()
        };
        let bob = Customer {
            id: "b".into(),
            name: "Bob".into(),
            ..Customer::default()
        };
        let config = Customer::config();
        let spec = config.export.as_ref().expect("customers are exportable");

        let csv = to_csv(&[&alice, &bob], spec).expect("csv");
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "SNo,ID,Name,Email,Mobile,Location");
        assert_eq!(lines[1], "1,a,Alice,alice@shop.test,\"555, 0101\",");
        assert_eq!(lines[2], "2,b,Bob,,,");
    }

    #[test]
    fn unparsable_timestamp_is_kept() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_ne!(format_timestamp("2024-03-01T10:00:00.000Z"), "2024-03-01T10:00:00.000Z");
    }
}
