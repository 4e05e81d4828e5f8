//! Field extraction and numeric coercion for catalog records
//!
//! Numeric coercion never fails: a cell that does not parse as a finite real
//! number becomes missing, matching the per-row error model of the pipeline.

use super::column_mapping::ColumnMapping;
use csv::StringRecord;

/// Extract a trimmed string field, `None` when the column is absent or the
/// cell is empty
pub fn get_optional_str<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    let index = mapping.get_index(field_name)?;
    let value = record.get(index)?.trim();
    if value.is_empty() { None } else { Some(value) }
}

/// Extract an owned string field, `None` when absent or empty
pub fn parse_optional_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<String> {
    get_optional_str(record, mapping, field_name).map(str::to_string)
}

/// Coerce a field to a real number.
///
/// Empty cells, unparseable text, and non-finite values (NaN, inf) all
/// coerce to `None`.
pub fn parse_optional_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<f64> {
    let value = get_optional_str(record, mapping, field_name)?;
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
