use crate::error::{ConvertError, Result};

/// Column holding the key path in every row
pub const COLUMN_OF_KEYS: usize = 0;

/// Resolve the row column holding values for `locale`.
///
/// The locale at position `i` of `languages` maps to column `i + 1`. A locale
/// missing from the list is an error rather than a read of the key column.
pub fn value_column(languages: &[String], locale: &str) -> Result<usize> {
    languages
        .iter()
        .position(|language| language == locale)
        .map(|index| index + 1)
        .ok_or_else(|| ConvertError::unknown_locale(locale, languages))
}

/// Value of `row` at `column`; absent cells read as an empty string
pub fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or("")
}
