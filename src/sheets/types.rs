use serde::Deserialize;

use crate::build::Row;

/// Response of `GET /spreadsheets/{id}`, reduced to what is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpreadsheetMetadata {
    pub sheets: Option<Vec<SheetInfo>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetInfo {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetProperties {
    pub title: String,
}

impl SpreadsheetMetadata {
    /// Build metadata from plain titles
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sheets = titles
            .into_iter()
            .map(|title| SheetInfo {
                properties: SheetProperties {
                    title: title.into(),
                },
            })
            .collect();
        Self {
            sheets: Some(sheets),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.sheets
            .iter()
            .flatten()
            .map(|sheet| sheet.properties.title.clone())
            .collect()
    }
}

/// Response of `values:batchGet`, one entry per requested range
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchValues {
    #[serde(rename = "valueRanges", default)]
    pub value_ranges: Vec<ValueRange>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValueRange {
    /// Absent when the range holds no data
    pub values: Option<Vec<Row>>,
}

impl ValueRange {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { values: Some(rows) }
    }

    pub fn rows(&self) -> &[Row] {
        self.values.as_deref().unwrap_or(&[])
    }
}

/// Error body returned by the API on non-success status
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: Option<String>,
}
