use crate::config::I18nConfig;
use crate::error::{ConvertError, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::{ApiErrorBody, BatchValues, SpreadsheetMetadata};

pub const GOOGLE_SHEET_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const FETCH_METADATA_ERROR: &str = "Failed to fetch spreadsheet metadata:";
pub const FETCH_BATCH_DATA_ERROR: &str = "Failed to fetch batch data:";
/// Metadata answered without a `sheets` list, usually a wrong id or key
pub const MISSING_SHEETS_MESSAGE: &str = "🛑 Please check the GOOGLE_SHEET_ID or GOOGLE_API_KEY.";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Source of spreadsheet metadata and cell values
pub trait SheetSource {
    /// List the sheets of the spreadsheet
    fn fetch_metadata(&self) -> Result<SpreadsheetMetadata>;

    /// Fetch several A1 ranges in one request, answered in request order
    fn fetch_values(&self, ranges: &[String]) -> Result<BatchValues>;
}

/// `SheetSource` backed by the Google Sheets v4 REST API, authenticated with
/// an API key
pub struct GoogleSheetsClient {
    http: Client,
    base_url: String,
    sheet_id: String,
    api_key: String,
}

impl GoogleSheetsClient {
    pub fn new(config: &I18nConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("i18n-sheet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConvertError::api_error("Failed to create HTTP client:", e.to_string()))?;

        Ok(Self {
            http,
            base_url: GOOGLE_SHEET_BASE_URL.to_string(),
            sheet_id: config.sheet_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Point the client at another API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn spreadsheet_url(&self) -> String {
        format!("{}/{}", self.base_url, self.sheet_id)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .map_err(|e| ConvertError::api_error(context, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ConvertError::api_error(context, e.to_string()))?;

        if !status.is_success() {
            return Err(ConvertError::api_error(context, api_error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| ConvertError::api_error(context, e.to_string()))
    }
}

impl SheetSource for GoogleSheetsClient {
    fn fetch_metadata(&self) -> Result<SpreadsheetMetadata> {
        self.get_json(
            &self.spreadsheet_url(),
            &[("key", self.api_key.as_str())],
            FETCH_METADATA_ERROR,
        )
    }

    fn fetch_values(&self, ranges: &[String]) -> Result<BatchValues> {
        let url = format!("{}/values:batchGet", self.spreadsheet_url());
        let mut query: Vec<(&str, &str)> = ranges.iter().map(|r| ("ranges", r.as_str())).collect();
        query.push(("key", self.api_key.as_str()));

        self.get_json(&url, &query, FETCH_BATCH_DATA_ERROR)
    }
}

/// Message from an API error body, or a generic one when it has none
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| "API Error".to_string())
}
