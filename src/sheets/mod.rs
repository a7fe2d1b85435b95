pub mod client;
pub mod types;

pub use client::{GoogleSheetsClient, SheetSource};
pub use types::{BatchValues, SheetInfo, SheetProperties, SpreadsheetMetadata, ValueRange};
