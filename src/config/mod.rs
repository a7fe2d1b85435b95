pub mod selection;
pub mod settings;

pub use selection::{column_letter, range_for, select_sheets, SheetSelector};
pub use settings::{I18nConfig, CONFIG_DOCS_URL, CONFIG_EXAMPLE, DEFAULT_CONFIG_FILE};
