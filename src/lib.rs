pub mod build;
pub mod config;
pub mod error;
pub mod logger;
pub mod output;
pub mod sheets;

use rayon::prelude::*;
use std::path::PathBuf;

// Re-export commonly used types
pub use build::{
    build_locale_tree, Collision, KeyPath, LocaleNode, LocaleTree, RejectedRow, Row, Segment,
};
pub use config::{I18nConfig, SheetSelector};
pub use error::{ConvertError, Result};
pub use logger::Logger;
pub use output::LocaleWriter;
pub use sheets::{GoogleSheetsClient, SheetSource};

use sheets::client::{FETCH_METADATA_ERROR, MISSING_SHEETS_MESSAGE};

/// A shape collision found while building one sheet for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCollision {
    pub sheet: String,
    pub locale: String,
    pub collision: Collision,
}

/// A row left out of one sheet's document for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRejection {
    pub sheet: String,
    pub locale: String,
    pub row: RejectedRow,
}

/// Outcome of a generate run
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Selected sheets, in spreadsheet order
    pub selected_sheets: Vec<String>,
    /// Sheets that had data and were written
    pub written_sheets: Vec<String>,
    /// Every file written, sheet by sheet in configured locale order
    pub files: Vec<PathBuf>,
    pub collisions: Vec<SheetCollision>,
    pub rejected: Vec<SheetRejection>,
    /// Warnings printed to stderr, in order
    pub warnings: Vec<String>,
}

impl GenerateReport {
    fn warn(&mut self, logger: &Logger, message: String) {
        logger.warn(&message);
        self.warnings.push(message);
    }
}

/// Fetch the selected sheets and write one JSON document per sheet and locale
///
/// This function:
/// 1. Lists the spreadsheet's sheets and resolves the selection
/// 2. Fetches every selected range in a single batch request
/// 3. Builds one tree per configured locale for each sheet with data
/// 4. Hands each tree to the writer
///
/// Rows whose key path exceeds a build limit are always warned about. Shape
/// collisions are warned about only when `config.strict` is set; both are
/// recorded in the report either way.
///
/// Per-locale builds of a sheet run in parallel; row order within a sheet is
/// preserved for each build.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_generate<S>(
    config: &I18nConfig,
    selector: &SheetSelector,
    source: &S,
    writer: &LocaleWriter,
    logger: &Logger,
) -> Result<GenerateReport>
where
    S: SheetSource + ?Sized,
{
    let metadata = source.fetch_metadata()?;
    if metadata.sheets.is_none() {
        return Err(ConvertError::api_error(
            FETCH_METADATA_ERROR,
            MISSING_SHEETS_MESSAGE,
        ));
    }

    let all_titles = metadata.titles();
    let selected = config::select_sheets(
        selector,
        &all_titles,
        config.custom_included_sheets.as_deref(),
    );

    let mut report = GenerateReport {
        selected_sheets: selected.clone(),
        ..GenerateReport::default()
    };

    if selected.is_empty() {
        logger.info("No sheets to process.");
        return Ok(report);
    }

    let ranges: Vec<String> = selected
        .iter()
        .map(|title| config::range_for(title, config.languages.len()))
        .collect();
    logger.debug(&format!("Requesting ranges: {}", ranges.join(", ")));

    let batch = source.fetch_values(&ranges)?;

    for (title, value_range) in selected.iter().zip(&batch.value_ranges) {
        let rows = value_range.rows();
        if rows.is_empty() {
            logger.info(&format!("Sheet \"{}\" has no data.", title));
            continue;
        }

        let trees = config
            .languages
            .par_iter()
            .map(|locale| {
                build_locale_tree(rows, &config.languages, locale).map(|tree| (locale, tree))
            })
            .collect::<Result<Vec<_>>>()?;

        for (locale, tree) in trees {
            logger.debug(&format!(
                "Built {}/{} with {} keys from {} rows",
                locale,
                title,
                tree.root.leaf_count(),
                rows.len()
            ));

            for rejected in tree.rejected {
                report.warn(
                    logger,
                    format!(
                        "{} [{}]: skipped row '{}': {}",
                        title, locale, rejected.key, rejected.limit
                    ),
                );
                report.rejected.push(SheetRejection {
                    sheet: title.clone(),
                    locale: locale.clone(),
                    row: rejected,
                });
            }

            for collision in tree.collisions {
                if config.strict {
                    report.warn(logger, format!("{} [{}]: {}", title, locale, collision));
                }
                report.collisions.push(SheetCollision {
                    sheet: title.clone(),
                    locale: locale.clone(),
                    collision,
                });
            }

            report.files.push(writer.write(locale, title, &tree.root)?);
        }

        report.written_sheets.push(title.clone());
    }

    logger.success(&format!(
        "Updated {} sheets: {}",
        selected.len(),
        selected.join(", ")
    ));

    Ok(report)
}
