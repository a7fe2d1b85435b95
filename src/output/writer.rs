use crate::build::LocaleNode;
use crate::error::Result;
use crate::logger::Logger;
use std::fs;
use std::path::PathBuf;

pub const OUTPUT_EXTENSION: &str = "json";

/// Writes locale documents to `<target_dir>/<locale>/<sheet>.json`
pub struct LocaleWriter {
    target_dir: PathBuf,
    logger: Logger,
}

impl LocaleWriter {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            logger: Logger::default(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Path the document for (`locale`, `sheet`) is written to
    pub fn file_path(&self, locale: &str, sheet: &str) -> PathBuf {
        self.target_dir
            .join(locale)
            .join(format!("{}.{}", sheet, OUTPUT_EXTENSION))
    }

    /// Serialize `node` as 2-space indented JSON and write it, creating the
    /// locale directory when needed.
    pub fn write(&self, locale: &str, sheet: &str, node: &LocaleNode) -> Result<PathBuf> {
        let locale_dir = self.target_dir.join(locale);
        if !locale_dir.is_dir() {
            fs::create_dir_all(&locale_dir)?;
            self.logger.folder_created(&locale_dir);
        }

        let path = self.file_path(locale, sheet);
        let mut content = serde_json::to_string_pretty(node)?;
        content.push('\n');
        fs::write(&path, content)?;

        self.logger.debug(&format!("Wrote {}", path.display()));
        Ok(path)
    }
}
